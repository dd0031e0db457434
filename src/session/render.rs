use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::session::core::{Model, ModelCamera};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>, config: Config) -> Self {
        Self {
            device_display,
            config,
        }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        device_display.clear()?;

        match model {
            Model::Stopped { .. } => {
                device_display.write_line(0, "Press start")?;
            }
            Model::Running(running) => match (&running.camera, &running.display) {
                (ModelCamera::Starting, _) => {
                    device_display.write_line(0, "Starting camera...")?;
                }
                (_, None) => {
                    device_display.write_line(0, "Analyzing...")?;
                }
                (_, Some(result)) => {
                    device_display.write_line(0, &result.caption(self.config.threshold))?;
                    for bar in &result.bars {
                        device_display.write_bar(&bar.label, bar.percentage)?;
                    }
                }
            },
        }

        device_display.flush()?;

        Ok(())
    }
}
