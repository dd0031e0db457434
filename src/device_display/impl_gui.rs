use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default, Clone)]
struct Screen {
    lines: [String; 2],
    bars: Vec<(String, f32)>,
}

/// The window half of [`DeviceDisplayGui`]. winit only opens windows on
/// the main thread, so the host runs this there and the session drives the
/// display from a worker thread.
pub struct DisplayWindow {
    heading: String,
    presented: Arc<Mutex<Screen>>,
}

impl DisplayWindow {
    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([360.0, 240.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native(
            "Pokedex Camera",
            options,
            Box::new(move |_cc| Box::new(self)),
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Frames arrive from the session thread, keep polling for them.
        ctx.request_repaint_after(Duration::from_millis(50));

        let Ok(screen) = self.presented.lock() else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(&self.heading);
                ui.add_space(8.0);

                for line in screen.lines.iter().filter(|line| !line.is_empty()) {
                    ui.label(egui::RichText::new(line).monospace().size(20.0));
                }

                ui.add_space(12.0);

                for (label, percentage) in &screen.bars {
                    ui.add(
                        egui::ProgressBar::new((percentage / 100.0).clamp(0.0, 1.0))
                            .text(format!("{} {:.1}%", label, percentage)),
                    );
                }
            });
        });
    }
}

pub struct DeviceDisplayGui {
    pending: Screen,
    presented: Arc<Mutex<Screen>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            pending: Screen::default(),
            presented: Arc::new(Mutex::new(Screen::default())),
        }
    }

    pub fn window(&self, heading: &str) -> DisplayWindow {
        DisplayWindow {
            heading: heading.to_string(),
            presented: self.presented.clone(),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending = Screen::default();
        self.flush()
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending = Screen::default();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.pending.lines[line as usize] = text.to_string();
        Ok(())
    }

    fn write_bar(&mut self, label: &str, percentage: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending.bars.push((label.to_string(), percentage));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut presented = self.presented.lock().map_err(|e| e.to_string())?;
        *presented = self.pending.clone();
        Ok(())
    }
}
