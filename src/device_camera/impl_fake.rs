use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    started: AtomicBool,
    width: u32,
    height: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, width: u32, height: u32) -> Self {
        Self {
            started: AtomicBool::new(false),
            width,
            height,
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.started.store(true, Ordering::SeqCst);
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("Camera is not started".into());
        }

        Ok(Frame {
            width: self.width,
            height: self.height,
            pixels: vec![0; (self.width * self.height * 3) as usize],
        })
    }
}
