use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::Arc;

pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
        }
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::clear()")?;
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "DeviceDisplayFake::write_line({}, {})",
            line, text
        ))?;
        Ok(())
    }

    fn write_bar(&mut self, label: &str, percentage: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "DeviceDisplayFake::write_bar({}, {:.1})",
            label, percentage
        ))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::flush()")?;
        Ok(())
    }
}
