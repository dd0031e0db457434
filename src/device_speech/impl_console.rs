use crate::device_speech::interface::DeviceSpeech;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct DeviceSpeechConsole {
    speaking: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceSpeechConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            speaking: AtomicBool::new(false),
            logger: logger.with_namespace("speech").with_namespace("console"),
        }
    }
}

impl DeviceSpeech for DeviceSpeechConsole {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.speaking.store(true, Ordering::SeqCst);
        self.logger.info(&format!("🔊 {}", text))?;
        Ok(())
    }

    fn cancel(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.speaking.swap(false, Ordering::SeqCst) {
            self.logger.info("Speech cancelled")?;
        }
        Ok(())
    }
}
