use crate::device_notification::interface::DeviceNotification;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct DeviceNotificationConsole {
    open: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceNotificationConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            open: AtomicBool::new(false),
            logger: logger
                .with_namespace("notification")
                .with_namespace("console"),
        }
    }
}

impl DeviceNotification for DeviceNotificationConsole {
    fn show(&self, title: &str, body: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.open.store(true, Ordering::SeqCst);
        self.logger.info(&format!("[{}] {}", title, body))?;
        Ok(())
    }

    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.open.swap(false, Ordering::SeqCst) {
            self.logger.info("Notification closed")?;
        }
        Ok(())
    }
}
