use crate::device_notification::interface::DeviceNotification;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationCall {
    Show { title: String, body: String },
    Close,
}

#[derive(Default)]
pub struct DeviceNotificationFake {
    calls: Mutex<Vec<NotificationCall>>,
}

impl DeviceNotificationFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<NotificationCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl DeviceNotification for DeviceNotificationFake {
    fn show(&self, title: &str, body: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .push(NotificationCall::Show {
                title: title.to_string(),
                body: body.to_string(),
            });
        Ok(())
    }

    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .push(NotificationCall::Close);
        Ok(())
    }
}
