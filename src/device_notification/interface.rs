/// A single toast-style notification slot. Showing replaces whatever is open.
pub trait DeviceNotification {
    fn show(&self, title: &str, body: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
