use std::error::Error;

/// Text lines plus a live bar chart of class probabilities.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Clear all lines and bars
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based index)
    /// Returns error if line number is out of range
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Append one bar to the chart, `percentage` in [0, 100]
    fn write_bar(&mut self, label: &str, percentage: f32) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Present everything written since the last `clear`
    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> u8 {
        2
    }
}
