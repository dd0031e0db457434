use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

const WIDTH: usize = 36;
const BAR_WIDTH: usize = 20;

pub struct DeviceDisplayConsole {
    lines: [String; 2],
    bars: Vec<(String, f32)>,
    last_rendered: Option<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
            bars: vec![],
            last_rendered: None,
        }
    }

    fn render_display(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("┌{}┐\n", "─".repeat(WIDTH)));
        for line in &self.lines {
            out.push_str(&format!("│{}│\n", pad(line)));
        }
        for (label, percentage) in &self.bars {
            out.push_str(&format!("│{}│\n", pad(&bar_text(label, *percentage))));
        }
        out.push_str(&format!("└{}┘", "─".repeat(WIDTH)));
        out
    }
}

fn pad(text: &str) -> String {
    let truncated: String = text.chars().take(WIDTH).collect();
    let fill = WIDTH - truncated.chars().count();
    format!("{}{}", truncated, " ".repeat(fill))
}

pub fn bar_text(label: &str, percentage: f32) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    let label: String = label.chars().take(8).collect();
    format!(
        "{:<8} {}{} {:>5.1}%",
        label,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percentage
    )
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.flush()
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = [String::new(), String::new()];
        self.bars.clear();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.lines[line as usize] = text.to_string();
        Ok(())
    }

    fn write_bar(&mut self, label: &str, percentage: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.bars.push((label.to_string(), percentage));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let rendered = self.render_display();
        // Skip identical redraws, the session renders on every message.
        if self.last_rendered.as_deref() != Some(rendered.as_str()) {
            println!("{}", rendered);
            self.last_rendered = Some(rendered);
        }
        Ok(())
    }
}
