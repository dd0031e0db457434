use crate::config::{read_metadata_labels, Config, ConfigError, DisplayKind};
use crate::session::core::Msg;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Announce Pikachu or Mimikyu when the camera sees one.
///
/// While running, type `start`, `stop` or `quit` on stdin. Closing stdin quits.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex-camera", version)]
pub struct Cli {
    /// Minimum top-class probability that counts as a detection.
    #[arg(long, default_value_t = 0.8)]
    pub threshold: f32,
    /// Milliseconds between captured frames.
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
    /// Show results in a window instead of the terminal.
    #[arg(long, default_value_t = false)]
    pub gui: bool,
    /// Comma-separated class names, in model output order.
    #[arg(long, value_delimiter = ',', conflicts_with = "metadata")]
    pub labels: Vec<String>,
    /// Read class names from a model's metadata.json.
    #[arg(long)]
    pub metadata: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let config = Config {
            tick_rate: Duration::from_millis(self.tick_ms.max(1)),
            display: if self.gui {
                DisplayKind::Gui
            } else {
                DisplayKind::Console
            },
            ..Config::default()
        }
        .with_threshold(self.threshold)?;

        match (self.labels.is_empty(), self.metadata) {
            (false, _) => config.with_labels(self.labels),
            (true, Some(path)) => config.with_labels(read_metadata_labels(&path)?),
            (true, None) => Ok(config),
        }
    }
}

/// Maps a line typed on stdin to a session message.
pub fn parse_command(line: &str) -> Option<Msg> {
    match line.trim().to_ascii_lowercase().as_str() {
        "start" => Some(Msg::Start),
        "stop" => Some(Msg::Stop),
        "quit" | "exit" | "q" => Some(Msg::Quit),
        _ => None,
    }
}
