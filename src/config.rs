use chrono::{Offset, Utc};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f32),
    #[error("no class labels configured")]
    NoLabels,
    #[error("failed to read model metadata: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Minimum top-class probability that counts as a detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f32);

impl Threshold {
    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ThresholdOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(0.8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub threshold: Threshold,
    pub labels: Vec<String>,
    pub frame_width: u32,
    pub frame_height: u32,
    pub display: DisplayKind,
    pub logger_timezone: chrono::FixedOffset,
}

impl Config {
    pub fn with_threshold(self, threshold: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            ..self
        })
    }

    /// Class names in the order the model emits them. Blank names are
    /// dropped; an empty list is rejected.
    pub fn with_labels(self, labels: Vec<String>) -> Result<Self, ConfigError> {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();

        if labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }

        Ok(Self { labels, ..self })
    }
}

/// The `metadata.json` exported next to an image model, e.g.
/// `{"labels": ["Pikachu", "Mimikyu"], ...}`. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct ModelMetadata {
    labels: Vec<String>,
}

pub fn labels_from_metadata(json: &str) -> Result<Vec<String>, ConfigError> {
    let metadata: ModelMetadata = serde_json::from_str(json)?;
    Ok(metadata.labels)
}

pub fn read_metadata_labels(path: &Path) -> Result<Vec<String>, ConfigError> {
    labels_from_metadata(&std::fs::read_to_string(path)?)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            threshold: Threshold::default(),
            labels: vec!["Pikachu".to_string(), "Mimikyu".to_string()],
            frame_width: 200,
            frame_height: 200,
            display: DisplayKind::Console,
            logger_timezone: japan_standard_time(),
        }
    }
}

fn japan_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(9 * 3600).unwrap_or(Utc.fix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_accepts_bounds() {
        assert_eq!(Threshold::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Threshold::new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn test_threshold_rejects_out_of_range() {
        assert!(matches!(
            Threshold::new(1.5),
            Err(ConfigError::ThresholdOutOfRange(v)) if v == 1.5
        ));
        assert!(matches!(
            Threshold::new(-0.1),
            Err(ConfigError::ThresholdOutOfRange(v)) if v == -0.1
        ));
        assert!(Threshold::new(f32::NAN).is_err());
    }

    #[test]
    fn test_with_threshold() {
        let config = Config::default().with_threshold(0.6).unwrap();
        assert_eq!(config.threshold.value(), 0.6);

        assert!(Config::default().with_threshold(2.0).is_err());
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(Config::default().threshold.value(), 0.8);
    }

    #[test]
    fn test_with_labels() {
        let config = Config::default()
            .with_labels(vec![" Eevee ".to_string(), "".to_string(), "Ditto".to_string()])
            .unwrap();
        assert_eq!(config.labels, vec!["Eevee", "Ditto"]);

        assert!(matches!(
            Config::default().with_labels(vec![" ".to_string()]),
            Err(ConfigError::NoLabels)
        ));
    }

    #[test]
    fn test_labels_from_metadata() {
        let labels = labels_from_metadata(
            r#"{
                "tfjsVersion": "1.3.1",
                "modelName": "tm-my-image-model",
                "labels": ["Pikachu", "Mimikyu", "Background"],
                "imageSize": 224
            }"#,
        )
        .unwrap();

        assert_eq!(labels, vec!["Pikachu", "Mimikyu", "Background"]);
    }

    #[test]
    fn test_metadata_without_labels_is_rejected() {
        assert!(matches!(
            labels_from_metadata(r#"{ "modelName": "x" }"#),
            Err(ConfigError::Metadata(_))
        ));
        assert!(matches!(
            read_metadata_labels(Path::new("/nonexistent/metadata.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
