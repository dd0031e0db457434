use crate::device_camera::interface::Frame;
use crate::image_classifier::interface::{ClassProbability, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::Arc;

pub struct ImageClassifierFake {
    labels: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, labels: Vec<String>) -> Self {
        Self {
            labels,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(
        &self,
        frame: &Frame,
    ) -> Result<Vec<ClassProbability>, Box<dyn std::error::Error + Send + Sync>> {
        if self.labels.is_empty() {
            return Err("No labels configured".into());
        }

        let mut rng = rand::rng();

        // Skew one class so detections actually happen now and then.
        let favored = rng.random_range(0..self.labels.len());
        let weights: Vec<f32> = (0..self.labels.len())
            .map(|i| {
                let weight = rng.random::<f32>();
                if i == favored {
                    weight * 4.0
                } else {
                    weight
                }
            })
            .collect();
        let total: f32 = weights.iter().sum::<f32>().max(f32::EPSILON);

        let probabilities: Vec<ClassProbability> = self
            .labels
            .iter()
            .zip(weights)
            .map(|(label, weight)| ClassProbability::new(label.clone(), weight / total))
            .collect();

        self.logger.info(&format!(
            "Classified {}x{} frame: {:?}",
            frame.width, frame.height, probabilities
        ))?;

        Ok(probabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    #[test]
    fn test_predict_covers_every_label() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let classifier = ImageClassifierFake::new(
            logger,
            vec!["Pikachu".to_string(), "Mimikyu".to_string()],
        );
        let frame = Frame {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0],
        };

        let probabilities = classifier.predict(&frame).unwrap();

        assert_eq!(probabilities.len(), 2);
        assert_eq!(probabilities[0].label, "Pikachu");
        assert_eq!(probabilities[1].label, "Mimikyu");
        assert!(probabilities
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.probability)));
        let total: f32 = probabilities.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_predict_without_labels_fails() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let classifier = ImageClassifierFake::new(logger, vec![]);
        let frame = Frame {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0],
        };

        assert!(classifier.predict(&frame).is_err());
    }
}
