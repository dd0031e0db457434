use crate::device_camera::interface::Frame;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassProbability {
    pub label: String,
    pub probability: f32,
}

impl ClassProbability {
    pub fn new(label: impl Into<String>, probability: f32) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Produces one probability per known class, in the model's class order.
pub trait ImageClassifier {
    fn predict(
        &self,
        frame: &Frame,
    ) -> Result<Vec<ClassProbability>, Box<dyn std::error::Error + Send + Sync>>;
}
