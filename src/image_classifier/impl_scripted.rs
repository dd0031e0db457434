use crate::device_camera::interface::Frame;
use crate::image_classifier::interface::{ClassProbability, ImageClassifier};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed sequence of classifier outputs, one per call.
pub struct ImageClassifierScripted {
    outputs: Mutex<VecDeque<Vec<ClassProbability>>>,
}

impl ImageClassifierScripted {
    pub fn new(outputs: Vec<Vec<ClassProbability>>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
        }
    }
}

impl ImageClassifier for ImageClassifierScripted {
    fn predict(
        &self,
        _frame: &Frame,
    ) -> Result<Vec<ClassProbability>, Box<dyn std::error::Error + Send + Sync>> {
        let next = self.outputs.lock().map_err(|e| e.to_string())?.pop_front();
        next.ok_or_else(|| "Script exhausted".into())
    }
}
