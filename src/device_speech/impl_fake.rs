use crate::device_speech::interface::DeviceSpeech;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCall {
    Speak(String),
    Cancel,
}

#[derive(Default)]
pub struct DeviceSpeechFake {
    calls: Mutex<Vec<SpeechCall>>,
    delay: Duration,
}

impl DeviceSpeechFake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `delay` to finish each utterance, like a real synthesizer.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SpeechCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl DeviceSpeech for DeviceSpeechFake {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        std::thread::sleep(self.delay);
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .push(SpeechCall::Speak(text.to_string()));
        Ok(())
    }

    fn cancel(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .push(SpeechCall::Cancel);
        Ok(())
    }
}
