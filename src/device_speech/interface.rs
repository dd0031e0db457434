pub trait DeviceSpeech {
    /// Speak an utterance, interrupting any already playing.
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn cancel(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
