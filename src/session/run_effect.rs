use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_notification::interface::DeviceNotification;
use crate::device_speech::interface::DeviceSpeech;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::pokedex::core::Pokedex;
use crate::session::core::{Effect, Msg};
use rand::seq::IndexedRandom;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    device_speech: Arc<dyn DeviceSpeech + Send + Sync>,
    device_notification: Arc<dyn DeviceNotification + Send + Sync>,
    pokedex: Arc<Pokedex>,
    msg_sender: Sender<Msg>,
}

impl RunEffect {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_speech: Arc<dyn DeviceSpeech + Send + Sync>,
        device_notification: Arc<dyn DeviceNotification + Send + Sync>,
        pokedex: Arc<Pokedex>,
        msg_sender: Sender<Msg>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            device_camera,
            image_classifier,
            device_speech,
            device_notification,
            pokedex,
            msg_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.msg_sender.send(Msg::Tick(Instant::now())).is_err() {
                    break;
                }
            },
            Effect::StartCamera { run } => {
                let started = self.device_camera.start();
                let _ = self.msg_sender.send(Msg::CameraStartDone(run, started));
            }
            Effect::StopCamera => {
                if let Err(e) = self.device_camera.stop() {
                    let _ = self.logger.info(&format!("Failed to stop camera: {}", e));
                }
            }
            Effect::CaptureFrame { run } => {
                let frame = self.device_camera.capture_frame();
                let _ = self.msg_sender.send(Msg::FrameCaptureDone(run, frame));
            }
            Effect::Predict { run, frame } => {
                let probabilities = self.image_classifier.predict(&frame);
                let _ = self.msg_sender.send(Msg::PredictDone(run, probabilities));
            }
            Effect::Announce { label } => {
                if let Err(e) = self.announce(&label) {
                    let _ = self
                        .logger
                        .info(&format!("Failed to announce {}: {}", label, e));
                }
            }
            Effect::ClearAnnouncement => {
                if let Err(e) = self.device_speech.cancel() {
                    let _ = self.logger.info(&format!("Failed to cancel speech: {}", e));
                }
                if let Err(e) = self.device_notification.close() {
                    let _ = self
                        .logger
                        .info(&format!("Failed to close notification: {}", e));
                }
            }
        }
    }

    fn announce(&self, label: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(entry) = self.pokedex.lookup(label) else {
            self.logger
                .info(&format!("No pokedex entry for {}", label))?;
            return self.device_speech.speak(label);
        };

        let flavor_text = entry
            .flavor_texts
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or_default();

        self.device_speech.speak(&entry.announcement(flavor_text))?;
        self.device_notification.show(
            &format!("No.{} {}", entry.dex_number, entry.name),
            flavor_text,
        )?;

        Ok(())
    }
}
