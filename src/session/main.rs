use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_notification::interface::DeviceNotification;
use crate::device_speech::interface::DeviceSpeech;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::pokedex::core::Pokedex;
use crate::session::announcement_worker::AnnouncementWorker;
use crate::session::core::{init, transition, Effect, Msg};
use crate::session::render::Render;
use crate::session::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Session {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    render: Render,
    run_effect: RunEffect,
    announcement_worker: Arc<AnnouncementWorker>,
    msg_sender: Sender<Msg>,
    msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl Session {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_speech: Arc<dyn DeviceSpeech + Send + Sync>,
        device_notification: Arc<dyn DeviceNotification + Send + Sync>,
        pokedex: Arc<Pokedex>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let logger = logger.with_namespace("session");
        let run_effect = RunEffect::new(
            config.clone(),
            logger.clone(),
            device_camera,
            image_classifier,
            device_speech,
            device_notification,
            pokedex,
            msg_sender.clone(),
        );

        Self {
            render: Render::new(device_display, config.clone()),
            announcement_worker: Arc::new(AnnouncementWorker::spawn(run_effect.clone())),
            run_effect,
            config,
            logger,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    /// Handle for the host to send `Start`/`Stop`/`Quit`.
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_sender.clone()
    }

    fn dispatch_announcement(&self, effect: Effect) {
        if let Err(e) = self.announcement_worker.dispatch(effect) {
            let _ = self
                .logger
                .info(&format!("Failed to queue announcement: {}", e));
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            if effect.is_announcement() {
                self.dispatch_announcement(effect);
                continue;
            }
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    /// Runs the last effects before quitting and waits for queued
    /// announcements to finish.
    fn finish(&self, effects: Vec<Effect>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for effect in effects {
            if effect.is_announcement() {
                self.dispatch_announcement(effect);
            } else {
                self.run_effect.run_effect(effect);
            }
        }

        self.announcement_worker.shutdown()
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let msg_receiver = self.msg_receiver.lock().map_err(|e| e.to_string())?;

        let (mut current_model, effects) = init();

        self.render.render(&current_model)?;

        self.spawn_effects(effects);

        while let Ok(msg) = msg_receiver.recv() {
            let quit = matches!(msg, Msg::Quit);

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
                current_model, msg,
            ));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model, effects
            ));

            current_model = new_model;

            if let Err(e) = self.render.render(&current_model) {
                let _ = self.logger.info(&format!("Failed to render: {}", e));
            }

            if quit {
                self.finish(effects)?;
                let _ = self.logger.info("Session ended");
                break;
            }

            self.spawn_effects(effects);
        }

        Ok(())
    }
}
