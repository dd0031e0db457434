use crate::session::core::Effect;
use crate::session::run_effect::RunEffect;
use std::sync::mpsc::{channel, Sender};
use std::sync::Mutex;
use std::thread::JoinHandle;

/// Runs `Announce`/`ClearAnnouncement` one at a time on a single thread so a
/// clear can never overtake the announcement it cancels.
pub struct AnnouncementWorker {
    sender: Mutex<Option<Sender<Effect>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl AnnouncementWorker {
    pub fn spawn(run_effect: RunEffect) -> Self {
        let (sender, receiver) = channel::<Effect>();

        let handle = std::thread::spawn(move || {
            for effect in receiver {
                run_effect.run_effect(effect);
            }
        });

        Self {
            sender: Mutex::new(Some(sender)),
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn dispatch(&self, effect: Effect) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let sender = self.sender.lock().map_err(|e| e.to_string())?;

        match sender.as_ref() {
            Some(sender) => sender.send(effect).map_err(|e| e.to_string())?,
            None => return Err("Announcement worker is shut down".into()),
        }

        Ok(())
    }

    /// Drains queued effects and joins the thread.
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.sender.lock().map_err(|e| e.to_string())?.take();

        if let Some(handle) = self.handle.lock().map_err(|e| e.to_string())?.take() {
            handle
                .join()
                .map_err(|_| "Announcement worker panicked")?;
        }

        Ok(())
    }
}
