use clap::Parser;
use cli::{parse_command, Cli};
use config::DisplayKind;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::{DeviceDisplayGui, DisplayWindow};
use device_display::interface::DeviceDisplay;
use device_notification::impl_console::DeviceNotificationConsole;
use device_speech::impl_console::DeviceSpeechConsole;
use image_classifier::impl_fake::ImageClassifierFake;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use pokedex::core::Pokedex;
use session::core::Msg;
use session::main::Session;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

mod announcer;
mod cli;
mod config;
mod device_camera;
mod device_display;
mod device_notification;
mod device_speech;
mod image_classifier;
mod library;
mod pokedex;
mod session;

/// Forwards stdin commands to the session. End of input quits.
fn spawn_commands(sender: Sender<Msg>, logger: Arc<dyn Logger + Send + Sync>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };

            match parse_command(&line) {
                Some(msg) => {
                    if sender.send(msg).is_err() {
                        return;
                    }
                }
                None => {
                    let _ = logger.info(&format!(
                        "Unknown command {:?}, expected start, stop or quit",
                        line.trim()
                    ));
                }
            }
        }

        let _ = sender.send(Msg::Quit);
    });
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Cli::parse().into_config()?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(
        logger.clone(),
        config.frame_width,
        config.frame_height,
    ));

    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone(), config.labels.clone()));

    let (device_display, window): (Arc<Mutex<dyn DeviceDisplay + Send + Sync>>, Option<DisplayWindow>) =
        match config.display {
            DisplayKind::Console => (Arc::new(Mutex::new(DeviceDisplayConsole::new())), None),
            DisplayKind::Gui => {
                let display = DeviceDisplayGui::new();
                let window = display.window(&format!("{}?", config.labels.join("? ")));
                (Arc::new(Mutex::new(display)), Some(window))
            }
        };
    device_display
        .lock()
        .map_err(|e| e.to_string())?
        .init()?;

    let device_speech = Arc::new(DeviceSpeechConsole::new(logger.clone()));

    let device_notification = Arc::new(DeviceNotificationConsole::new(logger.clone()));

    let pokedex = Arc::new(Pokedex::embedded()?);
    logger.info(&format!("Loaded {} pokedex entries", pokedex.entries().len()))?;
    logger.info(&format!("Labels: {}", config.labels.join(", ")))?;

    let session = Session::new(
        config,
        logger.clone(),
        device_camera,
        image_classifier,
        device_display,
        device_speech,
        device_notification,
        pokedex,
    );

    let sender = session.sender();

    spawn_commands(sender.clone(), logger.clone());

    sender.send(Msg::Start)?;

    let session_thread = std::thread::spawn(move || session.run());

    // The window has to own the main thread; closing it ends the session.
    if let Some(window) = window {
        if let Err(e) = window.run() {
            logger.info(&format!("Display window failed: {}", e))?;
        }
        let _ = sender.send(Msg::Quit);
    }

    session_thread
        .join()
        .map_err(|_| "Session thread panicked")??;

    Ok(())
}
