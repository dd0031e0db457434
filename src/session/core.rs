use crate::announcer::core::{decide, AnnouncementEvent, AnnouncementState, DisplayResult};
use crate::config::Config;
use crate::device_camera::interface::Frame;
use crate::image_classifier::interface::ClassProbability;
use std::time::Instant;

//
//
//

#[derive(Clone, Debug, PartialEq)]
pub enum Model {
    Stopped { last_run: u64 },
    Running(ModelRunning),
}

impl Default for Model {
    fn default() -> Self {
        Model::Stopped { last_run: 0 }
    }
}

/// Device results are tagged with `run` so late replies from a stopped run
/// are dropped.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ModelRunning {
    pub run: u64,
    pub camera: ModelCamera,
    pub announcement: AnnouncementState,
    pub display: Option<DisplayResult>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModelCamera {
    #[default]
    Starting,
    Idle,
    Capturing,
    Predicting,
}

#[derive(Debug)]
pub enum Msg {
    Start,
    Stop,
    /// Stop if running, then end the session loop.
    Quit,
    Tick(Instant),
    CameraStartDone(u64, Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptureDone(u64, Result<Frame, Box<dyn std::error::Error + Send + Sync>>),
    PredictDone(
        u64,
        Result<Vec<ClassProbability>, Box<dyn std::error::Error + Send + Sync>>,
    ),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SubscribeTick,
    StartCamera { run: u64 },
    StopCamera,
    CaptureFrame { run: u64 },
    Predict { run: u64, frame: Frame },
    Announce { label: String },
    ClearAnnouncement,
}

impl Effect {
    /// Effects that touch speech or notification and must run in order.
    pub fn is_announcement(&self) -> bool {
        matches!(self, Effect::Announce { .. } | Effect::ClearAnnouncement)
    }
}

//
//
//

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![Effect::SubscribeTick])
}

//
//
//

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model, msg) {
        (Model::Stopped { last_run }, Msg::Start) => {
            let run = last_run + 1;
            (
                Model::Running(ModelRunning {
                    run,
                    ..ModelRunning::default()
                }),
                vec![Effect::StartCamera { run }],
            )
        }

        // Dropping the running model resets the announcement state.
        (Model::Running(running), Msg::Stop | Msg::Quit) => (
            Model::Stopped {
                last_run: running.run,
            },
            vec![Effect::StopCamera, Effect::ClearAnnouncement],
        ),

        (Model::Running(running), msg) => transition_running(config, running, msg),

        (model, _) => (model, vec![]),
    }
}

fn transition_running(config: &Config, running: ModelRunning, msg: Msg) -> (Model, Vec<Effect>) {
    let run = running.run;

    match (running.camera, msg) {
        (_, Msg::CameraStartDone(from, _))
        | (_, Msg::FrameCaptureDone(from, _))
        | (_, Msg::PredictDone(from, _))
            if from != run =>
        {
            (Model::Running(running), vec![])
        }

        (ModelCamera::Starting, Msg::CameraStartDone(_, Ok(()))) => (
            Model::Running(ModelRunning {
                camera: ModelCamera::Idle,
                ..running
            }),
            vec![],
        ),

        (ModelCamera::Starting, Msg::CameraStartDone(_, Err(_))) => {
            (Model::Running(running), vec![Effect::StartCamera { run }])
        }

        (ModelCamera::Idle, Msg::Tick(_)) => (
            Model::Running(ModelRunning {
                camera: ModelCamera::Capturing,
                ..running
            }),
            vec![Effect::CaptureFrame { run }],
        ),

        (ModelCamera::Capturing, Msg::FrameCaptureDone(_, Ok(frame))) => (
            Model::Running(ModelRunning {
                camera: ModelCamera::Predicting,
                ..running
            }),
            vec![Effect::Predict { run, frame }],
        ),

        (ModelCamera::Capturing, Msg::FrameCaptureDone(_, Err(_)))
        | (ModelCamera::Predicting, Msg::PredictDone(_, Err(_))) => (
            Model::Running(ModelRunning {
                camera: ModelCamera::Idle,
                ..running
            }),
            vec![],
        ),

        (ModelCamera::Predicting, Msg::PredictDone(_, Ok(probabilities))) => {
            transition_prediction(config, running, &probabilities)
        }

        (_, _) => (Model::Running(running), vec![]),
    }
}
fn transition_prediction(
    config: &Config,
    running: ModelRunning,
    probabilities: &[ClassProbability],
) -> (Model, Vec<Effect>) {
    match decide(probabilities, config.threshold, &running.announcement) {
        Ok((display, event, announcement)) => {
            let effects = match event {
                AnnouncementEvent::Start(label) => vec![Effect::Announce { label }],
                AnnouncementEvent::Clear => vec![Effect::ClearAnnouncement],
                AnnouncementEvent::None => vec![],
            };

            (
                Model::Running(ModelRunning {
                    camera: ModelCamera::Idle,
                    announcement,
                    display: Some(display),
                    ..running
                }),
                effects,
            )
        }

        // Skip the frame; the next tick tries again.
        Err(_) => (
            Model::Running(ModelRunning {
                camera: ModelCamera::Idle,
                ..running
            }),
            vec![],
        ),
    }
}
