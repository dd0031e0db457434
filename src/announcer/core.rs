use crate::config::Threshold;
use crate::image_classifier::interface::ClassProbability;
use thiserror::Error;

pub const NOT_DETECTED: &str = "Not detected";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("invalid frame: {0}")]
    InvalidFrame(&'static str),
}

/// Which label, if any, is currently being announced.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AnnouncementState {
    #[default]
    None,
    Active(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnnouncementEvent {
    None,
    Start(String),
    Clear,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub percentage: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayResult {
    pub bars: Vec<Bar>,
    pub top_label: String,
    pub top_probability: f32,
}

impl DisplayResult {
    pub fn is_detected(&self, threshold: Threshold) -> bool {
        self.top_probability >= threshold.value()
    }

    pub fn caption(&self, threshold: Threshold) -> String {
        if self.is_detected(threshold) {
            format!("{}: {:.2}", self.top_label, self.top_probability)
        } else {
            NOT_DETECTED.to_string()
        }
    }
}

/// First class with the strictly greatest probability.
fn top_class(frame: &[ClassProbability]) -> Option<&ClassProbability> {
    frame.iter().fold(None, |best, current| match best {
        Some(best) if current.probability <= best.probability => Some(best),
        _ => Some(current),
    })
}

/// Turns one frame of classifier output into display values plus an
/// announcement event. At most one `Start` is emitted per label per run of
/// above-threshold frames.
pub fn decide(
    frame: &[ClassProbability],
    threshold: Threshold,
    state: &AnnouncementState,
) -> Result<(DisplayResult, AnnouncementEvent, AnnouncementState), DecideError> {
    if frame.iter().any(|c| !c.probability.is_finite()) {
        return Err(DecideError::InvalidFrame("non-finite probability"));
    }

    let top = top_class(frame).ok_or(DecideError::InvalidFrame("empty frame"))?;

    let display = DisplayResult {
        bars: frame
            .iter()
            .map(|c| Bar {
                label: c.label.clone(),
                percentage: c.probability * 100.0,
            })
            .collect(),
        top_label: top.label.clone(),
        top_probability: top.probability,
    };

    let detected = top.probability >= threshold.value();

    let (event, next) = match state {
        AnnouncementState::Active(label) if detected && *label == top.label => {
            (AnnouncementEvent::None, state.clone())
        }
        _ if detected => (
            AnnouncementEvent::Start(top.label.clone()),
            AnnouncementState::Active(top.label.clone()),
        ),
        AnnouncementState::Active(_) => (AnnouncementEvent::Clear, AnnouncementState::None),
        AnnouncementState::None => (AnnouncementEvent::None, AnnouncementState::None),
    };

    Ok((display, event, next))
}
