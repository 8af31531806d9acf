//! Alert delivery
//!
//! The geometry core only produces [`CurveAssessment`]s. Turning one into a
//! user-facing message and delivering it is the job of this module and of
//! whichever [`Alerter`] the embedding application injects.

use parking_lot::Mutex;
use tracing::warn;

use crate::core::speed_advisor::CurveAssessment;

/// Capability for delivering a caution message to the driver.
pub trait Alerter: Send + Sync {
    fn announce(&self, message: &str);
}

/// Caution text for an assessment, or `None` when no alert is due.
pub fn caution_message(assessment: &CurveAssessment) -> Option<String> {
    match assessment.safe_speed_kmh {
        Some(safe) if assessment.exceeded => Some(format!(
            "Caution. Sharp curve ahead. Reduce speed to {} kilometers per hour.",
            safe
        )),
        _ => None,
    }
}

/// Writes alerts to stdout.
///
/// Carries the configured speech rate so the console output mirrors what a
/// speech-capable alerter would be asked to say.
#[derive(Debug, Clone)]
pub struct ConsoleAlerter {
    speech_rate: u32,
}

impl ConsoleAlerter {
    pub fn new(speech_rate: u32) -> Self {
        Self { speech_rate }
    }

    pub fn speech_rate(&self) -> u32 {
        self.speech_rate
    }
}

impl Alerter for ConsoleAlerter {
    fn announce(&self, message: &str) {
        println!("[ALERT @ {} wpm] {}", self.speech_rate, message);
    }
}

/// Emits alerts as `warn!` events.
#[derive(Debug, Clone, Default)]
pub struct TracingAlerter;

impl Alerter for TracingAlerter {
    fn announce(&self, message: &str) {
        warn!(target: "geosafe::alert", "{}", message);
    }
}

/// Keeps every announced message, for callers that deliver alerts later.
#[derive(Debug, Default)]
pub struct RecordingAlerter {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl Alerter for RecordingAlerter {
    fn announce(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
