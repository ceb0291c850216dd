use crate::config::Config;
use crate::history::{ChatRecord, MessageRole, Transcript};
use crate::properties::PropertyBag;

/// Property key for the panel's selected model.
pub const PROP_MODEL: &str = "model";

/// Live state of one embedded chat panel.
///
/// The host owns the durable property bag and decides where it is stored;
/// the panel only decides which keys go into it. Restoring from a bag never
/// fails: a missing key falls back to its default and unknown keys are
/// ignored, so bags written by older versions or shared with the host stay
/// usable.
#[derive(Debug, Clone)]
pub struct ChatPanel {
    model: String,
    transcript: Transcript,
}

impl ChatPanel {
    /// Fresh panel seeded from the effective configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            model: config.get_model(),
            transcript: Transcript::default().with_limit(config.get_history_limit()),
        }
    }

    /// Panel with every persisted field at its restore default.
    pub fn empty() -> Self {
        Self {
            model: String::new(),
            transcript: Transcript::default(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn set_transcript(&mut self, transcript: Transcript) {
        self.transcript = transcript;
    }

    /// Record a message the user typed into the panel.
    pub fn record_user_message(&mut self, content: impl Into<String>) {
        self.transcript
            .push(ChatRecord::new(MessageRole::User, content));
    }

    /// Record a reply the host received from the chat service.
    pub fn record_assistant_message(&mut self, content: impl Into<String>) {
        self.transcript
            .push(ChatRecord::new(MessageRole::Assistant, content));
    }

    /// Write the panel's persisted fields into the host bag.
    ///
    /// Total: every recognized key gets a value, keys belonging to the host
    /// are left alone.
    pub fn write_properties(&self, bag: &mut PropertyBag) {
        bag.set(PROP_MODEL, self.model.clone());
    }

    /// Populate the panel from the host bag.
    ///
    /// Total: a missing key restores its default (empty model), unknown keys
    /// are ignored.
    pub fn read_properties(&mut self, bag: &PropertyBag) {
        self.model = bag.get(PROP_MODEL).unwrap_or_default().to_string();
    }
}
