use serde::Serialize;

/// Lifecycle of the single in-flight generation request
///
/// At most one of {Submitting, Succeeded, Failed} is active; a new
/// submission clears the previous outcome before the call starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationState {
    /// Nothing submitted yet
    Idle,

    /// A request is in flight; further submissions are refused
    Submitting,

    /// Raw response text of the last completed request
    Succeeded { raw: String },

    /// User-facing message of the last failed request
    Failed { message: String },
}

/// Events driving the submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// User submitted a topic
    Submit { topic: String },

    /// Response text arrived for the in-flight request
    Completed { raw: String },

    /// The in-flight request failed with a user-facing message
    Failed { message: String },
}

impl GenerationState {
    /// True while a request is in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Apply an event, returning the next state.
    ///
    /// None means the event is a no-op in the current state (empty topic,
    /// duplicate submit, or a stale completion) and the state must not
    /// change.
    pub fn apply(&self, event: &GenerationEvent) -> Option<GenerationState> {
        match (self, event) {
            // At most one outstanding request
            (Self::Submitting, GenerationEvent::Submit { .. }) => None,
            (_, GenerationEvent::Submit { topic }) => {
                if topic.trim().is_empty() {
                    None
                } else {
                    Some(Self::Submitting)
                }
            }
            (Self::Submitting, GenerationEvent::Completed { raw }) => {
                Some(Self::Succeeded { raw: raw.clone() })
            }
            (Self::Submitting, GenerationEvent::Failed { message }) => {
                Some(Self::Failed {
                    message: message.clone(),
                })
            }
            // Completion events outside an in-flight request are stale
            _ => None,
        }
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::Idle
    }
}
