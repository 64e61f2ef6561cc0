//! Per-view lifecycle states.
//!
//! Each view activation owns exactly one of these values; nothing is
//! persisted across activations.

/// Lifecycle of a fetch-and-render view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Request issued, response not yet applied.
    Loading,
    /// Response parsed; may be an empty page.
    Loaded(T),
    /// Non-2xx status, transport failure, or parse failure.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Lifecycle of the creation form.
///
/// Success navigates away from the view entirely, so there is no terminal
/// `Succeeded` variant to retain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// Back at rest after a remote failure, with the message to surface.
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Error message to re-present in the form, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
