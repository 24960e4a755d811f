//! Tagged result for in-flight remote data.

/// Lifecycle of an asynchronous fetch as seen by the UI: nothing yet, data,
/// or a display-ready error string.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Unresolved,
    Resolved(T),
    Errored(String),
}

impl<T> FetchState<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, FetchState::Resolved(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Errored(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Unresolved
    }
}
