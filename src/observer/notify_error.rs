use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum NotifyError {
    /// An observer could not handle an update. Notification stops at the first one of these, so
    /// observers after it in the list did not see the update.
    ObserverFailed { observer: String, reason: String },
    /// A lock around shared station state was poisoned by a panic on another thread
    Poisoned,
}

pub type NotifyResult<T> = Result<T, NotifyError>;

impl NotifyError {
    pub fn observer_failed(observer: &str, reason: impl Into<String>) -> Self {
        Self::ObserverFailed {
            observer: observer.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ObserverFailed { observer, reason } => {
                write!(f, "{} failed to update: {}", observer, reason)
            }
            Self::Poisoned => write!(f, "weather station lock poisoned"),
        }
    }
}

impl Error for NotifyError {}

impl<T> From<PoisonError<T>> for NotifyError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Poisoned
    }
}
