/// Errors surfaced by the tabs runtime adapter
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// Discard was requested for a tab the host never gave an id.
    #[error("tab id is undefined")]
    MissingId,

    /// The host reported a failure (lastError, rejected promise or a throw).
    #[error("{0}")]
    Host(String),

    /// The host answered with something that is not a tab list.
    #[error("failed to decode tabs: {0}")]
    Decode(String),

    /// Neither `browser.tabs` nor `chrome.tabs` exists in this runtime.
    #[error("no tabs API available in this runtime")]
    Unavailable,
}
