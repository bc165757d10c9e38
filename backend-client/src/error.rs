use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the backend lookups. `NotFound` stays silent at the
/// call sites (the link is simply not rendered); everything else is
/// reported to the user. No lookup failure is ever fatal to the page.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The event id or issue is unknown to the backend.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// Connection, TLS, or body-decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-404 error status.
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound { .. })
    }
}
