use reqwest::StatusCode;
use thiserror::Error;

use crate::data_models::Scope;

/// Everything a film lookup can fail with. The lookups never recover locally,
/// every variant reaches the caller as-is.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("credential rejected by {url} (status {status})")]
    Auth { url: String, status: StatusCode },

    #[error("no search results in {scope} scope")]
    NoResults { scope: Scope },

    #[error("malformed search response: {0}")]
    MalformedResponse(String),

    #[error("page markup is missing {0}")]
    Parse(String),
}

impl LookupError {
    pub(crate) fn transport(url: &str, err: reqwest::Error) -> Self {
        LookupError::Transport {
            url: url.to_string(),
            reason: err.without_url().to_string(),
        }
    }

    /// Maps a non-success status to `Auth` (401/403) or `Transport`.
    pub(crate) fn from_status(url: &str, status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LookupError::Auth {
                url: url.to_string(),
                status,
            },
            _ => LookupError::Transport {
                url: url.to_string(),
                reason: format!("unexpected status {status}"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
