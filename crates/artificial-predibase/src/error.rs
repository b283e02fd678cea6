use artificial_core::error::{ArtificialError, ResourceKind};
use reqwest::StatusCode;

pub(crate) const PROVIDER: &str = "predibase";

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum PredibaseError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    /// The HTTP client could not be constructed (TLS backend, resolver, …).
    #[error("couldn’t build HTTP client: {0}")]
    Transport(String),

    #[error("API token rejected: {0}")]
    Unauthorized(String),

    #[error("{kind} `{name}` not found")]
    NotFound { kind: ResourceKind, name: String },

    #[error("Predibase returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Predibase format error: {0}")]
    Format(String),

    #[error("invalid base URL `{0}`")]
    BaseUrl(String),
}

impl From<PredibaseError> for ArtificialError {
    fn from(value: PredibaseError) -> Self {
        match value {
            PredibaseError::Transport(reason) => ArtificialError::DependencyUnavailable {
                provider: PROVIDER,
                reason,
            },
            PredibaseError::Unauthorized(reason) => ArtificialError::Authentication {
                provider: PROVIDER,
                reason,
            },
            PredibaseError::NotFound { kind, name } => ArtificialError::Resolution { kind, name },
            PredibaseError::Format(msg) => ArtificialError::MalformedResponse(msg),
            PredibaseError::BaseUrl(url) => {
                ArtificialError::Invalid(format!("invalid Predibase base URL `{url}`"))
            }
            other => ArtificialError::Backend(Box::new(other)),
        }
    }
}
