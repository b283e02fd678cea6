//! Unified error type exposed by **`artificial-core`**.
//!
//! Provider crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`ArtificialClient`].  This keeps
//! the public API small while still telling the caller *what* went wrong:
//! a missing backend, a rejected credential, an unknown model, or a reply
//! that does not carry any text.
//!
//! [`ArtificialClient`]: crate::ArtificialClient

use std::fmt::Display;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ArtificialError>;

#[derive(Debug, Error)]
pub enum ArtificialError {
    /// The transport the backend needs is not available, e.g. the HTTP/TLS
    /// stack could not be initialised.
    #[error("backend `{provider}` is unavailable: {reason}")]
    DependencyUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// The remote service rejected the configured credential.
    #[error("authentication with `{provider}` failed, please check your API token: {reason}")]
    Authentication {
        provider: &'static str,
        reason: String,
    },

    /// A named model or adapter does not exist on the remote service.
    #[error("{kind} `{name}` could not be resolved")]
    Resolution { kind: ResourceKind, name: String },

    /// The provider answered, but the reply lacks the expected content.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category (transport failures, unexpected status codes, …).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid: {0}")]
    Invalid(String),
}

/// What kind of remote object failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Model,
    Adapter,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Model => write!(f, "model"),
            ResourceKind::Adapter => write!(f, "adapter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_names_the_resource() {
        let err = ArtificialError::Resolution {
            kind: ResourceKind::Adapter,
            name: "my-adapter/2".into(),
        };
        assert_eq!(err.to_string(), "adapter `my-adapter/2` could not be resolved");
    }

    fn category(err: &ArtificialError) -> &'static str {
        match err {
            ArtificialError::DependencyUnavailable { .. } => "dependency",
            ArtificialError::Authentication { .. } => "authentication",
            ArtificialError::Resolution { .. } => "resolution",
            ArtificialError::MalformedResponse(_) => "malformed",
            ArtificialError::Backend(_) => "backend",
            ArtificialError::Invalid(_) => "invalid",
        }
    }

    #[test]
    fn taxonomy_has_one_category_per_failure_kind() {
        let errors = [
            ArtificialError::DependencyUnavailable {
                provider: "predibase",
                reason: "no TLS backend".into(),
            },
            ArtificialError::Authentication {
                provider: "predibase",
                reason: "401".into(),
            },
            ArtificialError::Resolution {
                kind: ResourceKind::Model,
                name: "ghost".into(),
            },
            ArtificialError::MalformedResponse("no text".into()),
            ArtificialError::Backend("connection reset".into()),
            ArtificialError::Invalid("missing model".into()),
        ];

        let categories: Vec<_> = errors.iter().map(category).collect();
        assert_eq!(
            categories,
            ["dependency", "authentication", "resolution", "malformed", "backend", "invalid"]
        );
    }

    #[test]
    fn authentication_error_guides_the_caller() {
        let err = ArtificialError::Authentication {
            provider: "predibase",
            reason: "401 Unauthorized".into(),
        };
        assert!(err.to_string().contains("check your API token"));
    }
}
