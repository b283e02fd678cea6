use std::{env, time::Duration};

use artificial_core::error::{ArtificialError, Result};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::client::PredibaseService;

/// Immutable settings of a [`PredibaseAdapter`].
///
/// Can be deserialised from any serde format, e.g. a TOML section:
///
/// ```toml
/// model = "pb://deployments/mistral-7b"
/// api_key = "pb_…"
/// adapter = "support-bot/3"
/// ```
///
/// The API key stays wrapped in a [`SecretString`]; `Debug` output shows
/// `[REDACTED]` instead of the token.
#[derive(Debug, Deserialize)]
pub struct PredibaseConfig {
    /// Deployment name or `pb://deployments/<name>` URI.
    pub model: String,
    #[serde(alias = "predibase_api_key", deserialize_with = "deserialize_secret")]
    pub api_key: SecretString,
    /// Fine-tuned adapter, `repo` or `repo/<version>`.
    #[serde(default)]
    pub adapter: Option<String>,
    /// Free-form metadata reported through `identifying_params`.  Never
    /// sent to the API.
    #[serde(default, alias = "model_kwargs")]
    pub extra_parameters: Map<String, Value>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout, read from `timeout_secs` (fractions allowed).
    #[serde(default, rename = "timeout_secs", deserialize_with = "deserialize_timeout")]
    pub timeout: Option<Duration>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn deserialize_timeout<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(|secs| Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom))
        .transpose()
}

/// Text-completion backend for models served by Predibase.
///
/// Every call authenticates, resolves the deployment (and the adapter, if
/// one is configured) and runs a single generation.  Nothing is cached
/// between calls, so the adapter can be shared freely across tasks.
///
/// `S` is the remote service the adapter talks to; the default is the
/// HTTP implementation.  All user-facing functionality sits on
/// [`TextCompletionProvider`](artificial_core::provider::TextCompletionProvider)
/// and the generic [`artificial_core::ArtificialClient`].
#[derive(Debug)]
pub struct PredibaseAdapter<S = PredibaseService> {
    pub(crate) config: PredibaseConfig,
    pub(crate) service: S,
}

impl<S> PredibaseAdapter<S> {
    pub fn config(&self) -> &PredibaseConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

/// Builder for [`PredibaseAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use artificial_predibase::PredibaseAdapterBuilder;
///
/// let backend = PredibaseAdapterBuilder::new_from_env()
///     .with_model("mistral-7b")
///     .with_adapter("support-bot/3")
///     .build()
///     .expect("PREDIBASE_API_TOKEN must be set");
/// ```
#[derive(Default)]
pub struct PredibaseAdapterBuilder {
    pub(crate) model: Option<String>,
    pub(crate) api_key: Option<SecretString>,
    pub(crate) adapter: Option<String>,
    pub(crate) extra_parameters: Map<String, Value>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl PredibaseAdapterBuilder {
    /// Create an *empty* builder. Remember to supply model and API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that reads `PREDIBASE_API_TOKEN` and, if set,
    /// `PREDIBASE_GATEWAY` as base URL.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("PREDIBASE_API_TOKEN").ok().map(SecretString::from),
            base_url: env::var("PREDIBASE_GATEWAY").ok(),
            ..Self::default()
        }
    }

    /// Start from a deserialised [`PredibaseConfig`].
    pub fn from_config(config: PredibaseConfig) -> Self {
        Self {
            model: Some(config.model),
            api_key: Some(config.api_key),
            adapter: config.adapter,
            extra_parameters: config.extra_parameters,
            base_url: config.base_url,
            timeout: config.timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = Some(adapter.into());
        self
    }

    pub fn with_extra_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_extra_parameters(mut self, extra_parameters: Map<String, Value>) -> Self {
        self.extra_parameters = extra_parameters;
        self
    }

    /// Override the API gateway, e.g. for a VPC deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bound every HTTP request.  Without it a call waits as long as the
    /// server takes.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return an adapter backed by the HTTP service.
    ///
    /// # Errors
    ///
    /// * [`ArtificialError::Invalid`] – model or API key missing, bad base URL.
    /// * [`ArtificialError::DependencyUnavailable`] – the HTTP client could
    ///   not be initialised.
    pub fn build(self) -> Result<PredibaseAdapter> {
        let service = PredibaseService::new(self.base_url.as_deref(), self.timeout)?;
        self.build_with_service(service)
    }

    /// Finalise the builder around a caller-supplied remote service.
    pub fn build_with_service<S>(self, service: S) -> Result<PredibaseAdapter<S>> {
        let model = self
            .model
            .filter(|model| !model.trim().is_empty())
            .ok_or_else(|| ArtificialError::Invalid("missing Predibase model".into()))?;

        let api_key = self.api_key.ok_or_else(|| {
            ArtificialError::Invalid("missing env variable: `PREDIBASE_API_TOKEN`".into())
        })?;

        Ok(PredibaseAdapter {
            config: PredibaseConfig {
                model,
                api_key,
                adapter: self.adapter,
                extra_parameters: self.extra_parameters,
                base_url: self.base_url,
                timeout: self.timeout,
            },
            service,
        })
    }
}
