use std::{future::Future, pin::Pin};

use serde_json::{Map, Value};

use crate::{error::Result, generic::GenericCompletionResponse};

/// A **backend** turns a text prompt into a network call to a concrete
/// provider (Predibase, a self-hosted server, …) and returns the single
/// completion it produced.
///
/// The trait is intentionally minimal:
///
/// * **One async-ish method** – `complete`, which performs a *single*
///   non-streaming round-trip.
/// * **Two descriptive accessors** – a short type tag and the parameters
///   that identify this backend instance for caching / logging keys.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`.
pub trait TextCompletionProvider: Send + Sync {
    /// Execute the prompt and return the provider’s reply.
    fn complete<'p>(
        &'p self,
        params: TextCompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenericCompletionResponse>> + Send + 'p>>;

    /// Short, stable identifier of the backend type (e.g. `"predibase"`).
    fn llm_type(&self) -> &'static str;

    /// Parameters that identify this backend instance.  Diagnostic only,
    /// never used to build requests.
    fn identifying_params(&self) -> Map<String, Value> {
        Map::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCompleteParameters {
    pub prompt: String,
    /// Literal strings at which generation should stop, in order of
    /// preference.  Empty means "no stop sequences".
    pub stop: Vec<String>,
}

impl TextCompleteParameters {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            stop: Vec::new(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn stop(&self) -> &[String] {
        &self.stop
    }

    pub fn with_stop<I, S>(mut self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop = stop.into_iter().map(Into::into).collect();
        self
    }
}
