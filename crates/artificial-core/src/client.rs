//! Generic, lightweight client that runs prompts against a single concrete
//! [`TextCompletionProvider`].
//!
//! The client is **generic over the backend type `B`**, so no dynamic
//! dispatch or object-safety hurdles appear in user code:
//!
//! ```rust,no_run
//! use artificial_core::{ArtificialClient, provider::TextCompletionProvider};
//!
//! async fn ask<B: TextCompletionProvider>(backend: B) -> artificial_core::error::Result<String> {
//!     let client = ArtificialClient::new(backend);
//!     client.generate("Say hello!", None).await
//! }
//! ```
//!
//! Any backend crate (e.g. `artificial-predibase`) just implements the
//! provider trait and the same client works out of the box.
use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::{Map, Value};

use crate::{
    error::Result,
    generic::GenericCompletionResponse,
    provider::{TextCompleteParameters, TextCompletionProvider},
    template::IntoPrompt,
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct ArtificialClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for ArtificialClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> ArtificialClient<B>
where
    B: TextCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to inspect provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Produce a completion for `prompt` and return only its text.
    ///
    /// `stop` is an ordered list of literal strings at which the provider
    /// should cut the output; `None` and an empty list behave the same.
    pub async fn generate<P>(&self, prompt: P, stop: Option<Vec<String>>) -> Result<String>
    where
        P: IntoPrompt,
    {
        let params = TextCompleteParameters::new(prompt.into_prompt())
            .with_stop(stop.unwrap_or_default());

        self.backend
            .complete(params)
            .await
            .map(GenericCompletionResponse::into_text)
    }
}

impl<B: TextCompletionProvider> TextCompletionProvider for ArtificialClient<B> {
    fn complete<'p>(
        &'p self,
        params: TextCompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenericCompletionResponse>> + Send + 'p>> {
        self.backend.complete(params)
    }

    fn llm_type(&self) -> &'static str {
        self.backend.llm_type()
    }

    fn identifying_params(&self) -> Map<String, Value> {
        self.backend.identifying_params()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Echoes the prompt back and remembers the parameters it saw.
    #[derive(Default)]
    struct EchoBackend {
        seen: Mutex<Vec<TextCompleteParameters>>,
    }

    impl TextCompletionProvider for EchoBackend {
        fn complete<'p>(
            &'p self,
            params: TextCompleteParameters,
        ) -> Pin<Box<dyn Future<Output = Result<GenericCompletionResponse>> + Send + 'p>> {
            Box::pin(async move {
                let text = format!("echo: {}", params.prompt());
                self.seen.lock().unwrap().push(params);
                Ok(GenericCompletionResponse::new(text))
            })
        }

        fn llm_type(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn generate_returns_plain_text() {
        let client = ArtificialClient::new(EchoBackend::default());

        let text = client.generate("Hello", None).await.unwrap();

        assert_eq!(text, "echo: Hello");
        assert!(client.backend().seen.lock().unwrap()[0].stop().is_empty());
    }

    #[tokio::test]
    async fn generate_passes_stop_sequences_through() {
        let client = ArtificialClient::new(EchoBackend::default());

        client
            .generate(String::from("List:"), Some(vec!["\n\n".into(), "END".into()]))
            .await
            .unwrap();

        let seen = client.backend().seen.lock().unwrap();
        assert_eq!(seen[0].stop(), ["\n\n".to_string(), "END".to_string()]);
    }

    #[test]
    fn client_forwards_descriptive_accessors() {
        let client = ArtificialClient::new(EchoBackend::default());
        assert_eq!(client.llm_type(), "echo");
        assert!(client.identifying_params().is_empty());
    }
}
