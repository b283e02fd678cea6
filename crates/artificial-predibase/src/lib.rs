//! Predibase backend for the **artificial** SDK.
//!
//! [`PredibaseAdapter`] implements
//! [`TextCompletionProvider`](artificial_core::provider::TextCompletionProvider):
//! it authenticates with an API token, resolves a deployment and an
//! optional fine-tuned adapter, and returns the single completion the
//! platform generates.
//!
//! ```rust,no_run
//! use artificial_core::ArtificialClient;
//! use artificial_predibase::PredibaseAdapterBuilder;
//!
//! # async fn run() -> artificial_core::error::Result<()> {
//! let backend = PredibaseAdapterBuilder::new_from_env()
//!     .with_model("pb://deployments/mistral-7b")
//!     .with_adapter("support-bot/3")
//!     .build()?;
//!
//! let client = ArtificialClient::new(backend);
//! let answer = client.generate("How do I reset my password?", None).await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```
mod adapter;
mod model_map;
mod provider_impl_complete;

pub use adapter::{PredibaseAdapter, PredibaseAdapterBuilder, PredibaseConfig};
pub use client::{DEFAULT_BASE_URL, PredibaseClient, PredibaseService};
pub use model_map::DEPLOYMENT_URI_PREFIX;
pub mod api_v1;
mod client;
pub mod error;
pub mod service;
