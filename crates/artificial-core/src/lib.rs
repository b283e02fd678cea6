//! Provider-agnostic building blocks of the **artificial** SDK: the
//! [`TextCompletionProvider`](provider::TextCompletionProvider) trait every
//! backend implements, the generic [`ArtificialClient`] and the shared error
//! type.
pub mod client;
pub mod error;
pub mod generic;
pub mod provider;
pub mod template;

pub use client::ArtificialClient;
