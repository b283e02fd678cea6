//! # `artificial` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                      | What it provides                                                          |
//! |----------------------------|---------------------------------------------------------------------------|
//! | **`artificial-core`**      | Provider-agnostic `TextCompletionProvider` trait, generic client, errors  |
//! | **`artificial-predibase`** | Backend for models and fine-tuned adapters served by Predibase *(optional)* |
//!
//! The core is always re-exported at the crate root.  The `predibase` Cargo
//! feature (on by default) additionally re-exports the backend crate as
//! [`predibase`], so a single dependency line is enough:
//!
//! ```toml
//! [dependencies]
//! artificial = { version = "0.7", features = ["tracing"] }
//! ```
//!
//! ## Design philosophy
//!
//! * **Opt-in providers** – disabling default features drops `reqwest`, TLS,
//!   etc.; a missing backend is a compile error, not a runtime surprise.
//! * **No procedural macros** – everything is ordinary traits and `impl`s.
//! * **Secrets stay secret** – API tokens live in `secrecy::SecretString`
//!   and never show up in `Debug` output or logs.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use artificial::ArtificialClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = artificial::predibase::PredibaseAdapterBuilder::new_from_env()
//!         .with_model("mistral-7b")
//!         .build()?;
//!     let client = ArtificialClient::new(backend);
//!     let answer = client.generate("Say hello!", None).await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/artificial/latest")]

pub use artificial_core::*;

#[cfg(feature = "predibase")]
pub use artificial_predibase as predibase;
