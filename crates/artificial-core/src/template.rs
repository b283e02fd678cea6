//! Conversion of arbitrary values into the prompt text handed to a
//! completion backend.
//!
//! Text-completion providers take a single UTF-8 string.  [`IntoPrompt`]
//! lets callers pass `&str`, `String` or their own prompt types to
//! [`ArtificialClient::generate`](crate::ArtificialClient::generate) without
//! stringifying by hand.
//!
//! ```rust
//! use artificial_core::template::IntoPrompt;
//!
//! struct Greeting<'a> { name: &'a str }
//!
//! impl IntoPrompt for Greeting<'_> {
//!     fn into_prompt(self) -> String {
//!         format!("Say hello to {}.", self.name)
//!     }
//! }
//!
//! assert_eq!(Greeting { name: "Ada" }.into_prompt(), "Say hello to Ada.");
//! ```

/// Converts a value into the prompt text.
pub trait IntoPrompt {
    /// Consume `self` and return the full prompt.
    fn into_prompt(self) -> String;
}

impl IntoPrompt for String {
    fn into_prompt(self) -> String {
        self
    }
}

impl IntoPrompt for &str {
    fn into_prompt(self) -> String {
        self.to_owned()
    }
}

impl IntoPrompt for &String {
    fn into_prompt(self) -> String {
        self.clone()
    }
}
