//! Generic response types used by the *artificial-core* crate.
//!
//! They deliberately mirror what nearly every text-generation API hands
//! back: a piece of text plus, optionally, some token accounting.  By
//! staying minimal and provider-agnostic we can:
//!
//! * convert provider-specific payloads into them via a simple `From`/`Into`,
//! * use them in unit tests without mocking a full transport layer.
//!
//! ## When to add more fields?
//!
//! Only if the additional data is **required by multiple back-ends** or
//! **fundamentally provider-independent**.  Otherwise keep it on the
//! provider-specific response type instead of bloating this one.
use serde::{Deserialize, Serialize};

/// The single completion produced for a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericCompletionResponse {
    /// Generated text, already truncated at a stop sequence if the provider
    /// honours them.
    pub text: String,
    pub finish_reason: Option<String>,
    pub usage: Option<GenericUsageReport>,
}

impl GenericCompletionResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
            usage: None,
        }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
