use artificial_core::generic::{GenericCompletionResponse, GenericUsageReport};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

/// Body of `POST /llms/{deployment}/generate`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GenerateRequest {
    pub inputs: String,
    pub parameters: GenerateParameters,
}

impl GenerateRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: GenerateParameters::default(),
        }
    }

    pub fn with_parameters(mut self, parameters: GenerateParameters) -> Self {
        self.parameters = parameters;
        self
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct GenerateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl_builder_methods!(
    GenerateParameters,
    adapter_id: String,
    adapter_source: String,
    stop: Vec<String>
);

/// Reply of the generate endpoint.
///
/// Older gateways answer with `response`, newer ones with `generated_text`,
/// some with both.  Both fields stay optional so a reply without text can
/// be reported as malformed instead of failing deserialisation.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub generated_text: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub details: Option<GenerateDetails>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GenerateDetails {
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub prompt_tokens: Option<i64>,
    #[serde(default)]
    pub generated_tokens: Option<i64>,
}

impl GenerateResponse {
    /// Convert into the provider-agnostic shape, or `None` if there is no text.
    pub fn into_generic(self) -> Option<GenericCompletionResponse> {
        let text = self.generated_text.or(self.response)?;
        let details = self.details.unwrap_or_default();

        // Counts come straight from the server; an overflowing sum drops usage.
        let usage = match (details.prompt_tokens, details.generated_tokens) {
            (Some(prompt), Some(generated)) => {
                prompt
                    .checked_add(generated)
                    .map(|total| GenericUsageReport {
                        prompt_tokens: prompt,
                        completion_tokens: generated,
                        total_tokens: total,
                    })
            }
            _ => None,
        };

        Some(GenericCompletionResponse {
            text,
            finish_reason: details.finish_reason,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_omits_unset_parameters() {
        let req = GenerateRequest::new("Hello");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "inputs": "Hello", "parameters": {} })
        );
    }

    #[test]
    fn request_carries_adapter_and_stop() {
        let req = GenerateRequest::new("Hello").with_parameters(
            GenerateParameters::default()
                .adapter_id("my-adapter/2".into())
                .adapter_source("pbase".into())
                .stop(vec!["\n".into()]),
        );
        assert_eq!(
            serde_json::to_value(&req).unwrap()["parameters"],
            json!({ "adapter_id": "my-adapter/2", "adapter_source": "pbase", "stop": ["\n"] })
        );
    }

    #[test]
    fn legacy_response_field_is_accepted() {
        let resp: GenerateResponse = serde_json::from_value(json!({ "response": "Hi" })).unwrap();
        assert_eq!(resp.into_generic().unwrap().text, "Hi");
    }

    #[test]
    fn usage_is_derived_from_details() {
        let resp: GenerateResponse = serde_json::from_value(json!({
            "generated_text": "Hi there",
            "details": { "finish_reason": "eos_token", "prompt_tokens": 3, "generated_tokens": 2 }
        }))
        .unwrap();

        let generic = resp.into_generic().unwrap();
        assert_eq!(generic.finish_reason.as_deref(), Some("eos_token"));
        assert_eq!(generic.usage.unwrap().total_tokens, 5);
    }

    #[test]
    fn both_text_fields_are_accepted() {
        let resp: GenerateResponse =
            serde_json::from_value(json!({ "generated_text": "a", "response": "b" })).unwrap();
        assert_eq!(resp.into_generic().unwrap().text, "a");
    }

    #[test]
    fn overflowing_token_counts_drop_usage_but_keep_text() {
        let resp: GenerateResponse = serde_json::from_value(json!({
            "generated_text": "x",
            "details": { "prompt_tokens": i64::MAX, "generated_tokens": 1 }
        }))
        .unwrap();

        let generic = resp.into_generic().unwrap();
        assert_eq!(generic.text, "x");
        assert!(generic.usage.is_none());
    }

    #[test]
    fn missing_text_yields_none() {
        let resp: GenerateResponse = serde_json::from_value(json!({ "details": {} })).unwrap();
        assert!(resp.into_generic().is_none());
    }
}
