use serde::Deserialize;

/// Reply of `GET /users/current`.  Only used to confirm the token works.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub tenant: Option<String>,
}

/// Reply of `GET /llms/{deployment}`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LlmDeployment {
    pub name: String,
    #[serde(default)]
    pub base_model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Reply of `GET /adapters/{repo}[/{version}]`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdapterVersion {
    pub repo: String,
    pub version: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deployment_tolerates_missing_optionals() {
        let dep: LlmDeployment = serde_json::from_value(json!({ "name": "llama-3-8b" })).unwrap();
        assert_eq!(dep.name, "llama-3-8b");
        assert!(dep.base_model.is_none());
    }

    #[test]
    fn deployment_reads_camel_case() {
        let dep: LlmDeployment = serde_json::from_value(json!({
            "name": "my-base-model",
            "baseModel": "mistral-7b",
            "status": "ready"
        }))
        .unwrap();
        assert_eq!(dep.base_model.as_deref(), Some("mistral-7b"));
    }
}
