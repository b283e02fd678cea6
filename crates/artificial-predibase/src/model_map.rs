/// URI form accepted for deployments in addition to the bare name.
pub const DEPLOYMENT_URI_PREFIX: &str = "pb://deployments/";

/// Map a model identifier onto the deployment name used in API paths.
///
/// Accepts `llama-3-8b` and `pb://deployments/llama-3-8b`.  Returns `None`
/// for empty names, other `pb://` URIs and names containing `/`.
pub(crate) fn map_model(model: &str) -> Option<&str> {
    let name = match model.strip_prefix(DEPLOYMENT_URI_PREFIX) {
        Some(name) => name,
        None if model.starts_with("pb://") => return None,
        None => model,
    };

    if name.is_empty() || name.contains('/') {
        return None;
    }

    Some(name)
}

/// Adapter identifier split into repository and optional version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AdapterRef<'a> {
    pub repo: &'a str,
    pub version: Option<u32>,
}

/// Parse `repo` or `repo/<version>`.  Version `0` does not exist.
pub(crate) fn map_adapter(adapter: &str) -> Option<AdapterRef<'_>> {
    let (repo, version) = match adapter.split_once('/') {
        Some((repo, version)) => {
            let version = version.parse::<u32>().ok().filter(|v| *v > 0)?;
            (repo, Some(version))
        }
        None => (adapter, None),
    };

    if repo.is_empty() {
        return None;
    }

    Some(AdapterRef { repo, version })
}
