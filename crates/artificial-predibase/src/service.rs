//! The seam between [`PredibaseAdapter`](crate::PredibaseAdapter) and the
//! remote platform.
//!
//! A [`RemoteModelService`] hands out an authenticated [`RemoteSession`];
//! the session resolves deployments and adapters into handles and runs
//! the bound model.  [`PredibaseService`](crate::PredibaseService) is the
//! HTTP implementation, tests plug in their own.
use std::{future::Future, pin::Pin};

use secrecy::SecretString;

use crate::{
    api_v1::{GenerateParameters, GenerateRequest, GenerateResponse},
    error::PredibaseError,
};

/// Adapters attached by name are looked up in the Predibase model registry.
pub const ADAPTER_SOURCE: &str = "pbase";

pub type ServiceFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, PredibaseError>> + Send + 'a>>;

pub trait RemoteModelService: Send + Sync {
    type Session: RemoteSession + 'static;

    /// Open a session with `credential`.  A rejected credential must surface
    /// as [`PredibaseError::Unauthorized`].
    fn authenticate<'a>(&'a self, credential: &'a SecretString) -> ServiceFuture<'a, Self::Session>;
}

pub trait RemoteSession: Send + Sync {
    /// Look up a deployment.  Unknown names surface as
    /// [`PredibaseError::NotFound`].
    fn resolve_model<'a>(&'a self, model: &'a str) -> ServiceFuture<'a, ModelHandle>;

    /// Look up a fine-tuned adapter.  Unknown names surface as
    /// [`PredibaseError::NotFound`].
    fn resolve_adapter<'a>(&'a self, adapter: &'a str) -> ServiceFuture<'a, AdapterHandle>;

    /// Attach `adapter` to `model`.  Binding happens client-side.
    fn with_adapter(&self, model: ModelHandle, adapter: AdapterHandle) -> BoundModel {
        model.with_adapter(adapter)
    }

    fn invoke<'a>(
        &'a self,
        model: &'a BoundModel,
        request: GenerateRequest,
    ) -> ServiceFuture<'a, GenerateResponse>;
}

/// A resolved deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    pub deployment: String,
    pub base_model: Option<String>,
}

impl ModelHandle {
    pub fn new(deployment: impl Into<String>) -> Self {
        Self {
            deployment: deployment.into(),
            base_model: None,
        }
    }

    pub fn with_adapter(self, adapter: AdapterHandle) -> BoundModel {
        BoundModel {
            model: self,
            adapter: Some(adapter),
        }
    }
}

/// A resolved adapter, pinned to a concrete version when the registry
/// reported one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterHandle {
    pub repo: String,
    pub version: Option<u32>,
}

impl AdapterHandle {
    pub fn new(repo: impl Into<String>, version: Option<u32>) -> Self {
        Self {
            repo: repo.into(),
            version,
        }
    }

    /// Identifier sent as `adapter_id`: `repo` or `repo/version`.
    pub fn id(&self) -> String {
        match self.version {
            Some(version) => format!("{}/{version}", self.repo),
            None => self.repo.clone(),
        }
    }
}

/// The model that actually gets invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundModel {
    pub model: ModelHandle,
    pub adapter: Option<AdapterHandle>,
}

impl BoundModel {
    pub fn deployment(&self) -> &str {
        &self.model.deployment
    }

    /// Build the generate request for this model.  An empty `stop` list is
    /// left out of the body entirely.
    pub fn request(&self, prompt: &str, stop: &[String]) -> GenerateRequest {
        let mut parameters = GenerateParameters::default();
        if let Some(adapter) = &self.adapter {
            parameters = parameters
                .adapter_id(adapter.id())
                .adapter_source(ADAPTER_SOURCE.to_owned());
        }
        if !stop.is_empty() {
            parameters = parameters.stop(stop.to_vec());
        }

        GenerateRequest::new(prompt).with_parameters(parameters)
    }
}

impl From<ModelHandle> for BoundModel {
    fn from(model: ModelHandle) -> Self {
        Self {
            model,
            adapter: None,
        }
    }
}
