use std::time::Duration;

use artificial_core::error::ResourceKind;
use reqwest::{
    Client as HttpClient, RequestBuilder, StatusCode, Url,
    header::{AUTHORIZATION, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::{
    api_v1::{AdapterVersion, CurrentUser, GenerateRequest, GenerateResponse, LlmDeployment},
    error::PredibaseError,
    model_map::{map_adapter, map_model},
    service::{
        AdapterHandle, BoundModel, ModelHandle, RemoteModelService, RemoteSession, ServiceFuture,
    },
};

pub const DEFAULT_BASE_URL: &str = "https://api.app.predibase.com/v1";

/// HTTP implementation of [`RemoteModelService`].
///
/// * Holds one `reqwest::Client`, so cloning is cheap and connections are
///   pooled across calls.
/// * Carries no credential; every [`authenticate`](RemoteModelService::authenticate)
///   call produces a fresh [`PredibaseClient`] session.
#[derive(Debug, Clone)]
pub struct PredibaseService {
    http: HttpClient,
    base: Url,
}

impl PredibaseService {
    /// Build a default `reqwest` client (Rustls TLS).  `timeout` bounds every
    /// single HTTP request; `None` waits as long as the server takes.
    pub fn new(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self, PredibaseError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| PredibaseError::Transport(err.to_string()))?;

        Self::with_http(http, base_url)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(http: HttpClient, base_url: Option<&str>) -> Result<Self, PredibaseError> {
        let raw = base_url.unwrap_or(DEFAULT_BASE_URL);
        let base = Url::parse(raw).map_err(|_| PredibaseError::BaseUrl(raw.to_owned()))?;
        if base.cannot_be_a_base() {
            return Err(PredibaseError::BaseUrl(raw.to_owned()));
        }

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl RemoteModelService for PredibaseService {
    type Session = PredibaseClient;

    fn authenticate<'a>(&'a self, credential: &'a SecretString) -> ServiceFuture<'a, Self::Session> {
        Box::pin(async move {
            let token = credential.expose_secret().trim();
            if token.is_empty() {
                return Err(PredibaseError::Unauthorized("API token is empty".into()));
            }

            let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                PredibaseError::Unauthorized(
                    "API token contains characters not allowed in an HTTP header".into(),
                )
            })?;
            auth.set_sensitive(true);

            let session = PredibaseClient {
                http: self.http.clone(),
                base: self.base.clone(),
                auth,
            };

            // Confirms the token before anything else is resolved.
            let _user: CurrentUser = session
                .fetch(session.http.get(session.endpoint(&["users", "current"])), None)
                .await?;

            Ok(session)
        })
    }
}

/// Authenticated session against the Predibase REST API.
#[derive(Debug)]
pub struct PredibaseClient {
    http: HttpClient,
    base: Url,
    auth: HeaderValue,
}

impl PredibaseClient {
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `PredibaseService::with_http` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send `request` and decode the JSON reply.
    ///
    /// 401/403 become [`PredibaseError::Unauthorized`]; 404 becomes
    /// [`PredibaseError::NotFound`] when `missing` names the looked-up
    /// resource.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        missing: Option<(ResourceKind, &str)>,
    ) -> Result<T, PredibaseError> {
        let resp = request.header(AUTHORIZATION, self.auth.clone()).send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = resp.text().await.unwrap_or_default();
            return Err(PredibaseError::Unauthorized(format!("{status}: {body}")));
        }

        if status == StatusCode::NOT_FOUND {
            if let Some((kind, name)) = missing {
                return Err(PredibaseError::NotFound {
                    kind,
                    name: name.to_owned(),
                });
            }
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PredibaseError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl RemoteSession for PredibaseClient {
    fn resolve_model<'a>(&'a self, model: &'a str) -> ServiceFuture<'a, ModelHandle> {
        Box::pin(async move {
            let deployment = map_model(model).ok_or_else(|| PredibaseError::NotFound {
                kind: ResourceKind::Model,
                name: model.to_owned(),
            })?;

            let found: LlmDeployment = self
                .fetch(
                    self.http.get(self.endpoint(&["llms", deployment])),
                    Some((ResourceKind::Model, model)),
                )
                .await?;

            Ok(ModelHandle {
                deployment: deployment.to_owned(),
                base_model: found.base_model,
            })
        })
    }

    fn resolve_adapter<'a>(&'a self, adapter: &'a str) -> ServiceFuture<'a, AdapterHandle> {
        Box::pin(async move {
            let adapter_ref = map_adapter(adapter).ok_or_else(|| PredibaseError::NotFound {
                kind: ResourceKind::Adapter,
                name: adapter.to_owned(),
            })?;

            let version = adapter_ref.version.map(|v| v.to_string());
            let url = match &version {
                Some(version) => self.endpoint(&["adapters", adapter_ref.repo, version.as_str()]),
                None => self.endpoint(&["adapters", adapter_ref.repo]),
            };

            let found: AdapterVersion = self
                .fetch(self.http.get(url), Some((ResourceKind::Adapter, adapter)))
                .await?;

            Ok(AdapterHandle::new(found.repo, Some(found.version)))
        })
    }

    fn invoke<'a>(
        &'a self,
        model: &'a BoundModel,
        request: GenerateRequest,
    ) -> ServiceFuture<'a, GenerateResponse> {
        Box::pin(async move {
            let url = self.endpoint(&["llms", model.deployment(), "generate"]);
            let result = self
                .fetch(
                    self.http.post(url).json(&request),
                    Some((ResourceKind::Model, model.deployment())),
                )
                .await;

            match result {
                Err(PredibaseError::Serde(err)) => Err(PredibaseError::Format(format!(
                    "unreadable generate response: {err}"
                ))),
                other => other,
            }
        })
    }
}
