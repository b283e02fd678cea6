use std::{future::Future, pin::Pin};

use artificial_core::{
    error::Result,
    generic::GenericCompletionResponse,
    provider::{TextCompleteParameters, TextCompletionProvider},
};
use serde_json::{Map, Value};

use crate::{
    PredibaseAdapter,
    error::{PROVIDER, PredibaseError},
    service::{BoundModel, RemoteModelService, RemoteSession},
};

impl<S> TextCompletionProvider for PredibaseAdapter<S>
where
    S: RemoteModelService,
{
    fn complete<'p>(
        &'p self,
        params: TextCompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenericCompletionResponse>> + Send + 'p>> {
        Box::pin(async move {
            let config = &self.config;

            #[cfg(feature = "tracing")]
            tracing::debug!(model = %config.model, adapter = ?config.adapter, "authenticating");

            let session = self.service.authenticate(&config.api_key).await?;
            let model = session.resolve_model(&config.model).await?;

            // The base model alone is only invoked when no adapter is configured.
            let bound = match &config.adapter {
                Some(adapter) => {
                    let adapter = session.resolve_adapter(adapter).await?;
                    session.with_adapter(model, adapter)
                }
                None => BoundModel::from(model),
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                deployment = %bound.deployment(),
                adapter = ?bound.adapter.as_ref().map(|a| a.id()),
                stop = params.stop().len(),
                "invoking model"
            );

            let request = bound.request(params.prompt(), params.stop());
            let response = session.invoke(&bound, request).await?;

            let completion = response
                .into_generic()
                .ok_or_else(|| PredibaseError::Format("response has no generated text".into()))?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                finish_reason = ?completion.finish_reason,
                usage = ?completion.usage,
                "completion received"
            );

            Ok(completion)
        })
    }

    fn llm_type(&self) -> &'static str {
        PROVIDER
    }

    fn identifying_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(
            "model_kwargs".into(),
            Value::Object(self.config.extra_parameters.clone()),
        );
        params
    }
}
