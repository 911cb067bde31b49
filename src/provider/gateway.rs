use tracing::{debug, info, warn};

use super::error::{AttemptFailure, CatalogError, FailureReason, GatewayError, mask_key};
use super::transport::{HttpRequest, Transport};
use super::{gemini, openrouter};
use crate::settings::{ModelOption, ProviderId, Settings};

/// A successful translation and the failed attempts that preceded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Index of the key that succeeded.
    pub key_index: usize,
    pub failures: Vec<AttemptFailure>,
}

/// Sends prompts to a provider, failing over across its keys in order.
pub struct Gateway<T> {
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Translates `prompt` with the given provider's keys and selected model.
    ///
    /// Keys are tried one at a time in stored order. The first success wins and
    /// later keys are never attempted.
    pub async fn translate(
        &self,
        settings: &Settings,
        provider: ProviderId,
        prompt: &str,
    ) -> Result<Translation, GatewayError> {
        let config = settings.provider_settings(provider);
        let keys = config.usable_keys();

        if keys.is_empty() {
            return Err(GatewayError::NoKeys(provider));
        }

        let mut failures = Vec::new();

        for (index, key) in keys.iter().enumerate() {
            debug!(
                %provider,
                model = %config.model,
                key = index + 1,
                of = keys.len(),
                "sending translation request"
            );

            match self.attempt(provider, &config.model, key, prompt).await {
                Ok(text) => {
                    info!(%provider, key = index + 1, "translation succeeded");
                    return Ok(Translation {
                        text,
                        key_index: index,
                        failures,
                    });
                }
                Err(reason) => {
                    let failure = AttemptFailure {
                        index,
                        masked_key: mask_key(key),
                        reason,
                    };
                    warn!(%provider, "{failure}");
                    failures.push(failure);
                }
            }
        }

        Err(GatewayError::AllKeysFailed {
            provider,
            attempts: failures,
        })
    }

    async fn attempt(
        &self,
        provider: ProviderId,
        model: &str,
        key: &str,
        prompt: &str,
    ) -> Result<String, FailureReason> {
        let request = match provider {
            ProviderId::Gemini => gemini::generation_request(model, key, prompt),
            ProviderId::OpenRouter => openrouter::generation_request(model, key, prompt),
        };

        let body = self.fetch(&request).await?;

        match provider {
            ProviderId::Gemini => gemini::extract_text(&body),
            ProviderId::OpenRouter => openrouter::extract_text(&body),
        }
        .map_err(FailureReason::MalformedResponse)
    }

    /// Fetches the provider's model catalog.
    ///
    /// Gemini authenticates with the first usable key; OpenRouter's list is public.
    pub async fn fetch_catalog(
        &self,
        settings: &Settings,
        provider: ProviderId,
    ) -> Result<Vec<ModelOption>, CatalogError> {
        let request = match provider {
            ProviderId::Gemini => {
                let keys = settings.gemini.usable_keys();
                let key = keys.first().ok_or(CatalogError::NoKeys(provider))?;
                gemini::catalog_request(key)
            }
            ProviderId::OpenRouter => openrouter::catalog_request(),
        };

        let to_error = |reason| CatalogError::Request { provider, reason };

        let body = self.fetch(&request).await.map_err(to_error)?;
        let catalog = match provider {
            ProviderId::Gemini => gemini::parse_catalog(&body),
            ProviderId::OpenRouter => openrouter::parse_catalog(&body),
        }
        .map_err(|e| to_error(FailureReason::MalformedResponse(e)))?;

        debug!(%provider, models = catalog.len(), "fetched model catalog");
        Ok(catalog)
    }

    async fn fetch(&self, request: &HttpRequest) -> Result<String, FailureReason> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| FailureReason::Network(e.0))?;

        if !response.is_success() {
            return Err(FailureReason::Status(response.status));
        }

        Ok(response.body)
    }
}
