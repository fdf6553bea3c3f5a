//! HTTP client for an OpenAI-compatible completion endpoint.

use crate::{ChatCompletionResponse, OracleConfig, conversion};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use storyforge_core::{CompletionRequest, RawCompletion};
use storyforge_error::{ConfigError, GatewayError, GatewayErrorKind, StoryforgeResult};
use storyforge_interface::CompletionDriver;
use tracing::{debug, error, instrument};

/// Completion gateway backed by a chat completions endpoint.
#[derive(Clone)]
pub struct OracleClient {
    client: Client,
    config: OracleConfig,
    api_key: Option<String>,
}

impl std::fmt::Debug for OracleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleClient")
            .field("config", &self.config)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl OracleClient {
    /// Creates a client, reading the credential from `config.api_key_env`.
    ///
    /// A missing credential is not an error here; it is reported by
    /// [`CompletionDriver::complete`] before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: OracleConfig) -> StoryforgeResult<Self> {
        let api_key = config.api_key_from_env();
        if api_key.is_none() {
            debug!(env = %config.api_key_env, "No completion credential in environment");
        }
        Self::build(config, api_key)
    }

    /// Creates a client with an explicit credential.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip(config, api_key), fields(base_url = %config.base_url, model = %config.model))]
    pub fn with_api_key(config: OracleConfig, api_key: impl Into<String>) -> StoryforgeResult<Self> {
        Self::build(config, Some(api_key.into()))
    }

    fn build(config: OracleConfig, api_key: Option<String>) -> StoryforgeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// The connection settings.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionDriver for OracleClient {
    #[instrument(
        skip(self, request),
        fields(
            model = %self.config.model,
            max_tokens = request.max_output_tokens,
            format = ?request.response_format
        )
    )]
    async fn complete(&self, request: &CompletionRequest) -> StoryforgeResult<RawCompletion> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            error!(env = %self.config.api_key_env, "Completion credential is not configured");
            GatewayError::new(GatewayErrorKind::MissingCredential(
                self.config.api_key_env.clone(),
            ))
        })?;

        let body = conversion::to_chat_request(request, &self.config.model)?;
        debug!(url = %self.config.base_url, "Sending chat completion request");

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Completion request failed");
                GatewayError::new(GatewayErrorKind::Unreachable(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Completion service returned error");
            return Err(GatewayError::new(GatewayErrorKind::Status {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse completion response");
            GatewayError::new(GatewayErrorKind::MalformedResponse(e.to_string()))
        })?;

        let completion = conversion::from_chat_response(parsed)?;
        debug!(
            chars = completion.text.len(),
            stop_reason = %completion.stop_reason,
            "Completion received"
        );
        Ok(completion)
    }

    fn provider_name(&self) -> &'static str {
        "openai-compatible"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
