//! OpenAI-compatible chat completion wire types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// `response_format` object; only `{"type": "json_object"}` is ever sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatResponseFormat {
    /// Format type tag
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ChatResponseFormat {
    /// The JSON-object output hint.
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// System then user message
    messages: Vec<ChatMessage>,
    /// Output token budget
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling cutoff
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Output shape hint
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ChatResponseFormat>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Message inside a response choice. Content may be absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChoiceMessage {
    /// Generated text
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The generated message
    #[serde(default)]
    message: Option<ChoiceMessage>,
    /// Why generation stopped ("stop", "length", ...)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Chat completion response body.
///
/// Only the fields the gateway reads are modelled; everything else the
/// provider sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion choices; the first one is used
    #[serde(default)]
    choices: Vec<ChatChoice>,
}
