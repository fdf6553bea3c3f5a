//! Assembled prompts and raw oracle completions.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Output shape hint passed through to the oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// Ask the oracle for a JSON object
    JsonObject,
}

/// A fully assembled prompt ready for the completion gateway.
///
/// # Examples
///
/// ```
/// use storyforge_core::{CompletionRequest, ResponseFormat, Role};
///
/// let request = CompletionRequest::builder()
///     .system_instruction("You are a storyteller.")
///     .user_instruction("Tell a tale about a lighthouse.")
///     .max_output_tokens(1500u32)
///     .temperature(0.9f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.response_format, ResponseFormat::Text);
/// let messages = request.messages();
/// assert_eq!(messages[0].role, Role::System);
/// assert_eq!(messages[1].role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Standing instruction sent as the system message
    pub system_instruction: String,
    /// The request itself, sent as the user message
    pub user_instruction: String,
    /// Output token budget
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff, when the content kind sets one
    #[builder(default)]
    pub top_p: Option<f32>,
    /// Output shape hint
    #[builder(default)]
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Creates a new builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Role-tagged messages in send order: system, then user.
    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message::system(self.system_instruction.clone()),
            Message::user(self.user_instruction.clone()),
        ]
    }
}

/// Why the oracle stopped generating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Generation finished naturally
    #[display("complete")]
    Complete,
    /// Generation was cut off at the output token budget
    #[display("length_limit")]
    LengthLimit,
    /// Generation stopped for any other reason (filtering, upstream fault)
    #[display("error")]
    Error,
}

impl StopReason {
    /// Maps an OpenAI-style `finish_reason` onto a stop reason.
    ///
    /// A missing finish reason is treated as natural completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_core::StopReason;
    ///
    /// assert_eq!(StopReason::from_finish_reason(Some("length")), StopReason::LengthLimit);
    /// assert_eq!(StopReason::from_finish_reason(Some("stop")), StopReason::Complete);
    /// assert_eq!(StopReason::from_finish_reason(Some("content_filter")), StopReason::Error);
    /// ```
    pub fn from_finish_reason(finish_reason: Option<&str>) -> Self {
        match finish_reason {
            None | Some("stop") | Some("eos") | Some("end_turn") => Self::Complete,
            Some("length") | Some("max_tokens") => Self::LengthLimit,
            Some(_) => Self::Error,
        }
    }
}

/// Raw text returned by the oracle plus its stop signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawCompletion {
    /// Generated text, untouched
    pub text: String,
    /// Normalised stop reason
    pub stop_reason: StopReason,
    /// The oracle's own finish signal, verbatim
    pub finish_reason: String,
}

impl RawCompletion {
    /// Builds a completion from the oracle's text and optional finish signal.
    pub fn new(text: impl Into<String>, finish_reason: Option<&str>) -> Self {
        Self {
            text: text.into(),
            stop_reason: StopReason::from_finish_reason(finish_reason),
            finish_reason: finish_reason.unwrap_or("stop").to_string(),
        }
    }

    /// True when the oracle hit its output token budget.
    pub fn is_truncated(&self) -> bool {
        self.stop_reason == StopReason::LengthLimit
    }
}
