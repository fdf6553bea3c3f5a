//! Conversion between storyforge types and the chat completion wire format.

use crate::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatResponseFormat};
use storyforge_core::{CompletionRequest, RawCompletion, ResponseFormat};
use storyforge_error::{GatewayError, GatewayErrorKind};

/// Builds the wire request for `model` from an assembled prompt.
pub(crate) fn to_chat_request(
    request: &CompletionRequest,
    model: &str,
) -> Result<ChatCompletionRequest, GatewayError> {
    let messages = request
        .messages()
        .into_iter()
        .map(|message| ChatMessage {
            role: message.role.to_string(),
            content: message.content,
        })
        .collect::<Vec<_>>();

    let response_format = match request.response_format {
        ResponseFormat::JsonObject => Some(ChatResponseFormat::json_object()),
        ResponseFormat::Text => None,
    };

    ChatCompletionRequest::builder()
        .model(model)
        .messages(messages)
        .max_tokens(request.max_output_tokens)
        .temperature(request.temperature)
        .top_p(request.top_p)
        .response_format(response_format)
        .build()
        .map_err(|e| GatewayError::new(GatewayErrorKind::RequestConversion(e.to_string())))
}

/// Takes the first choice of a response.
///
/// A choice with no content becomes empty text; deciding whether that is
/// acceptable is left to the extractor.
pub(crate) fn from_chat_response(
    response: ChatCompletionResponse,
) -> Result<RawCompletion, GatewayError> {
    let choice = response.choices().first().ok_or_else(|| {
        GatewayError::new(GatewayErrorKind::MalformedResponse(
            "response contained no choices".to_string(),
        ))
    })?;

    let text = choice
        .message()
        .as_ref()
        .and_then(|message| message.content().clone())
        .unwrap_or_default();

    Ok(RawCompletion::new(text, choice.finish_reason().as_deref()))
}
