//! Completion gateway for storyforge.
//!
//! [`OracleClient`] sends an assembled [`CompletionRequest`] to an
//! OpenAI-compatible chat completions endpoint (Groq by default) and returns
//! the raw text with its stop signal. One call is one exchange: the gateway
//! never retries, and a missing credential is reported before anything is
//! sent.
//!
//! # Example
//!
//! ```no_run
//! use storyforge_core::CompletionRequest;
//! use storyforge_interface::CompletionDriver;
//! use storyforge_models::{OracleClient, OracleConfig};
//!
//! # async fn run() -> storyforge_error::StoryforgeResult<()> {
//! let client = OracleClient::new(OracleConfig::default())?;
//! let request = CompletionRequest::builder()
//!     .system_instruction("You are a creative storyteller.")
//!     .user_instruction("A lighthouse keeper finds a message in a bottle.")
//!     .max_output_tokens(1500u32)
//!     .temperature(0.9f32)
//!     .build()
//!     .expect("complete request");
//! let completion = client.complete(&request).await?;
//! println!("{}", completion.text);
//! # Ok(())
//! # }
//! ```
//!
//! [`CompletionRequest`]: storyforge_core::CompletionRequest

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod conversion;
mod dto;

pub use client::OracleClient;
pub use config::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, OracleConfig};
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatResponseFormat, ChoiceMessage,
};
