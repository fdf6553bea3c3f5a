//! Core data types for storyforge.
//!
//! This crate provides the request and result model shared by every stage of
//! the generation pipeline, plus the immutable lookup tables (script length
//! profiles, story genre styles) that the prompt builder selects from.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod message;
mod request;
mod result;
mod role;
mod saved;
mod script;
mod template;

pub use completion::{
    CompletionRequest, CompletionRequestBuilder, RawCompletion, ResponseFormat, StopReason,
};
pub use message::Message;
pub use request::{
    ContentKind, GenerationRequest, PromptSuggestionRequest, QuickStoryRequest, ScriptRequest,
    StructuredStoryRequest,
};
pub use result::{
    GenerationResult, PromptSuggestion, PromptSuggestionResult, QuickStoryResult, ScriptResult,
    StructuredStoryResult, SuggestionSource,
};
pub use role::Role;
pub use saved::SavedStory;
pub use script::{LengthProfile, ScriptType};
pub use template::{GenrePolicy, StoryTemplate};
