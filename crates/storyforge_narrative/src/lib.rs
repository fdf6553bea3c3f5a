//! Generation flows for storyforge.
//!
//! This crate sits between the boundary (HTTP or CLI) and the completion
//! driver:
//!
//! - [`PromptBuilder`]: deterministic prompts per content kind
//! - Extraction: typed results from raw oracle text, with ordered parse
//!   attempts for structured stories
//! - [`fallback_prompts`]: local suggestions when the oracle is unavailable
//! - [`StoryGenerator`]: the validate → classify → build → complete →
//!   extract pipeline
//!
//! # Example
//!
//! ```
//! use storyforge_core::RawCompletion;
//! use storyforge_narrative::extract_structured_story;
//!
//! let raw = RawCompletion::new(
//!     "```json\n{\"title\": \"T\", \"story\": \"S\", \"moral\": \"M\"}\n```",
//!     Some("stop"),
//! );
//! let story = extract_structured_story(&raw).unwrap();
//! assert_eq!(story.moral.as_deref(), Some("M"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod fallback;
mod generator;
mod prompt;

pub use extraction::{
    SUGGESTION_BATCH_SIZE, extract_quick_story, extract_script, extract_structured_story,
    extract_suggestions, strip_fences,
};
pub use fallback::{FALLBACK_POOL, fallback_prompts, fallback_prompts_with};
pub use generator::StoryGenerator;
pub use prompt::PromptBuilder;
