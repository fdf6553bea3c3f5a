//! Trait interfaces for storyforge.
//!
//! The pipeline depends on two external collaborators, both expressed here as
//! object-safe async traits so they can be swapped for mocks in tests:
//!
//! - [`CompletionDriver`]: the text-completion oracle
//! - [`StoryStore`]: the keyed local store for saved stories

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionDriver, StoryStore};
