//! Saved-story library for storyforge.
//!
//! Two [`StoryStore`] backends keep an ordered list of saved stories keyed by
//! title, newest first:
//!
//! - [`InMemoryStoryStore`]: process-local, for tests and ephemeral servers
//! - [`FileSystemStoryStore`]: a single JSON file, written atomically
//!
//! [`StoryStore`]: storyforge_interface::StoryStore

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod library;
mod memory;

pub use filesystem::FileSystemStoryStore;
pub use memory::InMemoryStoryStore;
