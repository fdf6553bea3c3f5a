//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyforge binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{handle_library_command, prompts, quick_story, script, serve_api, structured_story};
