//! Storyforge - story and screenplay generation
//!
//! Storyforge turns short prompts into finished stories and screenplays using
//! an OpenAI-compatible chat completion endpoint (Groq by default). Inputs are
//! screened before any paid call, model output is normalised into typed
//! results, and prompt suggestions fall back to a curated pool whenever the
//! endpoint cannot help.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyforge::{OracleClient, StoryGenerator, StoryforgeConfig, QuickStoryRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryforgeConfig::load(None)?;
//!     let client = OracleClient::new(config.oracle.clone())?;
//!     let generator = StoryGenerator::new(Arc::new(client));
//!
//!     let result = generator
//!         .quick_story(&QuickStoryRequest::new("A detective who can hear lies"))
//!         .await?;
//!     println!("{}", result.story);
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export to stdout

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod observability;

pub use config::{GenerationConfig, LoggingConfig, StorageConfig, StoryforgeConfig};

// Re-export the pipeline so the binary and embedders share one import path
pub use storyforge_core::*;
pub use storyforge_error::*;
pub use storyforge_interface::*;
pub use storyforge_models::{OracleClient, OracleConfig};
pub use storyforge_narrative::{PromptBuilder, StoryGenerator};
pub use storyforge_security::{ClassifierConfig, Domain, InputClassifier};
pub use storyforge_server::{AppState, ServerConfig, create_router, serve};
pub use storyforge_storage::{FileSystemStoryStore, InMemoryStoryStore};
