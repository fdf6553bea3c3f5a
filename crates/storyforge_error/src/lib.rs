//! Error types for storyforge.
//!
//! This crate provides the error types used throughout the storyforge workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Families map onto the pipeline stage that raises them:
//!
//! | Family | Raised by |
//! |---|---|
//! | [`InputError`] | input classifier, before any oracle call |
//! | [`RequestError`] | request validation at the boundary |
//! | [`GatewayError`] | completion gateway (credential and transport) |
//! | [`ExtractionError`] | response extractor |
//!
//! # Examples
//!
//! ```
//! use storyforge_error::{ExtractionError, ExtractionErrorKind, StoryforgeResult};
//!
//! fn parse() -> StoryforgeResult<String> {
//!     Err(ExtractionError::new(ExtractionErrorKind::EmptyOutput))?
//! }
//!
//! let err = parse().unwrap_err();
//! assert!(!err.is_retryable());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extraction;
mod gateway;
mod input;
mod json;
mod request;
mod server;
mod storage;

pub use config::ConfigError;
pub use error::{StoryforgeError, StoryforgeErrorKind, StoryforgeResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use input::{InputError, InputErrorKind};
pub use json::JsonError;
pub use request::{RequestError, RequestErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
