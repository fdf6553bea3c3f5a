//! HTTP API for storyforge.
//!
//! Routes mirror the generation flows one-to-one, plus the saved-story
//! library:
//!
//! | Method | Path | Body → Response |
//! |---|---|---|
//! | POST | `/api/generate-quick-story` | `{prompt}` → `{story}` |
//! | POST | `/api/generate-story` | `{character, setting, twist, template, kidsMode}` → `{title, story, moral?}` |
//! | POST | `/api/generate-script` | `{prompt, scriptType, genre}` → `{script, truncated, finishReason}` |
//! | GET | `/api/generate-prompts` | → `[{title, description}]` |
//! | GET/POST | `/api/stories` | saved-story list / save |
//! | GET/DELETE | `/api/stories/{title}` | one saved story / remove |
//! | GET | `/health` | → `{status}` |
//!
//! Every failure answers `{ "error": "<message>" }`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod routes;
mod server;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{AppState, create_router};
pub use server::serve;
