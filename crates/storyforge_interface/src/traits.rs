//! Trait definitions for the oracle and the saved-story store.

use async_trait::async_trait;
use storyforge_core::{CompletionRequest, RawCompletion, SavedStory};
use storyforge_error::StoryforgeResult;

/// A text-completion oracle.
///
/// One call is one request/response exchange. Implementations must not retry
/// and must pass the oracle's stop signal through unmodified.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Sends the assembled prompt and returns the raw completion.
    ///
    /// # Errors
    ///
    /// Fails with a gateway error when no credential is configured (checked
    /// before anything is sent) or when the oracle is unreachable or answers
    /// with a non-success status.
    async fn complete(&self, request: &CompletionRequest) -> StoryforgeResult<RawCompletion>;

    /// Provider name (e.g., "groq", "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    fn model_name(&self) -> &str;

    /// Whether a credential is configured.
    fn has_credential(&self) -> bool {
        true
    }
}

/// Keyed local store for saved stories. Keys are story titles.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// All saved stories, most recently saved first.
    async fn list(&self) -> StoryforgeResult<Vec<SavedStory>>;

    /// The story saved under `title`, if any.
    async fn get(&self, title: &str) -> StoryforgeResult<Option<SavedStory>>;

    /// Saves a story at the front of the library.
    ///
    /// A story with the same title is replaced. Returns `true` when the title
    /// was not in the library before.
    async fn save(&self, story: SavedStory) -> StoryforgeResult<bool>;

    /// Removes the story saved under `title`. Returns `true` if one was removed.
    async fn delete(&self, title: &str) -> StoryforgeResult<bool>;

    /// Whether a story is saved under `title`.
    async fn contains(&self, title: &str) -> StoryforgeResult<bool> {
        Ok(self.get(title).await?.is_some())
    }
}
