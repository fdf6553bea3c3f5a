//! In-memory saved-story store.

use crate::library;
use async_trait::async_trait;
use storyforge_core::SavedStory;
use storyforge_error::StoryforgeResult;
use storyforge_interface::StoryStore;
use tokio::sync::RwLock;

/// Saved stories held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStoryStore {
    stories: RwLock<Vec<SavedStory>>,
}

impl InMemoryStoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoryStore for InMemoryStoryStore {
    async fn list(&self) -> StoryforgeResult<Vec<SavedStory>> {
        Ok(self.stories.read().await.clone())
    }

    async fn get(&self, title: &str) -> StoryforgeResult<Option<SavedStory>> {
        Ok(library::find(&self.stories.read().await, title))
    }

    #[tracing::instrument(skip(self, story), fields(title = %story.title))]
    async fn save(&self, story: SavedStory) -> StoryforgeResult<bool> {
        let is_new = library::save_front(&mut *self.stories.write().await, story);
        tracing::debug!(is_new, "Saved story in memory");
        Ok(is_new)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, title: &str) -> StoryforgeResult<bool> {
        Ok(library::remove(&mut *self.stories.write().await, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyforge_core::{StructuredStoryRequest, StructuredStoryResult};

    fn story(title: &str) -> SavedStory {
        SavedStory::from_generation(
            &StructuredStoryRequest {
                character: "A wizard".into(),
                setting: "A tower".into(),
                twist: "The tower is alive".into(),
                template: "fantasy".into(),
                kids_mode: true,
            },
            &StructuredStoryResult {
                title: title.into(),
                story: "Once upon a time...".into(),
                moral: Some("Listen to your home".into()),
            },
        )
    }

    #[tokio::test]
    async fn test_newest_first_and_replace() {
        let store = InMemoryStoryStore::new();
        assert!(store.save(story("A")).await.unwrap());
        assert!(store.save(story("B")).await.unwrap());
        assert!(!store.save(story("A")).await.unwrap());

        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryStoryStore::new();
        store.save(story("A")).await.unwrap();
        assert!(store.contains("A").await.unwrap());
        assert!(store.delete("A").await.unwrap());
        assert!(!store.delete("A").await.unwrap());
        assert!(store.get("A").await.unwrap().is_none());
    }
}
