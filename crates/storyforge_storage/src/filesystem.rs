//! JSON-file saved-story store.
//!
//! The whole library lives in one JSON array, newest first. Writes go to a
//! temporary sibling file that is then renamed over the original.

use crate::library;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use storyforge_core::SavedStory;
use storyforge_error::{StorageError, StorageErrorKind, StoryforgeResult};
use storyforge_interface::StoryStore;
use tokio::sync::Mutex;

/// Saved stories persisted to a JSON file.
///
/// A file that cannot be parsed is logged and treated as an empty library;
/// the next save replaces it.
#[derive(Debug)]
pub struct FileSystemStoryStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileSystemStoryStore {
    /// Opens a library file, creating its parent directory if needed.
    ///
    /// The file itself is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or the parent directory
    /// cannot be created.
    #[tracing::instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> StoryforgeResult<Self> {
        let path = path.into();

        if path.file_name().is_none() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(
                path.display().to_string(),
            ))
            .into());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tracing::info!(path = %path.display(), "Opened story library");
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Location of the library file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoryforgeResult<Vec<SavedStory>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(stories) => Ok(stories),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Story library is corrupt, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, stories: &[SavedStory]) -> StoryforgeResult<()> {
        let json = serde_json::to_vec_pretty(stories)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(count = stories.len(), path = %self.path.display(), "Wrote story library");
        Ok(())
    }
}

#[async_trait]
impl StoryStore for FileSystemStoryStore {
    async fn list(&self) -> StoryforgeResult<Vec<SavedStory>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn get(&self, title: &str) -> StoryforgeResult<Option<SavedStory>> {
        let _guard = self.lock.lock().await;
        Ok(library::find(&self.load().await?, title))
    }

    #[tracing::instrument(skip(self, story), fields(title = %story.title))]
    async fn save(&self, story: SavedStory) -> StoryforgeResult<bool> {
        let _guard = self.lock.lock().await;
        let mut stories = self.load().await?;
        let is_new = library::save_front(&mut stories, story);
        self.persist(&stories).await?;
        tracing::info!(is_new, count = stories.len(), "Saved story");
        Ok(is_new)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, title: &str) -> StoryforgeResult<bool> {
        let _guard = self.lock.lock().await;
        let mut stories = self.load().await?;
        if !library::remove(&mut stories, title) {
            return Ok(false);
        }
        self.persist(&stories).await?;
        tracing::info!(count = stories.len(), "Deleted story");
        Ok(true)
    }
}
