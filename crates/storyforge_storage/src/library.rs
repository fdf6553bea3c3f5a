//! Ordering rules shared by every backend.

use storyforge_core::SavedStory;

/// Puts `story` at the front, dropping any record with the same title.
///
/// Returns `true` when the title was not present before.
pub(crate) fn save_front(stories: &mut Vec<SavedStory>, story: SavedStory) -> bool {
    let before = stories.len();
    stories.retain(|s| s.title != story.title);
    let is_new = stories.len() == before;
    stories.insert(0, story);
    is_new
}

/// Drops every record titled `title`. Returns `true` if any was removed.
pub(crate) fn remove(stories: &mut Vec<SavedStory>, title: &str) -> bool {
    let before = stories.len();
    stories.retain(|s| s.title != title);
    stories.len() != before
}

pub(crate) fn find(stories: &[SavedStory], title: &str) -> Option<SavedStory> {
    stories.iter().find(|s| s.title == title).cloned()
}
