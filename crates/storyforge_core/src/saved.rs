//! Saved story records.

use crate::{StructuredStoryRequest, StructuredStoryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured story kept in the local library, keyed by title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedStory {
    /// Story title, the library key
    pub title: String,
    /// Story text
    pub story: String,
    /// Moral, when the story has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moral: Option<String>,
    /// Character the story was generated from
    pub character: String,
    /// Setting the story was generated from
    pub setting: String,
    /// Plot twist the story was generated from
    pub twist: String,
    /// Genre template name
    pub template: String,
    /// Whether kids mode was on
    pub kids_mode: bool,
    /// When the story was saved
    pub saved_at: DateTime<Utc>,
}

impl SavedStory {
    /// Combines a result with the request that produced it, stamped now.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_core::{SavedStory, StructuredStoryRequest, StructuredStoryResult};
    ///
    /// let request = StructuredStoryRequest {
    ///     character: "Robot".into(),
    ///     setting: "Space station".into(),
    ///     twist: "It was a dream".into(),
    ///     template: "scifi".into(),
    ///     kids_mode: false,
    /// };
    /// let result = StructuredStoryResult {
    ///     title: "Orbit".into(),
    ///     story: "...".into(),
    ///     moral: None,
    /// };
    /// let saved = SavedStory::from_generation(&request, &result);
    /// assert_eq!(saved.title, "Orbit");
    /// assert_eq!(saved.template, "scifi");
    /// ```
    pub fn from_generation(
        request: &StructuredStoryRequest,
        result: &StructuredStoryResult,
    ) -> Self {
        Self {
            title: result.title.clone(),
            story: result.story.clone(),
            moral: result.moral.clone(),
            character: request.character.clone(),
            setting: request.setting.clone(),
            twist: request.twist.clone(),
            template: request.template.clone(),
            kids_mode: request.kids_mode,
            saved_at: Utc::now(),
        }
    }

    /// The story part of the record.
    pub fn result(&self) -> StructuredStoryResult {
        StructuredStoryResult {
            title: self.title.clone(),
            story: self.story.clone(),
            moral: self.moral.clone(),
        }
    }
}
