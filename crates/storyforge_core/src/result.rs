//! Generation results, one variant per content kind.

use crate::{ContentKind, StopReason};
use serde::{Deserialize, Serialize};

/// Free-text story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuickStoryResult {
    /// Story text, trimmed
    pub story: String,
}

/// Titled story with an optional moral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuredStoryResult {
    /// Story title
    pub title: String,
    /// Story text
    pub story: String,
    /// Moral lesson or deeper meaning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moral: Option<String>,
}

impl StructuredStoryResult {
    /// Plain-text rendering: title, blank line, story, then the moral if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_core::StructuredStoryResult;
    ///
    /// let result = StructuredStoryResult {
    ///     title: "The Brave Bunny".into(),
    ///     story: "Once upon a time...".into(),
    ///     moral: Some("Be kind.".into()),
    /// };
    /// assert_eq!(
    ///     result.to_plain_text(),
    ///     "The Brave Bunny\n\nOnce upon a time...\n\nMoral: Be kind."
    /// );
    /// ```
    pub fn to_plain_text(&self) -> String {
        match &self.moral {
            Some(moral) => format!("{}\n\n{}\n\nMoral: {}", self.title, self.story, moral),
            None => format!("{}\n\n{}", self.title, self.story),
        }
    }
}

/// Formatted screenplay.
///
/// The text is passed through exactly as generated; `truncated` tells the
/// caller whether to present a continuation notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptResult {
    /// Script text
    pub script: String,
    /// The oracle stopped at its output budget
    pub truncated: bool,
    /// Normalised stop reason
    pub stop_reason: StopReason,
    /// The oracle's finish signal, verbatim
    pub finish_reason: String,
}

/// One story prompt idea.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptSuggestion {
    /// Short catchy title
    pub title: String,
    /// One-sentence premise
    pub description: String,
}

impl PromptSuggestion {
    /// Create a new suggestion
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Where a suggestion batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// Generated by the oracle
    #[display("oracle")]
    Oracle,
    /// Drawn from the local pool
    #[display("fallback")]
    Fallback,
}

/// A batch of story prompt ideas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptSuggestionResult {
    /// Suggestions in display order
    pub items: Vec<PromptSuggestion>,
    /// Origin of the batch
    pub source: SuggestionSource,
}

/// Tagged union of everything the pipeline returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Free-text story
    QuickStory(QuickStoryResult),
    /// Titled story
    StructuredStory(StructuredStoryResult),
    /// Screenplay
    Script(ScriptResult),
    /// Prompt idea batch
    PromptSuggestions(PromptSuggestionResult),
}

impl GenerationResult {
    /// The content kind of this result.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::QuickStory(_) => ContentKind::QuickStory,
            Self::StructuredStory(_) => ContentKind::StructuredStory,
            Self::Script(_) => ContentKind::Script,
            Self::PromptSuggestions(_) => ContentKind::PromptSuggestions,
        }
    }
}
