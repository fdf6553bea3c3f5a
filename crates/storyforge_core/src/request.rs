//! Generation requests, one variant per content kind.

use crate::ScriptType;
use serde::{Deserialize, Serialize};
use storyforge_error::{RequestError, RequestErrorKind};

/// The content kinds the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Free-text story from a single prompt
    #[display("quick_story")]
    QuickStory,
    /// Titled story built from picked elements
    #[display("structured_story")]
    StructuredStory,
    /// Formatted screenplay
    #[display("script")]
    Script,
    /// Batch of story prompt ideas
    #[display("prompt_suggestions")]
    PromptSuggestions,
}

/// A story from a single free-text prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuickStoryRequest {
    /// The user's prompt
    pub prompt: String,
}

impl QuickStoryRequest {
    /// Create a new quick story request
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// A titled story built from picked narrative elements.
///
/// `template` is kept as the caller supplied it; the prompt builder resolves it
/// against [`crate::StoryTemplate`] under the configured [`crate::GenrePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredStoryRequest {
    /// Main character
    pub character: String,
    /// Where the story takes place
    pub setting: String,
    /// Plot twist to work in
    pub twist: String,
    /// Genre template name
    pub template: String,
    /// Child-appropriate output
    #[serde(default)]
    pub kids_mode: bool,
}

/// A screenplay from a premise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRequest {
    /// Story premise
    pub premise: String,
    /// Script format
    pub script_type: ScriptType,
    /// Free-form genre label
    pub genre: String,
}

/// A batch of story prompt ideas. Takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptSuggestionRequest {}

/// Tagged union of everything the pipeline accepts.
///
/// # Examples
///
/// ```
/// use storyforge_core::{ContentKind, GenerationRequest, QuickStoryRequest};
///
/// let request = GenerationRequest::QuickStory(QuickStoryRequest::new("   "));
/// assert_eq!(request.kind(), ContentKind::QuickStory);
/// assert!(request.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    /// Free-text story
    QuickStory(QuickStoryRequest),
    /// Titled story with optional moral
    StructuredStory(StructuredStoryRequest),
    /// Screenplay
    Script(ScriptRequest),
    /// Prompt idea batch
    PromptSuggestions(PromptSuggestionRequest),
}

impl GenerationRequest {
    /// The content kind this request asks for.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::QuickStory(_) => ContentKind::QuickStory,
            Self::StructuredStory(_) => ContentKind::StructuredStory,
            Self::Script(_) => ContentKind::Script,
            Self::PromptSuggestions(_) => ContentKind::PromptSuggestions,
        }
    }

    /// Checks that every required text field is non-blank.
    pub fn validate(&self) -> Result<(), RequestError> {
        match self {
            Self::QuickStory(r) => require("prompt", &r.prompt),
            Self::StructuredStory(r) => {
                require("character", &r.character)?;
                require("setting", &r.setting)?;
                require("twist", &r.twist)?;
                require("template", &r.template)
            }
            Self::Script(r) => {
                require("prompt", &r.premise)?;
                require("genre", &r.genre)
            }
            Self::PromptSuggestions(_) => Ok(()),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::new(RequestErrorKind::EmptyField(
            field.to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_twist_is_named() {
        let request = GenerationRequest::StructuredStory(StructuredStoryRequest {
            character: "Pirate".into(),
            setting: "Sunken city".into(),
            twist: "  ".into(),
            template: "adventure".into(),
            kids_mode: false,
        });
        let err = request.validate().unwrap_err();
        assert_eq!(err.kind, RequestErrorKind::EmptyField("twist".into()));
    }

    #[test]
    fn test_suggestions_need_nothing() {
        let request = GenerationRequest::from(PromptSuggestionRequest::default());
        assert!(request.validate().is_ok());
        assert_eq!(request.kind(), ContentKind::PromptSuggestions);
    }

    #[test]
    fn test_tagged_wire_shape() {
        let request = GenerationRequest::Script(ScriptRequest {
            premise: "Two rivals share a lighthouse".into(),
            script_type: ScriptType::Scene,
            genre: "drama".into(),
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "script");
        assert_eq!(json["scriptType"], "scene");
    }
}
