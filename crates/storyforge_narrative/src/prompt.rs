//! Prompt assembly.
//!
//! Every content kind has a fixed system instruction, temperature and token
//! budget. Prompt text depends only on the request, so building the same
//! request twice yields identical output.

use storyforge_core::{
    CompletionRequest, GenerationRequest, GenrePolicy, QuickStoryRequest, ResponseFormat,
    ScriptRequest, StoryTemplate, StructuredStoryRequest,
};
use storyforge_error::RequestError;
use tracing::{debug, instrument};

const QUICK_STORY_SYSTEM: &str = "\
You are a talented creative writer who ONLY writes stories and narratives.

CRITICAL: You do NOT write:
- Code or programming content
- Recipes or cooking instructions
- Essays or academic papers
- Tutorials or how-to guides
- Technical documentation
- Any non-fiction content

You ONLY create engaging fictional stories with characters, plots, and narratives.";

const STRUCTURED_STORY_SYSTEM: &str =
    "You are a creative storyteller. Always respond with valid JSON only.";

const SUGGESTIONS_SYSTEM: &str = "You are a creative story idea generator. \
You ONLY generate story prompts and creative fiction ideas.";

const SUGGESTIONS_USER: &str = r#"Generate 6 unique and creative STORY prompts. Each should be intriguing and inspire imagination.

Return ONLY a JSON object (no markdown, no backticks) with a "prompts" array:
{
  "prompts": [
    {
      "title": "Short catchy title (2-4 words)",
      "description": "One sentence description (15-20 words) that describes the story premise"
    }
  ]
}

Mix different genres: fantasy, sci-fi, mystery, romance, thriller, adventure."#;

const KIDS_INSTRUCTION: &str = "\
IMPORTANT: This story is for children ages 5-10. Use:
- Simple vocabulary (no complex words)
- Short sentences
- Positive messages
- Age-appropriate themes
- A clear moral lesson about friendship, kindness, or bravery";

const STANDARD_INSTRUCTION: &str = "\
Use vivid descriptions, complex vocabulary, and mature storytelling techniques.
Include emotional depth and nuanced character development.";

const SCRIPT_FORMATTING: &str = "\
FORMATTING:
- Scene headings in ALL CAPS (INT./EXT. LOCATION - DAY/NIGHT)
- Action lines in present tense, left-aligned
- Character names CENTERED and IN CAPS above dialogue
- Dialogue centered below character names
- Include emotional beats, pauses, and visual storytelling
- Use proper transitions (CUT TO:, FADE TO:, DISSOLVE TO:)

Write the COMPLETE script. Do NOT stop early. Do NOT summarize. \
Write every single page required for the full story.";

/// Turns generation requests into oracle prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptBuilder {
    genre_policy: GenrePolicy,
}

impl PromptBuilder {
    /// Creates a builder that resolves story genres under `genre_policy`.
    pub fn new(genre_policy: GenrePolicy) -> Self {
        Self { genre_policy }
    }

    /// The policy applied to unknown story genres.
    pub fn genre_policy(&self) -> GenrePolicy {
        self.genre_policy
    }

    /// Builds the prompt for any request kind.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownGenre` when the policy is strict and a structured
    /// story names a genre with no style guide.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_core::{GenerationRequest, QuickStoryRequest};
    /// use storyforge_narrative::PromptBuilder;
    ///
    /// let builder = PromptBuilder::default();
    /// let request = GenerationRequest::from(QuickStoryRequest::new("A lighthouse that sings"));
    /// let prompt = builder.build(&request).unwrap();
    /// assert_eq!(prompt.max_output_tokens, 1500);
    /// assert!(prompt.user_instruction.contains("\"A lighthouse that sings\""));
    /// ```
    #[instrument(skip(self, request), fields(kind = %request.kind()))]
    pub fn build(&self, request: &GenerationRequest) -> Result<CompletionRequest, RequestError> {
        let prompt = match request {
            GenerationRequest::QuickStory(r) => quick_story(r),
            GenerationRequest::StructuredStory(r) => self.structured_story(r)?,
            GenerationRequest::Script(r) => script(r),
            GenerationRequest::PromptSuggestions(_) => suggestions(),
        };
        debug!(
            max_tokens = prompt.max_output_tokens,
            temperature = prompt.temperature,
            chars = prompt.user_instruction.len(),
            "Prompt assembled"
        );
        Ok(prompt)
    }

    fn structured_story(
        &self,
        request: &StructuredStoryRequest,
    ) -> Result<CompletionRequest, RequestError> {
        let template = StoryTemplate::resolve(&request.template, self.genre_policy)?;
        let kids = request.kids_mode;

        let audience = if kids { "children's " } else { "" };
        let words = if kids { "400-500" } else { "600-800" };
        let instruction = if kids {
            KIDS_INSTRUCTION
        } else {
            STANDARD_INSTRUCTION
        };
        let closing = if kids {
            "- A moral lesson"
        } else {
            "- Deep thematic resonance"
        };
        let moral_hint = if kids {
            "A simple moral lesson"
        } else {
            "The story's deeper meaning"
        };

        let user = format!(
            "Write an immersive {audience}story ({words} words) in the {genre} genre.

Story Elements:
- Character: {character}
- Setting: {setting}
- Plot twist: {twist}

Style: {style}

{instruction}

Create a complete story with:
- Engaging opening
- Clear character development
- Descriptive setting
- The specified plot twist
- Satisfying conclusion
{closing}

Return ONLY a JSON object (no markdown, no backticks):
{{
  \"title\": \"An engaging title\",
  \"story\": \"The complete story text\",
  \"moral\": \"{moral_hint}\"
}}",
            genre = request.template.trim(),
            character = request.character.trim(),
            setting = request.setting.trim(),
            twist = request.twist.trim(),
            style = template.style_guide(),
        );

        Ok(CompletionRequest {
            system_instruction: STRUCTURED_STORY_SYSTEM.to_string(),
            user_instruction: user,
            max_output_tokens: 2500,
            temperature: 0.9,
            top_p: None,
            response_format: ResponseFormat::JsonObject,
        })
    }
}

fn quick_story(request: &QuickStoryRequest) -> CompletionRequest {
    let user = format!(
        "Write a complete short story (400-600 words) based on this prompt:

\"{prompt}\"

Create a FICTIONAL NARRATIVE story with:
- A compelling opening that hooks the reader
- Well-developed characters with clear motivations
- Vivid descriptions and sensory details
- A clear conflict or challenge
- An engaging plot with rising action
- A satisfying resolution or thought-provoking ending

Write in an engaging narrative style. Return ONLY the story text, no titles or extra formatting.",
        prompt = request.prompt.trim(),
    );

    CompletionRequest {
        system_instruction: QUICK_STORY_SYSTEM.to_string(),
        user_instruction: user,
        max_output_tokens: 1500,
        temperature: 0.9,
        top_p: None,
        response_format: ResponseFormat::Text,
    }
}

fn script(request: &ScriptRequest) -> CompletionRequest {
    let profile = request.script_type.profile();
    let genre = request.genre.trim();

    let system = format!(
        "You are a professional screenwriter with expertise in writing {genre} scripts. \
You understand screenplay formatting, pacing, dialogue, and story structure.

CRITICAL INSTRUCTIONS:
- You MUST write COMPLETE scripts from beginning to end
- NEVER summarize, abbreviate, or skip scenes
- Write EVERY line of dialogue and EVERY action beat
- Do NOT use placeholders like \"[more dialogue]\" or \"[scene continues]\"
- If you reach a length limit, write \"CONTINUED...\" at the end
- ALWAYS aim for the FULL required page count

You ONLY generate scripts and screenplays."
    );

    let user = format!(
        "Write a {genre} {description} script based on this premise:

{premise}

MANDATORY REQUIREMENTS:
- Target Length: {page_range}
- Genre: {genre}
- Format: Professional screenplay format

{format}

CRITICAL LENGTH REQUIREMENT:
{length}

{formatting}",
        description = profile.description(),
        premise = request.premise.trim(),
        page_range = profile.page_range(),
        format = profile.format_guidance(),
        length = profile.length_requirement(),
        formatting = SCRIPT_FORMATTING,
    );

    CompletionRequest {
        system_instruction: system,
        user_instruction: user,
        max_output_tokens: *profile.max_output_tokens(),
        temperature: 0.8,
        top_p: Some(0.9),
        response_format: ResponseFormat::Text,
    }
}

fn suggestions() -> CompletionRequest {
    CompletionRequest {
        system_instruction: SUGGESTIONS_SYSTEM.to_string(),
        user_instruction: SUGGESTIONS_USER.to_string(),
        max_output_tokens: 800,
        temperature: 1.0,
        top_p: None,
        response_format: ResponseFormat::JsonObject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyforge_core::{PromptSuggestionRequest, ScriptType};
    use storyforge_error::RequestErrorKind;
    use strum::IntoEnumIterator;

    fn story(template: &str, kids_mode: bool) -> GenerationRequest {
        GenerationRequest::StructuredStory(StructuredStoryRequest {
            character: "A retired clockmaker".into(),
            setting: "A floating market".into(),
            twist: "Time runs backwards at noon".into(),
            template: template.into(),
            kids_mode,
        })
    }

    fn script_request(script_type: ScriptType) -> GenerationRequest {
        GenerationRequest::Script(ScriptRequest {
            premise: "Two rivals share a lighthouse".into(),
            script_type,
            genre: "drama".into(),
        })
    }

    #[test]
    fn test_builds_are_identical() {
        let builder = PromptBuilder::default();
        for request in [
            story("horror", false),
            story("mystery", true),
            script_request(ScriptType::Tv),
            GenerationRequest::from(QuickStoryRequest::new("A fox who steals moonlight")),
            GenerationRequest::from(PromptSuggestionRequest::default()),
        ] {
            assert_eq!(builder.build(&request).unwrap(), builder.build(&request).unwrap());
        }
    }

    #[test]
    fn test_script_budget_follows_type() {
        let builder = PromptBuilder::default();
        let budgets: Vec<u32> = ScriptType::iter()
            .map(|t| builder.build(&script_request(t)).unwrap().max_output_tokens)
            .collect();
        assert_eq!(budgets, vec![3000, 1500, 30000, 12000]);
    }

    #[test]
    fn test_script_prompt_contents() {
        let prompt = PromptBuilder::default()
            .build(&script_request(ScriptType::Feature))
            .unwrap();
        assert_eq!(prompt.temperature, 0.8);
        assert_eq!(prompt.top_p, Some(0.9));
        assert_eq!(prompt.response_format, ResponseFormat::Text);
        assert!(prompt.system_instruction.contains("writing drama scripts"));
        assert!(prompt.system_instruction.contains("CONTINUED..."));
        assert!(prompt.user_instruction.contains("Two rivals share a lighthouse"));
        assert!(prompt.user_instruction.contains("Full feature film script (90-120 pages)"));
        assert!(prompt.user_instruction.contains("ACT III"));
    }

    #[test]
    fn test_kids_mode_branches() {
        let builder = PromptBuilder::default();
        let kids = builder.build(&story("comedy", true)).unwrap();
        let standard = builder.build(&story("comedy", false)).unwrap();

        assert!(kids.user_instruction.contains("children's story (400-500 words)"));
        assert!(kids.user_instruction.contains("- A moral lesson"));
        assert!(kids.user_instruction.contains("ages 5-10"));
        assert!(standard.user_instruction.contains("story (600-800 words)"));
        assert!(standard.user_instruction.contains("- Deep thematic resonance"));
        assert!(standard.user_instruction.contains("The story's deeper meaning"));
        assert_eq!(kids.response_format, ResponseFormat::JsonObject);
        assert_eq!(kids.max_output_tokens, 2500);
    }

    #[test]
    fn test_unknown_genre_by_policy() {
        let permissive = PromptBuilder::default().build(&story("western", false)).unwrap();
        assert!(permissive.user_instruction.contains("in the western genre"));
        assert!(
            permissive
                .user_instruction
                .contains(StoryTemplate::Fantasy.style_guide())
        );

        let err = PromptBuilder::new(GenrePolicy::Strict)
            .build(&story("western", false))
            .unwrap_err();
        assert_eq!(err.kind, RequestErrorKind::UnknownGenre("western".into()));
    }

    #[test]
    fn test_quick_story_is_free_text() {
        let prompt = PromptBuilder::default()
            .build(&GenerationRequest::from(QuickStoryRequest::new("  a fox  ")))
            .unwrap();
        assert_eq!(prompt.response_format, ResponseFormat::Text);
        assert!(prompt.system_instruction.contains("Recipes or cooking instructions"));
        assert!(prompt.user_instruction.contains("\"a fox\""));
    }

    #[test]
    fn test_suggestions_ask_for_six() {
        let prompt = PromptBuilder::default()
            .build(&GenerationRequest::from(PromptSuggestionRequest::default()))
            .unwrap();
        assert_eq!(prompt.temperature, 1.0);
        assert_eq!(prompt.max_output_tokens, 800);
        assert!(prompt.user_instruction.contains("Generate 6"));
    }
}
