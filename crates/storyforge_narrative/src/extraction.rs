//! Turning raw oracle text into typed results.
//!
//! Oracle output is not guaranteed to be well-formed. Structured stories go
//! through an ordered list of parsers where the first success wins; every
//! parse failure becomes an [`ExtractionError`], never a panic.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use storyforge_core::{
    PromptSuggestion, QuickStoryResult, RawCompletion, ScriptResult, StructuredStoryResult,
};
use storyforge_error::{ExtractionError, ExtractionErrorKind};
use tracing::{debug, warn};

/// Most suggestions returned from one batch.
pub const SUGGESTION_BATCH_SIZE: usize = 6;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\n?").expect("valid fence regex"));

static TITLE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""title":\s*"([^"]+)""#).expect("valid title regex"));

static STORY_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""story":\s*"((?:[^"\\]|\\.)*)""#).expect("valid story regex")
});

static MORAL_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""moral":\s*"([^"]+)""#).expect("valid moral regex"));

static SCRIPT_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)INT\.|EXT\.|FADE IN:|FADE OUT:").expect("valid script marker regex")
});

type StoryParser = fn(&str) -> Option<StructuredStoryResult>;

/// Structured story parse attempts, in order.
const STORY_PARSERS: &[(&str, StoryParser)] = &[
    ("strict", parse_strict),
    ("balanced", parse_balanced),
    ("fields", parse_fields),
];

/// Removes markdown code-fence markers (```` ``` ```` and ```` ```json ````)
/// and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use storyforge_narrative::strip_fences;
///
/// assert_eq!(strip_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_fences("  plain  "), "plain");
/// ```
pub fn strip_fences(text: &str) -> String {
    FENCE.replace_all(text, "").trim().to_string()
}

/// Accepts a free-text story after trimming.
///
/// # Errors
///
/// Fails with `EmptyOutput` if nothing but whitespace came back.
pub fn extract_quick_story(completion: &RawCompletion) -> Result<QuickStoryResult, ExtractionError> {
    let story = completion.text.trim();
    if story.is_empty() {
        return Err(ExtractionError::new(ExtractionErrorKind::EmptyOutput));
    }
    Ok(QuickStoryResult {
        story: story.to_string(),
    })
}

/// Parses a `{title, story, moral?}` object.
///
/// Tries a strict JSON parse of the fence-stripped text, then the first
/// balanced `{...}` block, then field-by-field regex recovery on the raw text.
///
/// # Errors
///
/// Fails with `EmptyOutput` for blank text and `UnparsableOutput` when no
/// attempt yields both a title and a story.
///
/// # Examples
///
/// ```
/// use storyforge_core::RawCompletion;
/// use storyforge_narrative::extract_structured_story;
///
/// let raw = RawCompletion::new("{\"title\": \"T\", \"story\": \"some text\"", Some("stop"));
/// let result = extract_structured_story(&raw).unwrap();
/// assert_eq!(result.title, "T");
/// assert_eq!(result.story, "some text");
/// ```
pub fn extract_structured_story(
    completion: &RawCompletion,
) -> Result<StructuredStoryResult, ExtractionError> {
    let text = completion.text.as_str();
    if text.trim().is_empty() {
        return Err(ExtractionError::new(ExtractionErrorKind::EmptyOutput));
    }

    for (name, parser) in STORY_PARSERS {
        if let Some(result) = parser(text) {
            debug!(parser = name, "Structured story extracted");
            return Ok(result);
        }
    }

    warn!(chars = text.len(), "No parser recovered a title and story");
    Err(ExtractionError::new(ExtractionErrorKind::UnparsableOutput(
        "Could not parse story response".to_string(),
    )))
}

/// Parses a batch of `{title, description}` suggestions.
///
/// Accepts a bare array or an object with a `prompts` or `stories` array.
/// Items missing either field are skipped, then the first
/// [`SUGGESTION_BATCH_SIZE`] are kept.
///
/// # Errors
///
/// Fails with `UnparsableOutput` when no usable item is found.
pub fn extract_suggestions(
    completion: &RawCompletion,
) -> Result<Vec<PromptSuggestion>, ExtractionError> {
    let cleaned = strip_fences(&completion.text);
    let value = parse_json_value(&cleaned).ok_or_else(|| {
        ExtractionError::new(ExtractionErrorKind::UnparsableOutput(
            "suggestions are not valid JSON".to_string(),
        ))
    })?;

    let items = suggestion_array(&value).ok_or_else(|| {
        ExtractionError::new(ExtractionErrorKind::UnparsableOutput(
            "no suggestion array in response".to_string(),
        ))
    })?;

    let suggestions: Vec<PromptSuggestion> = items
        .iter()
        .filter_map(suggestion_item)
        .take(SUGGESTION_BATCH_SIZE)
        .collect();

    if suggestions.is_empty() {
        return Err(ExtractionError::new(ExtractionErrorKind::UnparsableOutput(
            "suggestion array has no usable items".to_string(),
        )));
    }
    Ok(suggestions)
}

/// Checks script text for screenplay markers and reports truncation.
///
/// The text is returned exactly as the oracle produced it.
///
/// # Errors
///
/// Fails with `EmptyOutput` for blank text and `NotAScriptFormat` when none of
/// `INT.`, `EXT.`, `FADE IN:` or `FADE OUT:` appears (case-insensitive).
pub fn extract_script(completion: &RawCompletion) -> Result<ScriptResult, ExtractionError> {
    if completion.text.trim().is_empty() {
        return Err(ExtractionError::new(ExtractionErrorKind::EmptyOutput));
    }
    if !SCRIPT_MARKERS.is_match(&completion.text) {
        return Err(ExtractionError::new(ExtractionErrorKind::NotAScriptFormat));
    }
    Ok(ScriptResult {
        script: completion.text.clone(),
        truncated: completion.is_truncated(),
        stop_reason: completion.stop_reason,
        finish_reason: completion.finish_reason.clone(),
    })
}

fn parse_strict(text: &str) -> Option<StructuredStoryResult> {
    let value: Value = serde_json::from_str(&strip_fences(text)).ok()?;
    story_from_value(&value)
}

fn parse_balanced(text: &str) -> Option<StructuredStoryResult> {
    let block = extract_balanced(&strip_fences(text), '{', '}')?;
    let value: Value = serde_json::from_str(&block).ok()?;
    story_from_value(&value)
}

fn parse_fields(text: &str) -> Option<StructuredStoryResult> {
    let title = TITLE_FIELD.captures(text)?.get(1)?.as_str().to_string();
    let story = STORY_FIELD
        .captures(text)?
        .get(1)?
        .as_str()
        .replace("\\n", "\n")
        .replace("\\\"", "\"");
    let moral = MORAL_FIELD
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|m| !m.trim().is_empty());

    // Same rule as the JSON parsers: title and story must carry text
    if title.trim().is_empty() || story.trim().is_empty() {
        return None;
    }

    Some(StructuredStoryResult {
        title,
        story,
        moral,
    })
}

fn story_from_value(value: &Value) -> Option<StructuredStoryResult> {
    let title = non_blank(value.get("title"))?;
    let story = non_blank(value.get("story"))?;
    let moral = non_blank(value.get("moral"));
    Some(StructuredStoryResult { title, story, moral })
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn parse_json_value(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }

    // Prose around the payload: take whichever structure opens first
    let (first, second) = match (text.find('['), text.find('{')) {
        (Some(bracket), Some(brace)) if bracket < brace => (('[', ']'), ('{', '}')),
        _ => (('{', '}'), ('[', ']')),
    };
    [first, second]
        .into_iter()
        .filter_map(|(open, close)| extract_balanced(text, open, close))
        .find_map(|block| serde_json::from_str(&block).ok())
}

fn suggestion_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => ["prompts", "stories"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

fn suggestion_item(item: &Value) -> Option<PromptSuggestion> {
    let title = non_blank(item.get("title"))?;
    let description = non_blank(item.get("description"))?;
    Some(PromptSuggestion::new(title, description))
}

/// Content between the first `open` and its matching `close`.
///
/// Delimiters inside JSON strings are ignored. Returns `None` if the block
/// never closes.
fn extract_balanced(text: &str, open: char, close: char) -> Option<String> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(text[start..start + i + c.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyforge_core::StopReason;

    fn raw(text: &str) -> RawCompletion {
        RawCompletion::new(text, Some("stop"))
    }

    #[test]
    fn test_fenced_and_plain_parse_the_same() {
        let plain = r#"{"title":"T","story":"S","moral":"M"}"#;
        let fenced = format!("```json\n{}\n```", plain);

        let expected = StructuredStoryResult {
            title: "T".into(),
            story: "S".into(),
            moral: Some("M".into()),
        };
        assert_eq!(extract_structured_story(&raw(plain)).unwrap(), expected);
        assert_eq!(extract_structured_story(&raw(&fenced)).unwrap(), expected);
    }

    #[test]
    fn test_prose_around_object() {
        let text = "Here is your story:\n{\"title\": \"Ash {and} Ember\", \"story\": \"Once...\"}\nEnjoy!";
        let result = extract_structured_story(&raw(text)).unwrap();
        assert_eq!(result.title, "Ash {and} Ember");
        assert_eq!(result.moral, None);
    }

    #[test]
    fn test_regex_recovery_unescapes_story() {
        let text = r#"{"title": "T", "story": "Line one.\nShe said \"run\".", "moral": "Be brave""#;
        let result = extract_structured_story(&raw(text)).unwrap();
        assert_eq!(result.title, "T");
        assert_eq!(result.story, "Line one.\nShe said \"run\".");
        assert_eq!(result.moral.as_deref(), Some("Be brave"));
    }

    #[test]
    fn test_missing_story_is_unparsable() {
        let err = extract_structured_story(&raw(r#"{"title": "T", "moral": "M"}"#)).unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::UnparsableOutput(_)));
    }

    #[test]
    fn test_blank_story_is_unparsable() {
        for text in [
            r#"{"title":"T","story":""}"#,
            r#"{"title":"T","story":"   ","moral":"M"}"#,
            r#"{"title": "T", "story": "", "moral": "M""#,
        ] {
            let err = extract_structured_story(&raw(text)).unwrap_err();
            assert!(
                matches!(err.kind, ExtractionErrorKind::UnparsableOutput(_)),
                "accepted {}",
                text
            );
        }
    }

    #[test]
    fn test_blank_title_is_unparsable() {
        let err = extract_structured_story(&raw(r#"{"title": " ", "story": "S""#)).unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::UnparsableOutput(_)));
    }

    #[test]
    fn test_regex_recovery_drops_blank_moral() {
        let result =
            extract_structured_story(&raw(r#"{"title": "T", "story": "S", "moral": "  ""#))
                .unwrap();
        assert_eq!(result.story, "S");
        assert_eq!(result.moral, None);
    }

    #[test]
    fn test_garbage_is_unparsable() {
        let err = extract_structured_story(&raw("{{{{ \"title\" :: ")).unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::UnparsableOutput(_)));
    }

    #[test]
    fn test_quick_story_trims() {
        let result = extract_quick_story(&raw("\n  Once upon a time.  \n")).unwrap();
        assert_eq!(result.story, "Once upon a time.");

        let err = extract_quick_story(&raw("   ")).unwrap_err();
        assert_eq!(err.kind, ExtractionErrorKind::EmptyOutput);
    }

    #[test]
    fn test_suggestions_shapes() {
        let array = r#"[{"title": "A", "description": "a"}, {"title": "B", "description": "b"}]"#;
        assert_eq!(extract_suggestions(&raw(array)).unwrap().len(), 2);

        let prompts = r#"{"prompts": [{"title": "A", "description": "a"}]}"#;
        assert_eq!(extract_suggestions(&raw(prompts)).unwrap()[0].title, "A");

        let stories = "```json\n{\"stories\": [{\"title\": \"S\", \"description\": \"s\"}]}\n```";
        assert_eq!(extract_suggestions(&raw(stories)).unwrap()[0].title, "S");
    }

    #[test]
    fn test_suggestions_take_first_six_valid() {
        let mut items: Vec<String> = (0..9)
            .map(|i| format!(r#"{{"title": "T{i}", "description": "D{i}"}}"#))
            .collect();
        items.insert(0, r#"{"title": "no description"}"#.to_string());
        let text = format!("[{}]", items.join(","));

        let suggestions = extract_suggestions(&raw(&text)).unwrap();
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].title, "T0");
        assert_eq!(suggestions[5].title, "T5");
    }

    #[test]
    fn test_suggestions_unrecognized_key() {
        let err = extract_suggestions(&raw(r#"{"ideas": [{"title": "A", "description": "a"}]}"#))
            .unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::UnparsableOutput(_)));

        let err = extract_suggestions(&raw(r#"{"prompts": [{"name": "A"}]}"#)).unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::UnparsableOutput(_)));
    }

    #[test]
    fn test_script_markers() {
        let script = RawCompletion::new("fade in:\n\nint. kitchen - night\n\nMARA\nHello.", Some("length"));
        let result = extract_script(&script).unwrap();
        assert!(result.truncated);
        assert_eq!(result.stop_reason, StopReason::LengthLimit);
        assert_eq!(result.finish_reason, "length");
        assert_eq!(result.script, script.text);

        let prose = raw("Mara walks into the kitchen and says hello. It is a quiet night.");
        let err = extract_script(&prose).unwrap_err();
        assert_eq!(err.kind, ExtractionErrorKind::NotAScriptFormat);
    }

    #[test]
    fn test_balanced_ignores_braces_in_strings() {
        let text = r#"x {"a": "}", "b": {"c": 1}} y"#;
        assert_eq!(
            extract_balanced(text, '{', '}').as_deref(),
            Some(r#"{"a": "}", "b": {"c": 1}}"#)
        );
        assert_eq!(extract_balanced("{ never closes", '{', '}'), None);
    }
}
