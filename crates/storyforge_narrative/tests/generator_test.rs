//! Generation flow tests against a scripted driver.

mod test_utils;

use std::sync::Arc;
use storyforge_core::{
    GenerationRequest, GenerationResult, GenrePolicy, QuickStoryRequest, ResponseFormat,
    ScriptRequest, ScriptType, StructuredStoryRequest, SuggestionSource,
};
use storyforge_error::{
    ExtractionErrorKind, InputErrorKind, RequestErrorKind, StoryforgeError, StoryforgeErrorKind,
};
use storyforge_narrative::{FALLBACK_POOL, PromptBuilder, StoryGenerator};
use test_utils::{MockDriver, MockReply};

fn generator(driver: &MockDriver) -> StoryGenerator {
    StoryGenerator::new(Arc::new(driver.clone()))
}

fn story_request(template: &str) -> StructuredStoryRequest {
    StructuredStoryRequest {
        character: "A brave knight".into(),
        setting: "A haunted castle".into(),
        twist: "The ghost is their ancestor".into(),
        template: template.into(),
        kids_mode: false,
    }
}

fn script_request(premise: &str) -> ScriptRequest {
    ScriptRequest {
        premise: premise.into(),
        script_type: ScriptType::Scene,
        genre: "thriller".into(),
    }
}

fn input_kind(err: &StoryforgeError) -> Option<&InputErrorKind> {
    match err.kind() {
        StoryforgeErrorKind::Input(e) => Some(&e.kind),
        _ => None,
    }
}

fn extraction_kind(err: &StoryforgeError) -> Option<&ExtractionErrorKind> {
    match err.kind() {
        StoryforgeErrorKind::Extraction(e) => Some(&e.kind),
        _ => None,
    }
}

#[tokio::test]
async fn quick_story_returns_trimmed_text() -> anyhow::Result<()> {
    let driver = MockDriver::always("\n\nThe detective opened the door.\n");
    let result = generator(&driver)
        .quick_story(&QuickStoryRequest::new(
            "Tell me about a detective who discovers a hidden door",
        ))
        .await?;

    assert_eq!(result.story, "The detective opened the door.");
    assert_eq!(driver.call_count(), 1);
    let prompt = driver.last_request().unwrap();
    assert_eq!(prompt.response_format, ResponseFormat::Text);
    Ok(())
}

#[tokio::test]
async fn off_domain_prompt_never_reaches_oracle() {
    let driver = MockDriver::always("unused");
    let err = generator(&driver)
        .quick_story(&QuickStoryRequest::new("Write me a recipe for chocolate cake"))
        .await
        .unwrap_err();

    assert_eq!(
        input_kind(&err),
        Some(&InputErrorKind::OffDomainKeyword("recipe".into()))
    );
    assert!(err.is_user_correctable());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn short_script_premise_is_rejected_early() {
    let driver = MockDriver::always("FADE IN:");
    let err = generator(&driver)
        .script(&script_request("hello"))
        .await
        .unwrap_err();

    assert_eq!(
        input_kind(&err),
        Some(&InputErrorKind::TooShort {
            minimum: 10,
            actual: 5
        })
    );
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn blank_story_field_is_request_error() {
    let driver = MockDriver::always("unused");
    let mut request = story_request("fantasy");
    request.setting = "   ".into();

    let err = generator(&driver)
        .structured_story(&request)
        .await
        .unwrap_err();
    match err.kind() {
        StoryforgeErrorKind::Request(e) => {
            assert_eq!(e.kind, RequestErrorKind::EmptyField("setting".into()))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn structured_story_parses_fenced_json() -> anyhow::Result<()> {
    let driver = MockDriver::always(
        "```json\n{\"title\": \"The Knight's Echo\", \"story\": \"Long ago...\", \"moral\": \"Family endures\"}\n```",
    );
    let result = generator(&driver)
        .structured_story(&story_request("horror"))
        .await?;

    assert_eq!(result.title, "The Knight's Echo");
    assert_eq!(result.moral.as_deref(), Some("Family endures"));
    let prompt = driver.last_request().unwrap();
    assert_eq!(prompt.response_format, ResponseFormat::JsonObject);
    assert!(prompt.user_instruction.contains("dark and suspenseful"));
    Ok(())
}

#[tokio::test]
async fn unparsable_story_is_not_masked() {
    let driver = MockDriver::always("I'm sorry, I can't help with that.");
    let err = generator(&driver)
        .structured_story(&story_request("comedy"))
        .await
        .unwrap_err();

    assert!(matches!(
        extraction_kind(&err),
        Some(ExtractionErrorKind::UnparsableOutput(_))
    ));
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn strict_policy_rejects_unknown_genre_before_call() {
    let driver = MockDriver::always("unused");
    let generator = generator(&driver).with_builder(PromptBuilder::new(GenrePolicy::Strict));

    let err = generator
        .structured_story(&story_request("western"))
        .await
        .unwrap_err();
    assert!(err.is_user_correctable());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn script_truncation_is_reported() -> anyhow::Result<()> {
    let driver = MockDriver::new(vec![MockReply::Text(
        "FADE IN:\n\nINT. WAREHOUSE - NIGHT\n\nA door creaks.".into(),
        "length",
    )]);
    let result = generator(&driver)
        .script(&script_request("Two strangers meet in an abandoned warehouse"))
        .await?;

    assert!(result.truncated);
    assert_eq!(result.finish_reason, "length");
    assert!(result.script.starts_with("FADE IN:"));

    let prompt = driver.last_request().unwrap();
    assert_eq!(prompt.max_output_tokens, 1500);
    assert_eq!(prompt.top_p, Some(0.9));
    Ok(())
}

#[tokio::test]
async fn prose_script_is_rejected() {
    let driver = MockDriver::always("Two strangers talk for a while and then leave.");
    let err = generator(&driver)
        .script(&script_request("Two strangers meet in an abandoned warehouse"))
        .await
        .unwrap_err();
    assert_eq!(
        extraction_kind(&err),
        Some(&ExtractionErrorKind::NotAScriptFormat)
    );
}

#[tokio::test]
async fn gateway_errors_propagate_for_scripts() {
    let driver = MockDriver::new(vec![MockReply::Status(503)]);
    let err = generator(&driver)
        .script(&script_request("Two strangers meet in an abandoned warehouse"))
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn missing_credential_propagates_for_stories() {
    let driver = MockDriver::without_credential();
    let err = generator(&driver)
        .quick_story(&QuickStoryRequest::new("A dragon who is afraid of the dark"))
        .await
        .unwrap_err();
    assert!(err.is_missing_credential());
}

#[tokio::test]
async fn suggestions_from_oracle() {
    let driver = MockDriver::always(
        r#"{"prompts": [
            {"title": "Glass City", "description": "A city made of glass hides one unbreakable secret."},
            {"title": "Salt Road", "description": "Merchants cross a desert that remembers every traveler."}
        ]}"#,
    );
    let result = generator(&driver).prompt_suggestions().await;

    assert_eq!(result.source, SuggestionSource::Oracle);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].title, "Glass City");
}

#[tokio::test]
async fn suggestions_fall_back_without_credential() {
    let driver = MockDriver::without_credential();
    let result = generator(&driver).prompt_suggestions().await;

    assert_eq!(result.source, SuggestionSource::Fallback);
    assert_eq!(result.items.len(), 6);
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn suggestions_fall_back_on_failure() {
    for reply in [
        MockReply::Unreachable,
        MockReply::Status(500),
        MockReply::Text("not json at all".into(), "stop"),
    ] {
        let driver = MockDriver::new(vec![reply]);
        let result = generator(&driver).prompt_suggestions().await;

        assert_eq!(result.source, SuggestionSource::Fallback);
        assert_eq!(result.items.len(), 6);
        assert!(
            result
                .items
                .iter()
                .all(|item| FALLBACK_POOL.iter().any(|(t, _)| *t == item.title))
        );
        assert_eq!(driver.call_count(), 1);
    }
}

#[tokio::test]
async fn generate_dispatches_by_kind() -> anyhow::Result<()> {
    let driver = MockDriver::always("Once upon a time there was a fox.");
    let result = generator(&driver)
        .generate(&GenerationRequest::from(QuickStoryRequest::new(
            "A fox who steals moonlight from the sky",
        )))
        .await?;

    match result {
        GenerationResult::QuickStory(r) => assert!(r.story.contains("fox")),
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}
