//! End-to-end generation flows.
//!
//! Each flow runs validate → classify → build → complete → extract. Input
//! problems are caught before the oracle is called. Story and script failures
//! propagate to the caller; suggestion failures fall back to the local pool.

use crate::{
    PromptBuilder, extract_quick_story, extract_script, extract_structured_story,
    extract_suggestions, fallback_prompts,
};
use std::sync::Arc;
use storyforge_core::{
    GenerationRequest, GenerationResult, PromptSuggestionRequest, PromptSuggestionResult,
    QuickStoryRequest, QuickStoryResult, RawCompletion, ScriptRequest, ScriptResult,
    StructuredStoryRequest, StructuredStoryResult, SuggestionSource,
};
use storyforge_error::StoryforgeResult;
use storyforge_interface::CompletionDriver;
use storyforge_security::{Domain, InputClassifier};
use tracing::{debug, info, instrument, warn};

/// Runs generation requests against a completion driver.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storyforge_models::{OracleClient, OracleConfig};
/// use storyforge_narrative::StoryGenerator;
///
/// let driver = OracleClient::new(OracleConfig::default())?;
/// let generator = StoryGenerator::new(Arc::new(driver));
/// let batch = generator.prompt_suggestions().await;
/// ```
#[derive(Clone)]
pub struct StoryGenerator {
    driver: Arc<dyn CompletionDriver>,
    classifier: InputClassifier,
    builder: PromptBuilder,
}

impl std::fmt::Debug for StoryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("builder", &self.builder)
            .finish()
    }
}

impl StoryGenerator {
    /// Creates a generator with the default classifier and prompt builder.
    pub fn new(driver: Arc<dyn CompletionDriver>) -> Self {
        Self {
            driver,
            classifier: InputClassifier::default(),
            builder: PromptBuilder::default(),
        }
    }

    /// Replaces the input classifier.
    pub fn with_classifier(mut self, classifier: InputClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the prompt builder.
    pub fn with_builder(mut self, builder: PromptBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// The completion driver in use.
    pub fn driver(&self) -> &Arc<dyn CompletionDriver> {
        &self.driver
    }

    /// Dispatches on the request kind.
    ///
    /// Suggestion requests never fail.
    ///
    /// # Errors
    ///
    /// See the per-kind methods.
    pub async fn generate(&self, request: &GenerationRequest) -> StoryforgeResult<GenerationResult> {
        match request {
            GenerationRequest::QuickStory(r) => self.quick_story(r).await.map(Into::into),
            GenerationRequest::StructuredStory(r) => {
                self.structured_story(r).await.map(Into::into)
            }
            GenerationRequest::Script(r) => self.script(r).await.map(Into::into),
            GenerationRequest::PromptSuggestions(_) => Ok(self.prompt_suggestions().await.into()),
        }
    }

    /// Writes a free-text story from a one-line prompt.
    ///
    /// # Errors
    ///
    /// Request and input errors before the oracle call; gateway and
    /// `EmptyOutput` errors after it.
    #[instrument(skip(self, request), fields(prompt_len = request.prompt.len()))]
    pub async fn quick_story(&self, request: &QuickStoryRequest) -> StoryforgeResult<QuickStoryResult> {
        let wrapped = GenerationRequest::from(request.clone());
        wrapped.validate()?;
        self.classifier.check(&request.prompt, Domain::Story)?;
        let completion = self.complete(&wrapped).await?;
        let result = extract_quick_story(&completion)?;
        info!(chars = result.story.len(), "Quick story generated");
        Ok(result)
    }

    /// Writes a titled story from picker selections.
    ///
    /// # Errors
    ///
    /// `EmptyField` and `UnknownGenre` before the oracle call; gateway and
    /// `UnparsableOutput` errors after it.
    #[instrument(skip(self, request), fields(template = %request.template, kids_mode = request.kids_mode))]
    pub async fn structured_story(
        &self,
        request: &StructuredStoryRequest,
    ) -> StoryforgeResult<StructuredStoryResult> {
        let wrapped = GenerationRequest::from(request.clone());
        wrapped.validate()?;
        let completion = self.complete(&wrapped).await?;
        let result = extract_structured_story(&completion)?;
        info!(
            chars = result.story.len(),
            has_moral = result.moral.is_some(),
            "Structured story generated"
        );
        Ok(result)
    }

    /// Writes a screenplay.
    ///
    /// # Errors
    ///
    /// Request and input errors before the oracle call; gateway,
    /// `EmptyOutput` and `NotAScriptFormat` errors after it.
    #[instrument(skip(self, request), fields(script_type = %request.script_type, genre = %request.genre))]
    pub async fn script(&self, request: &ScriptRequest) -> StoryforgeResult<ScriptResult> {
        let wrapped = GenerationRequest::from(request.clone());
        wrapped.validate()?;
        self.classifier.check(&request.premise, Domain::Script)?;
        let completion = self.complete(&wrapped).await?;
        let result = extract_script(&completion)?;
        info!(
            chars = result.script.len(),
            truncated = result.truncated,
            "Script generated"
        );
        Ok(result)
    }

    /// Returns six story ideas, from the oracle when possible.
    ///
    /// A missing credential skips the oracle entirely. Transport and parse
    /// failures are logged and replaced with [`fallback_prompts`].
    #[instrument(skip(self))]
    pub async fn prompt_suggestions(&self) -> PromptSuggestionResult {
        if !self.driver.has_credential() {
            debug!("No credential configured, serving fallback suggestions");
            return fallback();
        }

        let request = GenerationRequest::from(PromptSuggestionRequest::default());
        let outcome = self
            .complete(&request)
            .await
            .and_then(|completion| Ok(extract_suggestions(&completion)?));

        match outcome {
            Ok(items) => {
                info!(count = items.len(), "Suggestions generated");
                PromptSuggestionResult {
                    items,
                    source: SuggestionSource::Oracle,
                }
            }
            Err(e) => {
                warn!(error = %e.message(), "Suggestion generation failed, serving fallback");
                fallback()
            }
        }
    }

    async fn complete(&self, request: &GenerationRequest) -> StoryforgeResult<RawCompletion> {
        let prompt = self.builder.build(request)?;
        let completion = self.driver.complete(&prompt).await?;
        debug!(
            kind = %request.kind(),
            stop_reason = %completion.stop_reason,
            "Completion received"
        );
        Ok(completion)
    }
}

fn fallback() -> PromptSuggestionResult {
    PromptSuggestionResult {
        items: fallback_prompts(),
        source: SuggestionSource::Fallback,
    }
}
