//! Route handlers.

use crate::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use storyforge_core::{
    PromptSuggestion, QuickStoryRequest, QuickStoryResult, SavedStory, ScriptRequest, ScriptType,
    StructuredStoryRequest, StructuredStoryResult,
};
use storyforge_error::StoryforgeError;
use storyforge_interface::StoryStore;
use storyforge_narrative::StoryGenerator;
use tracing::instrument;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<StoryGenerator>,
    store: Arc<dyn StoryStore>,
}

impl AppState {
    /// Creates handler state from a generator and a saved-story store.
    pub fn new(generator: Arc<StoryGenerator>, store: Arc<dyn StoryStore>) -> Self {
        Self { generator, store }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate-quick-story", post(generate_quick_story))
        .route("/api/generate-story", post(generate_story))
        .route("/api/generate-script", post(generate_script))
        .route("/api/generate-prompts", get(generate_prompts))
        .route("/api/stories", get(list_stories).post(save_story))
        // Wildcard so titles containing `/` stay addressable
        .route("/api/stories/*title", get(get_story).delete(delete_story))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct QuickStoryPayload {
    prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryPayload {
    character: Option<String>,
    setting: Option<String>,
    twist: Option<String>,
    template: Option<String>,
    #[serde(default)]
    kids_mode: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScriptPayload {
    prompt: Option<String>,
    script_type: Option<String>,
    genre: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptResponse {
    script: String,
    truncated: bool,
    finish_reason: String,
}

/// `Some` only for a present, non-blank value.
fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let driver = state.generator.driver();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "model": driver.model_name(),
            "credential": driver.has_credential(),
        })),
    )
}

#[instrument(skip_all)]
async fn generate_quick_story(
    State(state): State<AppState>,
    payload: Result<Json<QuickStoryPayload>, JsonRejection>,
) -> Result<Json<QuickStoryResult>, ApiError> {
    let Json(payload) = payload?;
    let prompt = filled(payload.prompt).ok_or_else(|| ApiError::bad_request("Missing prompt"))?;

    let result = state
        .generator
        .quick_story(&QuickStoryRequest::new(prompt))
        .await?;
    Ok(Json(result))
}

#[instrument(skip_all)]
async fn generate_story(
    State(state): State<AppState>,
    payload: Result<Json<StoryPayload>, JsonRejection>,
) -> Result<Json<StructuredStoryResult>, ApiError> {
    let Json(payload) = payload?;
    let missing = || ApiError::bad_request("Missing required fields");

    let request = StructuredStoryRequest {
        character: filled(payload.character).ok_or_else(missing)?,
        setting: filled(payload.setting).ok_or_else(missing)?,
        twist: filled(payload.twist).ok_or_else(missing)?,
        template: filled(payload.template).ok_or_else(missing)?,
        kids_mode: payload.kids_mode,
    };

    let result = state.generator.structured_story(&request).await?;
    Ok(Json(result))
}

#[instrument(skip_all)]
async fn generate_script(
    State(state): State<AppState>,
    payload: Result<Json<ScriptPayload>, JsonRejection>,
) -> Result<Json<ScriptResponse>, ApiError> {
    let Json(payload) = payload?;
    let missing = || ApiError::bad_request("Missing required fields: prompt, scriptType, or genre");

    let premise = filled(payload.prompt).ok_or_else(missing)?;
    let script_type = filled(payload.script_type).ok_or_else(missing)?;
    let genre = filled(payload.genre).ok_or_else(missing)?;

    let request = ScriptRequest {
        premise,
        script_type: ScriptType::parse(&script_type).map_err(StoryforgeError::from)?,
        genre,
    };

    let result = state.generator.script(&request).await?;
    Ok(Json(ScriptResponse {
        script: result.script,
        truncated: result.truncated,
        finish_reason: result.finish_reason,
    }))
}

#[instrument(skip_all)]
async fn generate_prompts(State(state): State<AppState>) -> Json<Vec<PromptSuggestion>> {
    let result = state.generator.prompt_suggestions().await;
    tracing::debug!(source = %result.source, count = result.items.len(), "Serving suggestions");
    Json(result.items)
}

async fn list_stories(State(state): State<AppState>) -> Result<Json<Vec<SavedStory>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

async fn get_story(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<SavedStory>, ApiError> {
    state
        .store
        .get(&title)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Story not found"))
}

#[instrument(skip_all)]
async fn save_story(
    State(state): State<AppState>,
    payload: Result<Json<SavedStory>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(story) = payload?;
    if story.title.trim().is_empty() || story.story.trim().is_empty() {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let created = state.store.save(story).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(json!({ "created": created }))))
}

async fn delete_story(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&title).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Story not found"))
    }
}
