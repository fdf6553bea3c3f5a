//! Test utilities for storyforge server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use storyforge_core::{CompletionRequest, RawCompletion};
use storyforge_error::{GatewayError, GatewayErrorKind, StoryforgeResult};
use storyforge_interface::CompletionDriver;
use storyforge_narrative::StoryGenerator;
use storyforge_server::{AppState, create_router};
use storyforge_storage::InMemoryStoryStore;

/// Canned oracle behaviour.
#[derive(Debug, Clone)]
pub enum Canned {
    /// Reply with text and a finish reason
    Reply(String, &'static str),
    /// Fail with an upstream status
    Status(u16),
    /// No credential configured
    NoCredential,
}

/// Completion driver with one canned behaviour and a call counter.
#[derive(Debug, Clone)]
pub struct MockDriver {
    canned: Canned,
    call_count: Arc<AtomicUsize>,
}

impl MockDriver {
    /// Creates a driver with the given behaviour.
    pub fn new(canned: Canned) -> Self {
        Self {
            canned,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Driver replying `text` with a natural stop.
    pub fn replying(text: &str) -> Self {
        Self::new(Canned::Reply(text.to_string(), "stop"))
    }

    /// Number of `complete` calls made.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, _request: &CompletionRequest) -> StoryforgeResult<RawCompletion> {
        match &self.canned {
            Canned::NoCredential => Err(GatewayError::new(GatewayErrorKind::MissingCredential(
                "GROQ_API_KEY".to_string(),
            ))
            .into()),
            Canned::Reply(text, finish) => {
                self.call_count.fetch_add(1, Ordering::SeqCst);
                Ok(RawCompletion::new(text.clone(), Some(finish)))
            }
            Canned::Status(status) => {
                self.call_count.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::new(GatewayErrorKind::Status {
                    status: *status,
                    body: "upstream detail".to_string(),
                })
                .into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn has_credential(&self) -> bool {
        !matches!(self.canned, Canned::NoCredential)
    }
}

/// Serves the API on an ephemeral port; returns its base URL.
pub async fn spawn_app(driver: MockDriver) -> anyhow::Result<String> {
    let generator = Arc::new(StoryGenerator::new(Arc::new(driver)));
    let state = AppState::new(generator, Arc::new(InMemoryStoryStore::new()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.ok();
    });
    Ok(format!("http://{}", addr))
}
