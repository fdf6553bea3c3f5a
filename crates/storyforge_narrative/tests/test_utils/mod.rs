//! Test utilities for storyforge narrative tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use storyforge_core::{CompletionRequest, RawCompletion};
use storyforge_error::{GatewayError, GatewayErrorKind, StoryforgeResult};
use storyforge_interface::CompletionDriver;

/// Scripted reply for one call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text with this finish reason
    Text(String, &'static str),
    /// Fail with an upstream status
    Status(u16),
    /// Fail as if the oracle could not be reached
    Unreachable,
}

/// Completion driver that replays scripted replies and counts calls.
#[derive(Debug, Clone)]
pub struct MockDriver {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    call_count: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<CompletionRequest>>>,
    credential: bool,
}

impl MockDriver {
    /// Driver that returns `text` with a natural stop on every call.
    pub fn always(text: &str) -> Self {
        Self::new(vec![MockReply::Text(text.to_string(), "stop")])
    }

    /// Driver that replays `replies` in order, repeating the last one.
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
            credential: true,
        }
    }

    /// Driver with no credential configured.
    pub fn without_credential() -> Self {
        Self {
            credential: false,
            ..Self::new(vec![])
        }
    }

    /// Number of `complete` calls made.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The most recent prompt sent.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, request: &CompletionRequest) -> StoryforgeResult<RawCompletion> {
        if !self.credential {
            return Err(GatewayError::new(GatewayErrorKind::MissingCredential(
                "GROQ_API_KEY".to_string(),
            ))
            .into());
        }

        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.pop_front()
            } else {
                replies.front().cloned()
            }
        };

        match reply {
            Some(MockReply::Text(text, finish)) => Ok(RawCompletion::new(text, Some(finish))),
            Some(MockReply::Status(status)) => Err(GatewayError::new(GatewayErrorKind::Status {
                status,
                body: String::new(),
            })
            .into()),
            Some(MockReply::Unreachable) | None => Err(GatewayError::new(
                GatewayErrorKind::Unreachable("connection refused".to_string()),
            )
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn has_credential(&self) -> bool {
        self.credential
    }
}
