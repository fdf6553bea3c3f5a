//! Top-level error wrapper types.

use crate::{
    ConfigError, ExtractionError, GatewayError, GatewayErrorKind, InputError, JsonError,
    RequestError, ServerError, StorageError,
};

/// Every failure the storyforge pipeline can surface.
///
/// # Examples
///
/// ```
/// use storyforge_error::{StoryforgeError, RequestError, RequestErrorKind};
///
/// let err: StoryforgeError =
///     RequestError::new(RequestErrorKind::UnknownScriptType("opera".into())).into();
/// assert!(err.is_user_correctable());
/// assert!(err.message().contains("opera"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryforgeErrorKind {
    /// Input classifier turned the text away
    #[from(InputError)]
    Input(InputError),
    /// Request parameters failed boundary validation
    #[from(RequestError)]
    Request(RequestError),
    /// Completion gateway failed (credential or transport)
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Oracle output could not be turned into a result
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Saved-story storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Storyforge error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyforge Error: {}", _0)]
pub struct StoryforgeError(Box<StoryforgeErrorKind>);

impl StoryforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryforgeErrorKind {
        &self.0
    }

    /// Human-readable message without source location, suitable for end users.
    pub fn message(&self) -> String {
        match self.kind() {
            StoryforgeErrorKind::Input(e) => e.kind.to_string(),
            StoryforgeErrorKind::Request(e) => e.kind.to_string(),
            StoryforgeErrorKind::Gateway(e) => e.kind.to_string(),
            StoryforgeErrorKind::Extraction(e) => e.kind.to_string(),
            StoryforgeErrorKind::Storage(e) => e.kind.to_string(),
            StoryforgeErrorKind::Server(e) => e.kind.to_string(),
            StoryforgeErrorKind::Config(e) => e.message.clone(),
            StoryforgeErrorKind::Json(e) => e.message.clone(),
        }
    }

    /// True when repeating the same request later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            StoryforgeErrorKind::Gateway(e) => e.kind.is_retryable(),
            _ => false,
        }
    }

    /// True when the caller can fix the failure by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self.kind(),
            StoryforgeErrorKind::Input(_) | StoryforgeErrorKind::Request(_)
        )
    }

    /// True when the credential for the oracle is absent.
    pub fn is_missing_credential(&self) -> bool {
        matches!(
            self.kind(),
            StoryforgeErrorKind::Gateway(GatewayError {
                kind: GatewayErrorKind::MissingCredential(_),
                ..
            })
        )
    }
}

// Generic From implementation for any type that converts to StoryforgeErrorKind
impl<T> From<T> for StoryforgeError
where
    T: Into<StoryforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyforge operations.
pub type StoryforgeResult<T> = std::result::Result<T, StoryforgeError>;
