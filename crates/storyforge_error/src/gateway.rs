//! Completion gateway errors.

/// Failures reaching or talking to the completion oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// No credential configured; checked before any request is sent
    #[display("Server configuration error: credential {} is not set", _0)]
    MissingCredential(String),

    /// Oracle could not be reached (connect, TLS, timeout)
    #[display("Completion service unreachable: {}", _0)]
    Unreachable(String),

    /// Oracle answered with a non-success status
    #[display("Completion service error: {}", status)]
    Status {
        /// Upstream HTTP status code
        status: u16,
        /// Upstream response body, for diagnostics
        body: String,
    },

    /// Assembled prompt could not be turned into a wire request
    #[display("Could not build completion request: {}", _0)]
    RequestConversion(String),

    /// Oracle answered 2xx with a body that is not a completion
    #[display("Malformed completion response: {}", _0)]
    MalformedResponse(String),
}

impl GatewayErrorKind {
    /// True for transport conditions worth retrying at the request level.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unreachable(_) => true,
            Self::Status { status, .. } => matches!(status, 408 | 429 | 500..=599),
            Self::MissingCredential(_)
            | Self::RequestConversion(_)
            | Self::MalformedResponse(_) => false,
        }
    }
}

/// Gateway error with location tracking.
///
/// # Examples
///
/// ```
/// use storyforge_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Status { status: 503, body: String::new() });
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The error kind
    pub kind: GatewayErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
