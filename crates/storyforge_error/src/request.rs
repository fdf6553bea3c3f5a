//! Request validation errors raised at the boundary.

/// Malformed or unsupported request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// Script type outside the supported set
    #[display("Unknown script type '{}' (expected short, scene, feature, or tv)", _0)]
    UnknownScriptType(String),

    /// Story genre outside the supported set under the strict genre policy
    #[display("Unknown story genre '{}'", _0)]
    UnknownGenre(String),

    /// Required field is missing or blank
    #[display("Missing required field: {}", _0)]
    EmptyField(String),
}

/// Request validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The error kind
    pub kind: RequestErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
