//! Response extraction errors.

/// Oracle output that does not fit the expected shape or content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// Oracle returned blank text
    #[display("No content returned from the completion service")]
    EmptyOutput,

    /// Neither strict parsing nor field recovery produced the expected record
    #[display("Could not parse response: {}", _0)]
    UnparsableOutput(String),

    /// Script text has no scene heading or transition markers
    #[display(
        "The generated content doesn't appear to be a properly formatted script. Please try again with a clear story premise"
    )]
    NotAScriptFormat,
}

/// Extraction error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The error kind
    pub kind: ExtractionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
