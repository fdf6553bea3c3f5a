//! Input classifier rejections.

/// Reasons free-text input is turned away before any oracle call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// Trimmed input is shorter than the minimum length
    #[display(
        "Please provide a more detailed premise (at least {} characters, got {})",
        minimum,
        actual
    )]
    TooShort {
        /// Minimum accepted length in characters
        minimum: usize,
        /// Length of the trimmed input in characters
        actual: usize,
    },

    /// Input contains a term that marks it as off-domain
    #[display(
        "Request looks off-domain (matched '{}'). Please describe a story premise, characters, or a scene idea",
        _0
    )]
    OffDomainKeyword(String),

    /// Input does not look like content for the requested domain
    #[display(
        "Input was not recognized as {} content. Please describe characters, a setting, or a conflict",
        _0
    )]
    NotRecognized(String),
}

/// Input rejection with location tracking.
///
/// # Examples
///
/// ```
/// use storyforge_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::TooShort { minimum: 10, actual: 5 });
/// assert!(format!("{}", err).contains("at least 10"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Rejected: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The rejection reason
    pub kind: InputErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
