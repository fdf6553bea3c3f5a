//! Keyword classifier for story and script input.

use crate::keywords::{BLOCKED_KEYWORDS, SCRIPT_CUES, SCRIPT_KEYWORDS, STORY_CUES, STORY_KEYWORDS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use storyforge_error::{InputError, InputErrorKind};
use tracing::{debug, instrument};

/// Content domain the input is checked against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Domain {
    /// Prose fiction
    Story,
    /// Screenplays and scenes
    Script,
}

/// Classifier configuration.
///
/// Extra keywords are added to the built-in sets, never replace them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Inputs shorter than this (trimmed, in characters) are rejected outright
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Narrative cues only count for inputs longer than this
    #[serde(default = "default_cue_min_length")]
    pub cue_min_length: usize,

    /// Additional off-domain terms
    #[serde(default)]
    pub blocked_keywords: Vec<String>,

    /// Additional story terms
    #[serde(default)]
    pub story_keywords: Vec<String>,

    /// Additional script terms
    #[serde(default)]
    pub script_keywords: Vec<String>,
}

fn default_min_length() -> usize {
    10
}

fn default_cue_min_length() -> usize {
    20
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            cue_min_length: default_cue_min_length(),
            blocked_keywords: vec![],
            story_keywords: vec![],
            script_keywords: vec![],
        }
    }
}

/// Outcome of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Looks like domain content
    Accepted,
    /// Turned away, with the reason
    Rejected(InputErrorKind),
}

impl Verdict {
    /// True for [`Verdict::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Converts a rejection into an [`InputError`].
    #[track_caller]
    pub fn into_result(self) -> Result<(), InputError> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(kind) => Err(InputError::new(kind)),
        }
    }
}

/// Decides whether free text is story or script material.
///
/// Rules, in order:
/// 1. Trimmed input shorter than `min_length` is too short.
/// 2. Any off-domain term rejects.
/// 3. Any domain term accepts.
/// 4. A narrative cue accepts when the input is longer than `cue_min_length`.
/// 5. Everything else is not recognized.
///
/// Matching is case-insensitive substring matching for keywords and
/// whole-word matching for cues.
#[derive(Debug, Clone)]
pub struct InputClassifier {
    config: ClassifierConfig,
    blocked: Vec<String>,
    story: Vec<String>,
    script: Vec<String>,
}

impl InputClassifier {
    /// Create a classifier with the built-in keyword sets plus any configured extras.
    pub fn new(config: ClassifierConfig) -> Self {
        let blocked = merge(BLOCKED_KEYWORDS, &config.blocked_keywords);
        let story = merge(STORY_KEYWORDS, &config.story_keywords);
        let script = merge(SCRIPT_KEYWORDS, &config.script_keywords);
        Self {
            config,
            blocked,
            story,
            script,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies `text` against `domain`.
    #[instrument(skip(self, text), fields(text_len = text.len(), domain = %domain))]
    pub fn classify(&self, text: &str, domain: Domain) -> Verdict {
        let trimmed = text.trim();
        let length = trimmed.chars().count();

        if length < self.config.min_length {
            debug!(length, "Input too short");
            return Verdict::Rejected(InputErrorKind::TooShort {
                minimum: self.config.min_length,
                actual: length,
            });
        }

        let lowered = trimmed.to_lowercase();

        if let Some(term) = self.blocked.iter().find(|term| lowered.contains(term.as_str())) {
            debug!(term = %term, "Input matched off-domain keyword");
            return Verdict::Rejected(InputErrorKind::OffDomainKeyword(term.clone()));
        }

        let allowed = match domain {
            Domain::Story => &self.story,
            Domain::Script => &self.script,
        };
        if allowed.iter().any(|term| lowered.contains(term.as_str())) {
            debug!("Input matched domain keyword");
            return Verdict::Accepted;
        }

        if length > self.config.cue_min_length && cues(domain).is_match(trimmed) {
            debug!("Input matched narrative cue");
            return Verdict::Accepted;
        }

        debug!("Input not recognized");
        Verdict::Rejected(InputErrorKind::NotRecognized(domain.to_string()))
    }

    /// Classifies and converts a rejection into an [`InputError`].
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the input is not accepted.
    pub fn check(&self, text: &str, domain: Domain) -> Result<(), InputError> {
        self.classify(text, domain).into_result()
    }
}

impl Default for InputClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

fn cues(domain: Domain) -> &'static Regex {
    match domain {
        Domain::Story => &STORY_CUES,
        Domain::Script => &SCRIPT_CUES,
    }
}

fn merge(builtin: &[&str], extra: &[String]) -> Vec<String> {
    builtin
        .iter()
        .map(|term| term.to_string())
        .chain(
            extra
                .iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty()),
        )
        .collect()
}
