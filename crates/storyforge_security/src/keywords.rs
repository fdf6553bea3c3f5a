//! Static keyword sets and narrative cue patterns.

use regex::Regex;
use std::sync::LazyLock;

/// Terms that mark a request as something other than fiction.
pub(crate) const BLOCKED_KEYWORDS: &[&str] = &[
    "code",
    "program",
    "recipe",
    "essay",
    "article",
    "blog",
    "tutorial",
    "instructions",
    "guide",
    "math",
    "calculate",
    "solve",
    "translate",
    "summarize",
    "explain",
    "define",
    "how to",
    "what is",
    "homework",
];

pub(crate) const STORY_KEYWORDS: &[&str] = &[
    "story",
    "tale",
    "character",
    "plot",
    "hero",
    "villain",
    "quest",
    "legend",
    "fable",
    "myth",
    "fairy",
    "kingdom",
    "dragon",
    "wizard",
    "detective",
    "princess",
    "once upon",
    "narrative",
];

pub(crate) const SCRIPT_KEYWORDS: &[&str] = &[
    "script",
    "screenplay",
    "scene",
    "dialogue",
    "character",
    "plot",
    "story",
    "film",
    "movie",
    "tv",
    "episode",
    "drama",
    "comedy",
    "action",
    "thriller",
    "horror",
    "romance",
    "sci-fi",
    "fantasy",
    "write",
    "create",
    "generate",
    "develop",
    "short",
    "feature",
];

/// Connector words that suggest a premise ("about", "meets", "discovers").
pub(crate) static SCRIPT_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(about|where|when|who|two|three|meets|discovers|finds|escapes|fights|loves|hates|journey|adventure|conflict)\b",
    )
    .expect("Valid script cue regex")
});

/// Script cues plus descriptive adjectives common in story prompts.
pub(crate) static STORY_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(about|where|when|who|two|three|meets|discovers|finds|escapes|fights|loves|hates|journey|adventure|conflict|magical|ancient|hidden|mysterious|secret|haunted|enchanted|forgotten|lost|brave|cursed)\b",
    )
    .expect("Valid story cue regex")
});
