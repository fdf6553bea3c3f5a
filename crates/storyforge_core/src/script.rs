//! Script types and their length profiles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storyforge_error::{RequestError, RequestErrorKind};

/// The four supported script formats.
///
/// Parsing is strict: an unrecognized value is an error, never a default.
///
/// # Examples
///
/// ```
/// use storyforge_core::ScriptType;
///
/// assert_eq!(ScriptType::parse("TV").unwrap(), ScriptType::Tv);
/// assert!(ScriptType::parse("opera").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScriptType {
    /// Short film, beat structure
    Short,
    /// Single scene
    Scene,
    /// Three-act feature film
    Feature,
    /// Multi-act TV episode with cold open and tag
    Tv,
}

impl ScriptType {
    /// Parses a script type, failing with `UnknownScriptType` on anything else.
    pub fn parse(value: &str) -> Result<Self, RequestError> {
        Self::from_str(value.trim()).map_err(|_| {
            RequestError::new(RequestErrorKind::UnknownScriptType(value.to_string()))
        })
    }

    /// The length profile for this script type.
    pub fn profile(self) -> &'static LengthProfile {
        match self {
            Self::Short => &SHORT,
            Self::Scene => &SCENE,
            Self::Feature => &FEATURE,
            Self::Tv => &TV,
        }
    }
}

/// Page target, format template and token budget for one script type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct LengthProfile {
    page_range: &'static str,
    description: &'static str,
    format_guidance: &'static str,
    length_requirement: &'static str,
    max_output_tokens: u32,
}

impl LengthProfile {
    /// Looks up a profile by script type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_core::LengthProfile;
    ///
    /// let profile = LengthProfile::lookup("scene").unwrap();
    /// assert_eq!(*profile.max_output_tokens(), 1500);
    /// assert!(LengthProfile::lookup("musical").is_err());
    /// ```
    pub fn lookup(script_type: &str) -> Result<&'static LengthProfile, RequestError> {
        ScriptType::parse(script_type).map(ScriptType::profile)
    }
}

static SHORT: LengthProfile = LengthProfile {
    page_range: "5-10 pages (approximately 5-10 minutes)",
    description: "short film (5-10 pages, approximately 5-10 minutes of screen time)",
    format_guidance: "\
Follow standard screenplay format:
- Scene headings (INT./EXT. LOCATION - TIME)
- Action lines (present tense, concise)
- Character names (centered, uppercase)
- Dialogue (centered under character name)
- Parentheticals for tone/action during dialogue
- Transitions (CUT TO:, FADE TO:, etc.)

CRITICAL: Write the COMPLETE script from beginning to end. Do not summarize or abbreviate. \
Include ALL scenes, ALL dialogue, and ALL action lines needed to tell the full story.",
    length_requirement: "Write a complete 5-10 page short film. Every scene must be fully developed with complete dialogue.",
    max_output_tokens: 3000,
};

static SCENE: LengthProfile = LengthProfile {
    page_range: "2-5 pages (single scene, 2-5 minutes)",
    description: "single scene (2-5 pages)",
    format_guidance: "\
Write a complete single scene with:
- Clear scene heading
- Vivid action descriptions
- Natural, character-driven dialogue
- Emotional beats and subtext

CRITICAL: Write the ENTIRE scene with full dialogue and action. Do not cut corners or summarize.",
    length_requirement: "Write the full scene from its opening heading to its final beat.",
    max_output_tokens: 1500,
};

static FEATURE: LengthProfile = LengthProfile {
    page_range: "Full feature film script (90-120 pages)",
    description: "FULL-LENGTH feature film (90-120 pages, approximately 90-120 minutes)",
    format_guidance: "\
Create a complete feature film structure with:
- ACT I: Setup and inciting incident (pages 1-30)
- ACT II: Rising action and midpoint (pages 30-90)
- ACT III: Climax and resolution (pages 90-120)
- Include major plot points and character arcs

CRITICAL: This must be a FULL-LENGTH feature script. Write every scene, every line of dialogue, \
every action beat. Do NOT summarize or skip ahead. Write the complete screenplay from FADE IN to FADE OUT.",
    length_requirement: "This MUST be a full-length feature film script of 90-120 pages. Write the ENTIRE movie \
from FADE IN to FADE OUT. Include every scene, every conversation, every moment.",
    max_output_tokens: 30000,
};

static TV: LengthProfile = LengthProfile {
    page_range: "TV episode script (22-44 pages based on format)",
    description: "complete TV episode (22-44 pages based on format)",
    format_guidance: "\
Follow TV episode structure:
- Teaser/Cold open (2-3 pages)
- Act 1 (8-10 pages)
- Act 2 (8-10 pages)
- Act 3 (8-10 pages)
- Act 4 if needed (6-8 pages)
- Tag/epilogue (1-2 pages)
- Act breaks on cliffhangers
- Full commercial break structure

CRITICAL: Write the COMPLETE episode from start to finish with all acts fully developed. \
Include ALL dialogue and scenes. Do not skip or abbreviate.",
    length_requirement: "This MUST be a complete TV episode of 22-44 pages with all acts fully written out. \
Do not skip or abbreviate any content.",
    max_output_tokens: 12000,
};
