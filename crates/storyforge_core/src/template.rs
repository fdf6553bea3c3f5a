//! Story genre templates and the policy for unknown genres.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storyforge_error::{RequestError, RequestErrorKind};

/// Story genres with a dedicated style guide.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoryTemplate {
    /// Magical and whimsical
    #[default]
    Fantasy,
    /// Dark and suspenseful
    Horror,
    /// Humorous and lighthearted
    Comedy,
    /// Futuristic and imaginative
    #[strum(to_string = "scifi", serialize = "sci-fi")]
    Scifi,
    /// Exciting and action-packed
    Adventure,
    /// Intriguing and puzzling
    Mystery,
}

/// What to do with a story genre that has no style guide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenrePolicy {
    /// Fall back to the fantasy style
    #[default]
    Permissive,
    /// Reject with `UnknownGenre`
    Strict,
}

impl StoryTemplate {
    /// Resolves a genre name under the given policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyforge_core::{GenrePolicy, StoryTemplate};
    ///
    /// let resolved = StoryTemplate::resolve("western", GenrePolicy::Permissive).unwrap();
    /// assert_eq!(resolved, StoryTemplate::Fantasy);
    /// assert!(StoryTemplate::resolve("western", GenrePolicy::Strict).is_err());
    /// ```
    pub fn resolve(name: &str, policy: GenrePolicy) -> Result<Self, RequestError> {
        match (Self::from_str(name.trim()), policy) {
            (Ok(template), _) => Ok(template),
            (Err(_), GenrePolicy::Permissive) => Ok(Self::default()),
            (Err(_), GenrePolicy::Strict) => Err(RequestError::new(
                RequestErrorKind::UnknownGenre(name.to_string()),
            )),
        }
    }

    /// Style descriptor embedded in the story prompt.
    pub fn style_guide(self) -> &'static str {
        match self {
            Self::Fantasy => "magical and whimsical, with enchanting descriptions",
            Self::Horror => "dark and suspenseful, with eerie atmosphere",
            Self::Comedy => "humorous and lighthearted, with witty dialogue",
            Self::Scifi => "futuristic and imaginative, with advanced technology",
            Self::Adventure => "exciting and action-packed, with daring exploits",
            Self::Mystery => "intriguing and puzzling, with clever twists",
        }
    }

    /// Cover colour pair (gradient start, gradient end) for story cards.
    pub fn cover_gradient(self) -> (&'static str, &'static str) {
        match self {
            Self::Fantasy => ("purple-600", "pink-600"),
            Self::Horror => ("gray-800", "black"),
            Self::Comedy => ("yellow-500", "orange-500"),
            Self::Scifi => ("blue-600", "purple-600"),
            Self::Adventure => ("green-600", "teal-600"),
            Self::Mystery => ("indigo-700", "purple-800"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_known_genres_resolve_strictly() {
        for template in StoryTemplate::iter() {
            let resolved = StoryTemplate::resolve(&template.to_string(), GenrePolicy::Strict);
            assert_eq!(resolved.unwrap(), template);
        }
    }

    #[test]
    fn test_sci_fi_alias() {
        assert_eq!(
            StoryTemplate::resolve("Sci-Fi", GenrePolicy::Strict).unwrap(),
            StoryTemplate::Scifi
        );
    }

    #[test]
    fn test_unknown_genre_uses_fantasy_style() {
        let template = StoryTemplate::resolve("noir", GenrePolicy::Permissive).unwrap();
        assert_eq!(template.style_guide(), StoryTemplate::Fantasy.style_guide());
        assert_eq!(template.cover_gradient(), ("purple-600", "pink-600"));
    }
}
