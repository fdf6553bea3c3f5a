//! Local prompt suggestions for when the oracle cannot supply them.

use crate::SUGGESTION_BATCH_SIZE;
use rand::{Rng, seq::SliceRandom};
use storyforge_core::PromptSuggestion;

/// Static suggestion pool, `(title, description)`.
pub const FALLBACK_POOL: [(&str, &str); 10] = [
    (
        "The Lost Key",
        "A mysterious key appears on your doorstep, opening doors to parallel worlds and forgotten memories.",
    ),
    (
        "Midnight Train",
        "A train that only appears at midnight takes passengers to their most cherished or painful memories.",
    ),
    (
        "The Painter",
        "An artist discovers their paintings predict the future, but each painting costs them a memory.",
    ),
    (
        "Silent Library",
        "In a library where books whisper secrets, one book calls your name with a warning.",
    ),
    (
        "Time's Echo",
        "You wake up to find you're living the same day, but each time something small changes.",
    ),
    (
        "The Last Star",
        "Humanity's last hope rests on a ship traveling to a dying star that holds ancient power.",
    ),
    (
        "Mirror World",
        "Your reflection starts moving independently, trying to tell you something urgent about your life.",
    ),
    (
        "The Garden",
        "A hidden garden appears only to those who need it most, offering healing and impossible choices.",
    ),
    (
        "Forgotten Song",
        "A melody no one remembers holds the key to unlocking a world that was erased from history.",
    ),
    (
        "Shadow Walker",
        "You discover you can step into shadows and travel anywhere, but something follows you back.",
    ),
];

/// Six distinct suggestions drawn at random from [`FALLBACK_POOL`].
///
/// Each call draws a fresh sample.
///
/// # Examples
///
/// ```
/// let batch = storyforge_narrative::fallback_prompts();
/// assert_eq!(batch.len(), 6);
/// ```
pub fn fallback_prompts() -> Vec<PromptSuggestion> {
    fallback_prompts_with(&mut rand::thread_rng())
}

/// Like [`fallback_prompts`], drawing from the given random source.
pub fn fallback_prompts_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<PromptSuggestion> {
    FALLBACK_POOL
        .choose_multiple(rng, SUGGESTION_BATCH_SIZE)
        .map(|(title, description)| PromptSuggestion::new(*title, *description))
        .collect()
}
