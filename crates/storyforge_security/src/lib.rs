//! Domain-relevance gate for free-text user input.
//!
//! Before a prompt reaches the completion oracle, the [`InputClassifier`]
//! decides whether it looks like story or script material. The decision is a
//! keyword heuristic: false accepts and false rejects are expected. Its job is
//! to avoid wasted oracle calls and to give the user fast feedback.
//!
//! # Example
//!
//! ```
//! use storyforge_security::{ClassifierConfig, Domain, InputClassifier};
//!
//! let classifier = InputClassifier::new(ClassifierConfig::default());
//!
//! assert!(classifier
//!     .classify("A lonely knight discovers a hidden village", Domain::Story)
//!     .is_accepted());
//! assert!(!classifier
//!     .classify("Solve this math homework for me", Domain::Story)
//!     .is_accepted());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classifier;
mod keywords;

pub use classifier::{ClassifierConfig, Domain, InputClassifier, Verdict};
