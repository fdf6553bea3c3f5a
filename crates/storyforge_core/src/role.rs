//! Role types for chat messages.

use serde::{Deserialize, Serialize};

/// Author of a chat message sent to the oracle.
///
/// # Examples
///
/// ```
/// use storyforge_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages carry standing instructions
    #[display("system")]
    System,
    /// User messages carry the request itself
    #[display("user")]
    User,
    /// Assistant messages are produced by the oracle
    #[display("assistant")]
    Assistant,
}
