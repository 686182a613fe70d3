//! Chat message roles.

use serde::{Deserialize, Serialize};

/// Roles understood by OpenAI-compatible chat endpoints.
///
/// # Examples
///
/// ```
/// use promptcraft_core::Role;
///
/// assert_eq!(Role::System.to_string(), "system");
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
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    System,
    /// The human's turn
    User,
    /// The model's turn
    Assistant,
}
