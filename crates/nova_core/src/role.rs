//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
///
/// System instructions are not a role in the Converse API; they travel in a
/// separate field ahead of the turns.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
