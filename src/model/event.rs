//! Notification payloads emitted by the resolution pipeline.

use serde::{Deserialize, Serialize};

/// Emitted once per successful resolution, after the record is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterReady {
    /// The chat user the character belongs to.
    pub user_id: i64,
    /// The resolved display name.
    pub character_name: String,
}
