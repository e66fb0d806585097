use serde::{Deserialize, Serialize};

use crate::game::models::Game;

/// Current on-disk save format version
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// Versioned envelope written to disk for one saved game.
///
/// The explicit version field replaces the original system's opaque
/// whole-object serialization; loaders reject records they do not
/// understand instead of deserializing blindly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub code: String,
    pub game: Game,
}

impl SaveRecord {
    pub fn new(game: Game) -> Self {
        Self {
            version: SAVE_FORMAT_VERSION,
            code: game.code().to_string(),
            game,
        }
    }

    /// Whether this record was written by a format we can read
    pub fn is_supported(&self) -> bool {
        self.version == SAVE_FORMAT_VERSION
    }
}
