//! Games and the two-step deletion handshake.

use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// A game matched for deletion, together with the registry row it was
/// read from. Confirming deletes exactly this row after checking that it
/// still holds the same game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionCandidate {
    pub game: Game,
    pub row_index: usize,
}

impl Game {
    /// Whether `input` (trimmed) equals this game's trimmed id or name.
    pub fn matches(&self, input: &str) -> bool {
        let needle = input.trim();
        !needle.is_empty() && (self.id.trim() == needle || self.name.trim() == needle)
    }
}
