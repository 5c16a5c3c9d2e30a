//! Table names, headers and startup provisioning.

use tracing::info;

use crate::config::store::LogLayout;
use crate::errors::domain::DomainError;
use crate::store::{ensure_table, TableStore};

pub const ROSTER: &str = "Roster";
pub const ROSTER_HEADER: [&str; 2] = ["number", "name"];

pub const GAMES: &str = "Games";
pub const GAMES_HEADER: [&str; 3] = ["gameId", "gameName", "createdAt"];

/// Shared play log, one row per play across all games.
pub const PLAYS: &str = "Plays";
pub const PLAYS_HEADER: [&str; 6] = [
    "timestamp",
    "gameId",
    "playerNumber",
    "playerName",
    "play",
    "playId",
];

pub const GAME_LOG_PREFIX: &str = "Game_";
pub const GAME_LOG_HEADER: [&str; 5] = ["timestamp", "playerNumber", "playerName", "play", "playId"];

/// Name of the dedicated log table of one game.
pub fn game_log_table(game_id: &str) -> String {
    format!("{GAME_LOG_PREFIX}{}", game_id.trim())
}

/// Create the roster, game registry and (for the shared layout) the play
/// log if they are missing. Returns the names of the tables created.
pub async fn ensure_tables(
    store: &dyn TableStore,
    layout: LogLayout,
) -> Result<Vec<&'static str>, DomainError> {
    let mut wanted: Vec<(&'static str, &[&str])> = vec![
        (ROSTER, &ROSTER_HEADER[..]),
        (GAMES, &GAMES_HEADER[..]),
    ];
    if layout == LogLayout::Shared {
        wanted.push((PLAYS, &PLAYS_HEADER[..]));
    }

    let mut created = Vec::new();
    for (table, header) in wanted {
        if ensure_table(store, table, header).await? {
            info!(table, "table_created");
            created.push(table);
        }
    }
    Ok(created)
}
