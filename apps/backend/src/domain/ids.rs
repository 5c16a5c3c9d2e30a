//! Generated identifiers for games and plays.

use ulid::Ulid;

pub const GAME_ID_PREFIX: &str = "G";
pub const PLAY_ID_PREFIX: &str = "P";

pub fn new_game_id() -> String {
    format!("{GAME_ID_PREFIX}{}", Ulid::new())
}

pub fn new_play_id() -> String {
    format!("{PLAY_ID_PREFIX}{}", Ulid::new())
}
