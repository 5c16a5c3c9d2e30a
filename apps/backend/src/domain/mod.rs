//! Domain layer: scorebook types and the box-score fold.

pub mod game;
pub mod ids;
pub mod play;
pub mod player;
pub mod stats;

#[cfg(test)]
mod tests_stats;

// Re-exports for ergonomics
pub use game::{DeletionCandidate, Game};
pub use play::{PlayEvent, PlayKind, PlayType};
pub use player::{Player, PlayerRef};
pub use stats::{GameReport, PlayerStatLine, StatCounters, REPORT_HEADERS};
