//! Domain services: validation and orchestration over the repos.

pub mod games;
pub mod plays;
pub mod roster;
pub mod stats;

pub use games::{DeletedGame, GameService};
pub use plays::{GameData, PlayService, RecordedPlay};
pub use roster::RosterService;
pub use stats::StatsService;
