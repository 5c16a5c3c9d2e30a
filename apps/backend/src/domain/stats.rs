//! Box-score aggregation.
//!
//! Folds the play events of one game into one line per player. The fold
//! only accumulates, so the counters of every line do not depend on the
//! order of events; only the order of the lines does (first appearance).

use std::collections::HashMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::play::{PlayEvent, PlayType};
use super::player::PlayerRef;

pub const REPORT_HEADERS: [&str; 8] = ["Player", "PTS", "FGM", "FGA", "3PM", "3PA", "FTM", "FTA"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatCounters {
    pub pts: u32,
    pub fgm: u32,
    pub fga: u32,
    pub tpm: u32,
    pub tpa: u32,
    pub ftm: u32,
    pub fta: u32,
}

impl StatCounters {
    pub fn apply(&mut self, play: PlayType) {
        self.pts += play.points();
        match play {
            PlayType::TwoMade => {
                self.fgm += 1;
                self.fga += 1;
            }
            PlayType::TwoMissed => self.fga += 1,
            PlayType::ThreeMade => {
                self.fgm += 1;
                self.fga += 1;
                self.tpm += 1;
                self.tpa += 1;
            }
            PlayType::ThreeMissed => {
                self.fga += 1;
                self.tpa += 1;
            }
            PlayType::FreeThrowMade => {
                self.ftm += 1;
                self.fta += 1;
            }
            PlayType::FreeThrowMissed => self.fta += 1,
        }
    }
}

/// Tuple projection of a line, in [`REPORT_HEADERS`] order.
pub type StatRow = (String, u32, u32, u32, u32, u32, u32, u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStatLine {
    pub player: PlayerRef,
    pub counters: StatCounters,
}

impl PlayerStatLine {
    pub fn row(&self) -> StatRow {
        let c = &self.counters;
        (
            self.player.to_string(),
            c.pts,
            c.fgm,
            c.fga,
            c.tpm,
            c.tpa,
            c.ftm,
            c.fta,
        )
    }
}

/// Aggregate the events of `game_id` into per-player lines in
/// first-appearance order. Events of other games and unrecognized play
/// codes are skipped without creating a line.
pub fn aggregate<'a, I>(game_id: &str, events: I) -> Vec<PlayerStatLine>
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let game_id = game_id.trim();
    let mut index: HashMap<PlayerRef, usize> = HashMap::new();
    let mut lines: Vec<PlayerStatLine> = Vec::new();

    for event in events {
        if event.game_id.trim() != game_id {
            continue;
        }
        let Some(play) = event.play.play_type() else {
            continue;
        };
        let player = event.player();
        let slot = *index.entry(player.clone()).or_insert_with(|| {
            lines.push(PlayerStatLine {
                player,
                counters: StatCounters::default(),
            });
            lines.len() - 1
        });
        lines[slot].counters.apply(play);
    }

    lines
}

/// Sum of per-event point values for `game_id`. Always equals the report's
/// total score.
pub fn points_for<'a, I>(game_id: &str, events: I) -> u32
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let game_id = game_id.trim();
    events
        .into_iter()
        .filter(|e| e.game_id.trim() == game_id)
        .filter_map(|e| e.play.play_type())
        .map(PlayType::points)
        .sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game_id: String,
    pub lines: Vec<PlayerStatLine>,
    pub total_score: u32,
}

impl GameReport {
    pub fn empty(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            lines: Vec::new(),
            total_score: 0,
        }
    }

    pub fn from_events<'a, I>(game_id: &str, events: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayEvent>,
    {
        let lines = aggregate(game_id, events);
        let total_score = lines.iter().map(|l| l.counters.pts).sum();
        Self {
            game_id: game_id.trim().to_string(),
            lines,
            total_score,
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        &REPORT_HEADERS
    }

    pub fn rows(&self) -> Vec<StatRow> {
        self.lines.iter().map(PlayerStatLine::row).collect()
    }

    pub fn line(&self, player: &PlayerRef) -> Option<&PlayerStatLine> {
        self.lines.iter().find(|l| &l.player == player)
    }
}

impl Serialize for GameReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("GameReport", 4)?;
        s.serialize_field("gameId", &self.game_id)?;
        s.serialize_field("headers", self.headers())?;
        s.serialize_field("rows", &self.rows())?;
        s.serialize_field("totalScore", &self.total_score)?;
        s.end()
    }
}
