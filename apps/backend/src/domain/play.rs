//! Play types and recorded play events.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;

use super::player::PlayerRef;

/// The six recordable shot outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayType {
    #[serde(rename = "2P_MADE")]
    TwoMade,
    #[serde(rename = "2P_MISSED")]
    TwoMissed,
    #[serde(rename = "3P_MADE")]
    ThreeMade,
    #[serde(rename = "3P_MISSED")]
    ThreeMissed,
    #[serde(rename = "FT_MADE")]
    FreeThrowMade,
    #[serde(rename = "FT_MISSED")]
    FreeThrowMissed,
}

impl PlayType {
    pub const ALL: [PlayType; 6] = [
        PlayType::TwoMade,
        PlayType::TwoMissed,
        PlayType::ThreeMade,
        PlayType::ThreeMissed,
        PlayType::FreeThrowMade,
        PlayType::FreeThrowMissed,
    ];

    /// Canonical code as stored in the play log.
    pub const fn code(self) -> &'static str {
        match self {
            PlayType::TwoMade => "2P_MADE",
            PlayType::TwoMissed => "2P_MISSED",
            PlayType::ThreeMade => "3P_MADE",
            PlayType::ThreeMissed => "3P_MISSED",
            PlayType::FreeThrowMade => "FT_MADE",
            PlayType::FreeThrowMissed => "FT_MISSED",
        }
    }

    /// Exact match on the trimmed code.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Points this play adds to the scorer's total.
    pub const fn points(self) -> u32 {
        match self {
            PlayType::TwoMade => 2,
            PlayType::ThreeMade => 3,
            PlayType::FreeThrowMade => 1,
            PlayType::TwoMissed | PlayType::ThreeMissed | PlayType::FreeThrowMissed => 0,
        }
    }
}

impl Display for PlayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for PlayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown play type '{}'", s.trim()))
    }
}

/// A play code read back from the log. Codes written by something other
/// than this service are kept verbatim so they can be shown, but never
/// count towards stats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayKind {
    Recognized(PlayType),
    Unrecognized(String),
}

impl PlayKind {
    pub fn from_code(code: &str) -> Self {
        match PlayType::parse(code) {
            Some(t) => PlayKind::Recognized(t),
            None => PlayKind::Unrecognized(code.trim().to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            PlayKind::Recognized(t) => t.code(),
            PlayKind::Unrecognized(raw) => raw,
        }
    }

    pub fn play_type(&self) -> Option<PlayType> {
        match self {
            PlayKind::Recognized(t) => Some(*t),
            PlayKind::Unrecognized(_) => None,
        }
    }
}

impl From<PlayType> for PlayKind {
    fn from(t: PlayType) -> Self {
        PlayKind::Recognized(t)
    }
}

impl Serialize for PlayKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PlayKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PlayKind::from_code(&raw))
    }
}

/// One row of the play log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    pub game_id: String,
    pub player_number: Option<u32>,
    pub player_name: String,
    pub play: PlayKind,
    pub play_id: String,
}

impl PlayEvent {
    pub fn player(&self) -> PlayerRef {
        PlayerRef::new(self.player_number, self.player_name.clone())
    }
}
