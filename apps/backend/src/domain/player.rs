//! Player identities.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

/// A roster entry. Identity is the (number, name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub number: u32,
    pub name: String,
}

impl Player {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }

    /// The `"<number> <name>"` form offered to callers picking a player.
    pub fn display(&self) -> String {
        format!("{} {}", self.number, self.name)
    }
}

impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct PlayerView<'a> {
            number: u32,
            name: &'a str,
            display: String,
        }

        PlayerView {
            number: self.number,
            name: &self.name,
            display: self.display(),
        }
        .serialize(serializer)
    }
}

/// The player a play is attributed to. The number is absent when the
/// caller only gave a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerRef {
    pub number: Option<u32>,
    pub name: String,
}

impl PlayerRef {
    pub fn new(number: Option<u32>, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }

    /// Parse a display string such as `"23 Jordan"`.
    ///
    /// The input is split on its first whitespace run; when the first token
    /// is a non-negative integer it becomes the number and the remainder the
    /// name. Otherwise the whole trimmed input is the name. Returns `None`
    /// for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (trimmed, ""),
        };
        match head.parse::<u32>() {
            Ok(number) => Some(Self::new(Some(number), rest)),
            Err(_) => Some(Self::new(None, trimmed)),
        }
    }
}

impl From<&Player> for PlayerRef {
    fn from(player: &Player) -> Self {
        Self::new(Some(player.number), player.name.clone())
    }
}

impl Display for PlayerRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.number, self.name.is_empty()) {
            (Some(n), true) => write!(f, "{n}"),
            (Some(n), false) => write!(f, "{n} {}", self.name),
            (None, _) => f.write_str(&self.name),
        }
    }
}
