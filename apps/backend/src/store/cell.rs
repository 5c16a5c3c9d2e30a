//! Cell values held by the table store.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single cell. Integers and text are kept apart so numeric columns
/// (jersey numbers) sort numerically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Text(String),
    #[default]
    Empty,
}

/// One stored row, left to right.
pub type Row = Vec<Cell>;

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Int(_) => false,
        }
    }

    /// Render the cell the way a spreadsheet would show it.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Int(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }

    pub fn as_trimmed_text(&self) -> String {
        self.as_text().trim().to_string()
    }

    /// Integer value, accepting numeric text.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        }
    }

    /// Ascending sort order: integers, then text, then empty cells.
    pub fn sort_cmp(&self, other: &Cell) -> Ordering {
        fn rank(cell: &Cell) -> u8 {
            match cell {
                Cell::Int(_) => 0,
                Cell::Text(s) if s.trim().is_empty() => 2,
                Cell::Text(_) => 1,
                Cell::Empty => 2,
            }
        }

        match (self.as_int(), other.as_int()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) if !other.is_empty() => Ordering::Less,
            (None, Some(_)) if !self.is_empty() => Ordering::Greater,
            _ => rank(self)
                .cmp(&rank(other))
                .then_with(|| self.as_text().cmp(&other.as_text())),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(i64::from(value))
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}
