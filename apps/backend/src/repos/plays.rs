//! Play log access for both log layouts.
//!
//! Shared layout: one `Plays` table, rows carry their game id.
//! Per-game layout: one `Game_<id>` table per game, no game id column.

use crate::config::store::LogLayout;
use crate::domain::{PlayEvent, PlayKind};
use crate::errors::domain::DomainError;
use crate::repos::games::{format_timestamp, parse_timestamp};
use crate::repos::tables::{game_log_table, GAME_LOG_HEADER, PLAYS, PLAYS_HEADER};
use crate::store::{read_all, Cell, Row, TableStore};

/// Where the plays of one game live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayLog {
    layout: LogLayout,
    game_id: String,
}

impl PlayLog {
    pub fn new(layout: LogLayout, game_id: &str) -> Self {
        Self {
            layout,
            game_id: game_id.trim().to_string(),
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn table(&self) -> String {
        match self.layout {
            LogLayout::Shared => PLAYS.to_string(),
            LogLayout::PerGame => game_log_table(&self.game_id),
        }
    }

    fn width(&self) -> usize {
        match self.layout {
            LogLayout::Shared => PLAYS_HEADER.len(),
            LogLayout::PerGame => GAME_LOG_HEADER.len(),
        }
    }

    /// Column holding the play id.
    fn play_id_column(&self) -> usize {
        self.width() - 1
    }

    fn encode(&self, event: &PlayEvent) -> Row {
        let timestamp = event.timestamp.map(format_timestamp).unwrap_or_default();
        let mut row: Row = vec![timestamp];
        if self.layout == LogLayout::Shared {
            row.push(Cell::text(event.game_id.as_str()));
        }
        row.extend([
            Cell::from(event.player_number),
            Cell::text(event.player_name.as_str()),
            Cell::text(event.play.code()),
            Cell::text(event.play_id.as_str()),
        ]);
        row
    }

    /// Decode a row; `None` for rows that belong to another game.
    fn decode(&self, row: &Row) -> Option<PlayEvent> {
        let (game_id, rest) = match self.layout {
            LogLayout::Shared => (row[1].as_trimmed_text(), &row[2..]),
            LogLayout::PerGame => (self.game_id.clone(), &row[1..]),
        };
        if game_id != self.game_id {
            return None;
        }
        Some(PlayEvent {
            timestamp: parse_timestamp(&row[0]),
            game_id,
            player_number: rest[0].as_int().and_then(|n| u32::try_from(n).ok()),
            player_name: rest[1].as_trimmed_text(),
            play: PlayKind::from_code(&rest[2].as_text()),
            play_id: rest[3].as_trimmed_text(),
        })
    }

    pub async fn exists(&self, store: &dyn TableStore) -> Result<bool, DomainError> {
        Ok(store.table_exists(&self.table()).await?)
    }

    pub async fn append(&self, store: &dyn TableStore, event: &PlayEvent) -> Result<(), DomainError> {
        store.append_row(&self.table(), self.encode(event)).await?;
        Ok(())
    }

    /// Plays of this game in log order, with their row indices.
    pub async fn load_rows(
        &self,
        store: &dyn TableStore,
    ) -> Result<Vec<(usize, PlayEvent)>, DomainError> {
        let rows = read_all(store, &self.table(), self.width()).await?;
        Ok(rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| self.decode(row).map(|e| (i, e)))
            .collect())
    }

    /// Plays of this game in log order. A missing log reads as empty.
    pub async fn load(&self, store: &dyn TableStore) -> Result<Vec<PlayEvent>, DomainError> {
        Ok(self
            .load_rows(store)
            .await?
            .into_iter()
            .map(|(_, e)| e)
            .collect())
    }

    /// Row index of the last play of this game whose trimmed id equals
    /// `play_id`, scanning from the end.
    pub async fn find_from_end(
        &self,
        store: &dyn TableStore,
        play_id: &str,
    ) -> Result<Option<usize>, DomainError> {
        let needle = play_id.trim();
        let rows = read_all(store, &self.table(), self.width()).await?;
        let column = self.play_id_column();
        Ok(rows
            .iter()
            .enumerate()
            .rev()
            .find(|(_, row)| {
                row[column].as_trimmed_text() == needle && self.decode(row).is_some()
            })
            .map(|(i, _)| i))
    }

    pub async fn delete_row(&self, store: &dyn TableStore, index: usize) -> Result<(), DomainError> {
        store.delete_row(&self.table(), index).await?;
        Ok(())
    }

    /// Create the dedicated log table (per-game layout only).
    pub async fn create(&self, store: &dyn TableStore) -> Result<(), DomainError> {
        if self.layout == LogLayout::PerGame {
            store.create_table(&self.table(), &GAME_LOG_HEADER).await?;
        }
        Ok(())
    }

    /// Drop the dedicated log table of a game that never got registered.
    pub async fn discard(&self, store: &dyn TableStore) -> Result<(), DomainError> {
        if self.layout == LogLayout::PerGame {
            store.delete_table(&self.table()).await?;
        }
        Ok(())
    }

    /// Remove every play of this game. Drops the dedicated table in the
    /// per-game layout, deletes matching rows from the shared log
    /// otherwise. Returns the number of plays removed.
    pub async fn purge(&self, store: &dyn TableStore) -> Result<usize, DomainError> {
        let table = self.table();
        match self.layout {
            LogLayout::PerGame => {
                if !store.table_exists(&table).await? {
                    return Ok(0);
                }
                let count = store.row_count(&table).await?;
                store.delete_table(&table).await?;
                Ok(count)
            }
            LogLayout::Shared => {
                let rows = self.load_rows(store).await?;
                // Highest index first so earlier indices stay valid.
                for (index, _) in rows.iter().rev() {
                    store.delete_row(&table, *index).await?;
                }
                Ok(rows.len())
            }
        }
    }
}
