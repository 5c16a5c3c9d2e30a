//! Game registry table access.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::Game;
use crate::errors::domain::DomainError;
use crate::repos::tables::{GAMES, GAMES_HEADER};
use crate::store::{read_all, Cell, Row, TableStore};

/// A registry row and its 0-based data row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub index: usize,
    pub game: Game,
}

pub(crate) fn format_timestamp(at: OffsetDateTime) -> Cell {
    match at.format(&Rfc3339) {
        Ok(s) => Cell::Text(s),
        Err(_) => Cell::Empty,
    }
}

pub(crate) fn parse_timestamp(cell: &Cell) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(cell.as_trimmed_text().as_str(), &Rfc3339).ok()
}

fn decode(row: &Row) -> Option<Game> {
    let id = row[0].as_trimmed_text();
    if id.is_empty() {
        return None;
    }
    Some(Game {
        id,
        name: row[1].as_text(),
        created_at: parse_timestamp(&row[2]),
    })
}

/// Every game with its row index, in table (insertion) order.
pub async fn list_rows(store: &dyn TableStore) -> Result<Vec<GameRow>, DomainError> {
    let rows = read_all(store, GAMES, GAMES_HEADER.len()).await?;
    Ok(rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| decode(row).map(|game| GameRow { index, game }))
        .collect())
}

/// The game stored at `index`, if that row exists and holds a game.
pub async fn row_at(store: &dyn TableStore, index: usize) -> Result<Option<Game>, DomainError> {
    if !store.table_exists(GAMES).await? {
        return Ok(None);
    }
    let rows = store.read_rows(GAMES, index, 1, GAMES_HEADER.len()).await?;
    Ok(rows.first().and_then(decode))
}

pub async fn append(store: &dyn TableStore, game: &Game) -> Result<(), DomainError> {
    let row: Row = vec![
        Cell::text(game.id.as_str()),
        Cell::text(game.name.as_str()),
        game.created_at.map(format_timestamp).unwrap_or_default(),
    ];
    store.append_row(GAMES, row).await?;
    Ok(())
}

pub async fn delete_row(store: &dyn TableStore, index: usize) -> Result<(), DomainError> {
    store.delete_row(GAMES, index).await?;
    Ok(())
}
