//! Roster table access.

use tracing::warn;

use crate::domain::Player;
use crate::errors::domain::DomainError;
use crate::repos::tables::{ROSTER, ROSTER_HEADER};
use crate::store::{read_all, Cell, Row, TableStore};

fn decode(index: usize, row: &Row) -> Option<Player> {
    let number_cell = &row[0];
    let name = row[1].as_trimmed_text();
    if number_cell.is_empty() && name.is_empty() {
        return None;
    }
    match number_cell.as_int().and_then(|n| u32::try_from(n).ok()) {
        Some(number) => Some(Player::new(number, name)),
        None => {
            warn!(table = ROSTER, row = index, "Skipping roster row without a valid number");
            None
        }
    }
}

/// All players ascending by number, whatever the table order. A missing
/// roster reads as empty.
pub async fn list(store: &dyn TableStore) -> Result<Vec<Player>, DomainError> {
    let rows = read_all(store, ROSTER, ROSTER_HEADER.len()).await?;
    let mut players: Vec<Player> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| decode(i, row))
        .collect();
    players.sort_by_key(|p| p.number);
    Ok(players)
}

pub async fn append(store: &dyn TableStore, player: &Player) -> Result<(), DomainError> {
    let row: Row = vec![Cell::from(player.number), Cell::text(player.name.as_str())];
    store.append_row(ROSTER, row).await?;
    Ok(())
}

/// Re-sort the roster ascending by number.
pub async fn sort_by_number(store: &dyn TableStore) -> Result<(), DomainError> {
    store.sort_rows(ROSTER, 0).await?;
    Ok(())
}
