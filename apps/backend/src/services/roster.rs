//! Roster domain service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::Player;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::roster;
use crate::store::TableStore;

pub struct RosterService {
    store: Arc<dyn TableStore>,
}

/// Parse a jersey number given as free text.
pub fn parse_number(input: &str) -> Result<u32, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Player number is required"));
    }
    trimmed.parse::<u32>().map_err(|_| {
        DomainError::validation(format!(
            "Player number must be a non-negative integer, got '{trimmed}'"
        ))
    })
}

impl RosterService {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Players ascending by number.
    pub async fn list_players(&self) -> Result<Vec<Player>, DomainError> {
        roster::list(self.store.as_ref()).await
    }

    /// Add a player and keep the roster sorted by number. Once the row is
    /// stored the player counts as added; a failed re-sort is only logged.
    pub async fn add_player(&self, number: &str, name: &str) -> Result<Player, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Player name is required"));
        }
        let number = parse_number(number)?;

        let existing = roster::list(self.store.as_ref()).await?;
        if let Some(taken) = existing.iter().find(|p| p.number == number) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerNumber,
                format!("Number {number} is already worn by {}", taken.name),
            ));
        }

        let player = Player::new(number, name);
        roster::append(self.store.as_ref(), &player).await?;
        if let Err(e) = roster::sort_by_number(self.store.as_ref()).await {
            warn!(player_number = number, error = %e, "Roster re-sort failed");
        }

        info!(player_number = number, player_name = %player.name, "Player added");
        Ok(player)
    }
}
