//! Play recording service.

use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::store::LogLayout;
use crate::domain::ids::new_play_id;
use crate::domain::{PlayEvent, PlayType, PlayerRef};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::plays::PlayLog;
use crate::store::TableStore;

/// A play as recorded. `persisted` is false when the append failed; the
/// failure has already been logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedPlay {
    pub play: PlayEvent,
    pub persisted: bool,
}

/// Raw plays of one game, unaggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct GameData {
    pub plays: Vec<PlayEvent>,
}

pub struct PlayService {
    store: Arc<dyn TableStore>,
    layout: LogLayout,
}

impl PlayService {
    pub fn new(store: Arc<dyn TableStore>, layout: LogLayout) -> Self {
        Self { store, layout }
    }

    pub async fn record_play(
        &self,
        player: &str,
        play_type: &str,
        game_id: &str,
    ) -> Result<RecordedPlay, DomainError> {
        let game_id = game_id.trim();
        if game_id.is_empty() {
            return Err(DomainError::validation("Game id is required"));
        }
        let player = PlayerRef::parse(player)
            .ok_or_else(|| DomainError::validation("Player is required"))?;
        let play_type = PlayType::parse(play_type).ok_or_else(|| {
            DomainError::validation(format!("Unknown play type '{}'", play_type.trim()))
        })?;

        let log = PlayLog::new(self.layout, game_id);
        if self.layout == LogLayout::PerGame && !log.exists(self.store.as_ref()).await? {
            return Err(DomainError::not_found(
                NotFoundKind::PlayLog,
                format!("No play log for game {game_id}"),
            ));
        }

        let event = PlayEvent {
            timestamp: Some(OffsetDateTime::now_utc()),
            game_id: game_id.to_string(),
            player_number: player.number,
            player_name: player.name,
            play: play_type.into(),
            play_id: new_play_id(),
        };

        // Single attempt: a retried append could duplicate the play.
        let persisted = match log.append(self.store.as_ref(), &event).await {
            Ok(()) => {
                info!(game_id, play_id = %event.play_id, play = %play_type, "Play recorded");
                true
            }
            Err(e) => {
                warn!(game_id, play_id = %event.play_id, error = %e, "Play not persisted");
                false
            }
        };

        Ok(RecordedPlay {
            play: event,
            persisted,
        })
    }

    /// Delete the most recent play of `game_id` with id `play_id`. Returns
    /// whether a row was removed; a blank or unknown id is not an error.
    pub async fn delete_play(&self, play_id: &str, game_id: &str) -> Result<bool, DomainError> {
        let play_id = play_id.trim();
        let game_id = game_id.trim();
        if play_id.is_empty() || game_id.is_empty() {
            debug!(play_id, game_id, "Blank id, nothing to delete");
            return Ok(false);
        }

        let log = PlayLog::new(self.layout, game_id);
        let Some(index) = log.find_from_end(self.store.as_ref(), play_id).await? else {
            debug!(game_id, play_id, "Play not found, nothing to delete");
            return Ok(false);
        };
        log.delete_row(self.store.as_ref(), index).await?;

        info!(game_id, play_id, "Play deleted");
        Ok(true)
    }

    pub async fn initial_game_data(&self, game_id: &str) -> Result<GameData, DomainError> {
        let game_id = game_id.trim();
        if game_id.is_empty() {
            return Ok(GameData::default());
        }
        let plays = PlayLog::new(self.layout, game_id)
            .load(self.store.as_ref())
            .await?;
        Ok(GameData { plays })
    }
}
