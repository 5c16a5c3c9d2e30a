//! Game registry service.

use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::config::store::LogLayout;
use crate::domain::ids::new_game_id;
use crate::domain::{DeletionCandidate, Game};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{self, GameRow};
use crate::repos::plays::PlayLog;
use crate::store::TableStore;

/// Outcome of a confirmed deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedGame {
    pub game: Game,
    pub plays_removed: usize,
}

pub struct GameService {
    store: Arc<dyn TableStore>,
    layout: LogLayout,
}

impl GameService {
    pub fn new(store: Arc<dyn TableStore>, layout: LogLayout) -> Self {
        Self { store, layout }
    }

    pub async fn create_game(&self, name: &str) -> Result<Game, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Game name is required"));
        }

        let game = Game {
            id: new_game_id(),
            name: name.to_string(),
            created_at: Some(OffsetDateTime::now_utc()),
        };

        // Log table first so a registered game always has somewhere to record.
        let log = PlayLog::new(self.layout, &game.id);
        log.create(self.store.as_ref()).await?;
        if let Err(e) = games::append(self.store.as_ref(), &game).await {
            if let Err(cleanup) = log.discard(self.store.as_ref()).await {
                warn!(
                    game_id = %game.id,
                    error = %cleanup,
                    "Failed to drop log table of unregistered game"
                );
            }
            return Err(e);
        }

        info!(game_id = %game.id, game_name = %game.name, "Game created");
        Ok(game)
    }

    /// Games newest first.
    pub async fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        let rows = games::list_rows(self.store.as_ref()).await?;
        Ok(rows.into_iter().rev().map(|r| r.game).collect())
    }

    /// First game, scanning in insertion order, whose id or name equals
    /// the trimmed input.
    pub async fn find_game(&self, id_or_name: &str) -> Result<DeletionCandidate, DomainError> {
        let needle = id_or_name.trim();
        if needle.is_empty() {
            return Err(DomainError::validation("Game id or name is required"));
        }

        let rows = games::list_rows(self.store.as_ref()).await?;
        rows.into_iter()
            .find(|r| r.game.matches(needle))
            .map(|GameRow { index, game }| DeletionCandidate {
                game,
                row_index: index,
            })
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Game, format!("No game matches '{needle}'"))
            })
    }

    /// Delete a candidate returned by [`find_game`](Self::find_game): its
    /// plays first, then its registry row.
    pub async fn confirm_delete(
        &self,
        candidate: &DeletionCandidate,
    ) -> Result<DeletedGame, DomainError> {
        let store = self.store.as_ref();
        let index = self.revalidate(candidate).await?;

        let plays_removed = PlayLog::new(self.layout, &candidate.game.id)
            .purge(store)
            .await?;
        games::delete_row(store, index).await?;

        info!(
            game_id = %candidate.game.id,
            game_name = %candidate.game.name,
            plays_removed,
            "Game deleted"
        );
        Ok(DeletedGame {
            game: candidate.game.clone(),
            plays_removed,
        })
    }

    /// Find and delete in one call.
    pub async fn delete_game(&self, id_or_name: &str) -> Result<DeletedGame, DomainError> {
        let candidate = self.find_game(id_or_name).await?;
        self.confirm_delete(&candidate).await
    }

    /// Current row index of the candidate's game. The registry may have
    /// shifted since the lookup; the game is then located again by id.
    async fn revalidate(&self, candidate: &DeletionCandidate) -> Result<usize, DomainError> {
        let store = self.store.as_ref();
        let at_index = games::row_at(store, candidate.row_index).await?;
        if at_index.as_ref().map(|g| g.id.as_str()) == Some(candidate.game.id.as_str()) {
            return Ok(candidate.row_index);
        }

        warn!(
            game_id = %candidate.game.id,
            row_index = candidate.row_index,
            "Registry row moved since lookup"
        );
        let rows = games::list_rows(store).await?;
        rows.into_iter()
            .find(|r| r.game.id == candidate.game.id)
            .map(|r| r.index)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Game,
                    format!("Game {} no longer exists", candidate.game.id),
                )
            })
    }
}
