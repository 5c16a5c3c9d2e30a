//! Stats service: loads a game's plays and folds them into a report.

use std::sync::Arc;

use tracing::debug;

use crate::config::store::LogLayout;
use crate::domain::GameReport;
use crate::errors::domain::DomainError;
use crate::repos::plays::PlayLog;
use crate::store::TableStore;

pub struct StatsService {
    store: Arc<dyn TableStore>,
    layout: LogLayout,
}

impl StatsService {
    pub fn new(store: Arc<dyn TableStore>, layout: LogLayout) -> Self {
        Self { store, layout }
    }

    /// Box score for one game. Blank ids and missing or empty logs give an
    /// empty report.
    pub async fn compute_stats(&self, game_id: &str) -> Result<GameReport, DomainError> {
        let game_id = game_id.trim();
        if game_id.is_empty() {
            return Ok(GameReport::empty(""));
        }

        let events = PlayLog::new(self.layout, game_id)
            .load(self.store.as_ref())
            .await?;
        let report = GameReport::from_events(game_id, &events);
        debug!(
            game_id,
            events = events.len(),
            players = report.lines.len(),
            total_score = report.total_score,
            "Stats computed"
        );
        Ok(report)
    }
}
