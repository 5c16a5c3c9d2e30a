use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::config::store::LogLayout;
use crate::services::{GameService, PlayService, RosterService, StatsService};
use crate::store::TableStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Table store every service reads and writes through
    pub store: Arc<dyn TableStore>,
    /// Where play events are written
    pub layout: LogLayout,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, layout: LogLayout) -> Self {
        Self { store, layout }
    }

    pub fn roster(&self) -> RosterService {
        RosterService::new(self.store.clone())
    }

    pub fn games(&self) -> GameService {
        GameService::new(self.store.clone(), self.layout)
    }

    pub fn plays(&self) -> PlayService {
        PlayService::new(self.store.clone(), self.layout)
    }

    pub fn stats(&self) -> StatsService {
        StatsService::new(self.store.clone(), self.layout)
    }
}

impl Debug for AppState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppState")
            .field("store", &"<dyn TableStore>")
            .field("layout", &self.layout)
            .finish()
    }
}
