use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::db::DbProfile;
use crate::config::store::{LogLayout, StoreBackend, StoreConfig};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::tables::ensure_tables;
use crate::state::app_state::AppState;
use crate::store::{GuardedStore, MemoryTableStore, SeaTableStore, TableStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: StoreConfig,
    db_profile: DbProfile,
    store: Option<Arc<dyn TableStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            db_profile: DbProfile::Prod,
            store: None,
        }
    }

    pub fn with_store_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_db_profile(mut self, profile: DbProfile) -> Self {
        self.db_profile = profile;
        self
    }

    /// Use an already-built store instead of the configured backend.
    pub fn with_table_store(mut self, store: Arc<dyn TableStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_layout(mut self, layout: LogLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Open the store, wrap it with the timeout/retry guard and make sure
    /// the base tables exist.
    pub async fn build(self) -> Result<AppState, AppError> {
        let inner: Arc<dyn TableStore> = match self.store {
            Some(store) => store,
            None => match self.config.backend {
                StoreBackend::Memory => Arc::new(MemoryTableStore::new()),
                StoreBackend::Database => {
                    let url = self.config.database_url.as_deref().ok_or_else(|| {
                        AppError::config("DATABASE_URL is required for the database store")
                    })?;
                    let conn = bootstrap_db(self.db_profile, url).await?;
                    Arc::new(SeaTableStore::new(conn))
                }
            },
        };

        let store: Arc<dyn TableStore> = Arc::new(GuardedStore::new(inner, self.config.timeout));
        let created = ensure_tables(store.as_ref(), self.config.layout).await?;

        info!(
            backend = ?self.config.backend,
            layout = ?self.config.layout,
            timeout_ms = self.config.timeout.as_millis() as u64,
            tables_created = created.len(),
            "Store ready"
        );
        Ok(AppState::new(store, self.config.layout))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
