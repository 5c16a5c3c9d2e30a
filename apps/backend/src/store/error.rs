use std::time::Duration;

use thiserror::Error;

/// Failures raised by a [`TableStore`](super::TableStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("table '{0}' does not exist")]
    MissingTable(String),
    #[error("table '{0}' already exists")]
    TableExists(String),
    #[error("row {index} out of range for table '{table}' ({len} rows)")]
    RowOutOfRange {
        table: String,
        index: usize,
        len: usize,
    },
    #[error("store call '{op}' timed out after {elapsed:?}")]
    Timeout { op: &'static str, elapsed: Duration },
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt row in '{table}': {detail}")]
    Corrupt { table: String, detail: String },
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl StoreError {
    /// Whether a single retry of an idempotent call may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Timeout { .. } | StoreError::Unavailable(_) => true,
            StoreError::Db(e) => matches!(
                e,
                sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_)
            ),
            _ => false,
        }
    }
}
