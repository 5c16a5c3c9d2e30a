//! StoreError -> DomainError translation.
//!
//! Repos call `map_store_err` (or rely on the `From` impl via `?`) so that
//! services only ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, StoreErrorKind};
use crate::store::StoreError;
use crate::trace_ctx;

pub fn map_store_err(e: StoreError) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match e {
        StoreError::MissingTable(table) => {
            DomainError::not_found(NotFoundKind::Table, format!("Table '{table}' not found"))
        }
        StoreError::TableExists(table) => DomainError::conflict(
            ConflictKind::TableExists,
            format!("Table '{table}' already exists"),
        ),
        StoreError::RowOutOfRange { table, index, len } => {
            warn!(trace_id = %trace_id, table = %table, index, len, "Row index out of range");
            DomainError::not_found(
                NotFoundKind::Other("Row".into()),
                format!("Row {index} no longer exists in '{table}'"),
            )
        }
        StoreError::Timeout { op, elapsed } => {
            warn!(trace_id = %trace_id, store.op = op, elapsed_ms = elapsed.as_millis() as u64, "Store call timed out");
            DomainError::store(StoreErrorKind::Timeout, format!("Store call '{op}' timed out"))
        }
        StoreError::Unavailable(detail) => {
            warn!(trace_id = %trace_id, detail = %detail, "Store unavailable");
            DomainError::store(StoreErrorKind::Unavailable, "Store unavailable")
        }
        StoreError::Corrupt { table, detail } => {
            error!(trace_id = %trace_id, table = %table, detail = %detail, "Corrupt store row");
            DomainError::store(
                StoreErrorKind::DataCorruption,
                format!("Unreadable data in '{table}'"),
            )
        }
        e @ StoreError::Db(_) if e.is_transient() => {
            warn!(trace_id = %trace_id, raw_error = %e, "Database unavailable");
            DomainError::store(StoreErrorKind::Unavailable, "Database unavailable")
        }
        StoreError::Db(e) => {
            error!(trace_id = %trace_id, raw_error = %e, "Unhandled database error");
            DomainError::store(
                StoreErrorKind::Other("DbErr".into()),
                "Database operation failed",
            )
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        map_store_err(e)
    }
}
