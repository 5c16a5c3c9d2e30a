//! Tabular storage collaborator.
//!
//! A store holds named tables; each table has a header row and an ordered
//! list of data rows. Row indices are 0-based and exclude the header.

pub mod cell;
pub mod error;
pub mod guarded;
pub mod memory;
pub mod sea;

use async_trait::async_trait;

pub use cell::{Cell, Row};
pub use error::StoreError;
pub use guarded::GuardedStore;
pub use memory::MemoryTableStore;
pub use sea::SeaTableStore;

#[async_trait]
pub trait TableStore: Send + Sync {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError>;

    /// Create an empty table. Fails with `TableExists` if the name is taken.
    async fn create_table(&self, table: &str, header: &[&str]) -> Result<(), StoreError>;

    /// Drop a table and all of its rows.
    async fn delete_table(&self, table: &str) -> Result<(), StoreError>;

    async fn append_row(&self, table: &str, values: Row) -> Result<(), StoreError>;

    /// Number of data rows (header excluded).
    async fn row_count(&self, table: &str) -> Result<usize, StoreError>;

    /// Read up to `row_count` rows starting at `start_row`. Every returned row
    /// has exactly `col_count` cells; short rows are padded with `Cell::Empty`.
    async fn read_rows(
        &self,
        table: &str,
        start_row: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<Vec<Row>, StoreError>;

    async fn delete_row(&self, table: &str, row_index: usize) -> Result<(), StoreError>;

    /// Stable ascending sort of the data rows by one column.
    async fn sort_rows(&self, table: &str, column: usize) -> Result<(), StoreError>;
}

/// Read every data row of `table`, treating a missing table as empty.
pub async fn read_all(
    store: &dyn TableStore,
    table: &str,
    col_count: usize,
) -> Result<Vec<Row>, StoreError> {
    if !store.table_exists(table).await? {
        return Ok(Vec::new());
    }
    let count = store.row_count(table).await?;
    if count == 0 {
        return Ok(Vec::new());
    }
    store.read_rows(table, 0, count, col_count).await
}

/// Create `table` with `header` unless it already exists.
pub async fn ensure_table(
    store: &dyn TableStore,
    table: &str,
    header: &[&str],
) -> Result<bool, StoreError> {
    if store.table_exists(table).await? {
        return Ok(false);
    }
    match store.create_table(table, header).await {
        Ok(()) => Ok(true),
        Err(StoreError::TableExists(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Pad or truncate a row to exactly `col_count` cells.
pub(crate) fn fit_row(mut row: Row, col_count: usize) -> Row {
    row.resize(col_count, Cell::Empty);
    row
}

/// Stable sort by one column using [`Cell::sort_cmp`].
pub(crate) fn sort_by_column(rows: &mut [Row], column: usize) {
    let empty = Cell::Empty;
    rows.sort_by(|a, b| {
        let left = a.get(column).unwrap_or(&empty);
        let right = b.get(column).unwrap_or(&empty);
        left.sort_cmp(right)
    });
}
