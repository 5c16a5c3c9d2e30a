//! In-process table store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{fit_row, sort_by_column, Row, StoreError, TableStore};

#[derive(Debug, Clone)]
struct Sheet {
    header: Vec<String>,
    rows: Vec<Row>,
}

/// Table store kept entirely in memory. Used for tests and for the
/// `memory` store backend.
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    sheets: RwLock<HashMap<String, Sheet>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header row of a table, if it exists.
    pub fn header(&self, table: &str) -> Option<Vec<String>> {
        self.sheets.read().get(table).map(|s| s.header.clone())
    }

    /// Names of all tables, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sheets.read().keys().cloned().collect();
        names.sort();
        names
    }
}

fn missing(table: &str) -> StoreError {
    StoreError::MissingTable(table.to_string())
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        Ok(self.sheets.read().contains_key(table))
    }

    async fn create_table(&self, table: &str, header: &[&str]) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write();
        if sheets.contains_key(table) {
            return Err(StoreError::TableExists(table.to_string()));
        }
        sheets.insert(
            table.to_string(),
            Sheet {
                header: header.iter().map(|h| h.to_string()).collect(),
                rows: Vec::new(),
            },
        );
        Ok(())
    }

    async fn delete_table(&self, table: &str) -> Result<(), StoreError> {
        self.sheets
            .write()
            .remove(table)
            .map(|_| ())
            .ok_or_else(|| missing(table))
    }

    async fn append_row(&self, table: &str, values: Row) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write();
        let sheet = sheets.get_mut(table).ok_or_else(|| missing(table))?;
        sheet.rows.push(values);
        Ok(())
    }

    async fn row_count(&self, table: &str) -> Result<usize, StoreError> {
        let sheets = self.sheets.read();
        let sheet = sheets.get(table).ok_or_else(|| missing(table))?;
        Ok(sheet.rows.len())
    }

    async fn read_rows(
        &self,
        table: &str,
        start_row: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<Vec<Row>, StoreError> {
        let sheets = self.sheets.read();
        let sheet = sheets.get(table).ok_or_else(|| missing(table))?;
        Ok(sheet
            .rows
            .iter()
            .skip(start_row)
            .take(row_count)
            .map(|row| fit_row(row.clone(), col_count))
            .collect())
    }

    async fn delete_row(&self, table: &str, row_index: usize) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write();
        let sheet = sheets.get_mut(table).ok_or_else(|| missing(table))?;
        if row_index >= sheet.rows.len() {
            return Err(StoreError::RowOutOfRange {
                table: table.to_string(),
                index: row_index,
                len: sheet.rows.len(),
            });
        }
        sheet.rows.remove(row_index);
        Ok(())
    }

    async fn sort_rows(&self, table: &str, column: usize) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write();
        let sheet = sheets.get_mut(table).ok_or_else(|| missing(table))?;
        sort_by_column(&mut sheet.rows, column);
        Ok(())
    }
}
