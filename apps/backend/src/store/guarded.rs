//! Timeout and retry policy around any table store.
//!
//! Every call is bounded by a timeout. Idempotent reads get a single
//! retry on a transient failure; writes are never retried, since a
//! repeated append would duplicate a play.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::{Row, StoreError, TableStore};

pub struct GuardedStore {
    inner: Arc<dyn TableStore>,
    timeout: Duration,
}

impl GuardedStore {
    pub fn new(inner: Arc<dyn TableStore>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T, Fut>(&self, op: &'static str, fut: Fut) -> Result<T, StoreError>
    where
        Fut: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                op,
                elapsed: self.timeout,
            }),
        }
    }

    async fn read_with_retry<T, F, Fut>(
        &self,
        op: &'static str,
        table: &str,
        call: F,
    ) -> Result<T, StoreError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        match self.bounded(op, call()).await {
            Err(e) if e.is_transient() => {
                warn!(store.op = op, table = %table, error = %e, "store_read_retry");
                self.bounded(op, call()).await
            }
            other => other,
        }
    }
}

#[async_trait]
impl TableStore for GuardedStore {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        self.read_with_retry("table_exists", table, || self.inner.table_exists(table))
            .await
    }

    async fn create_table(&self, table: &str, header: &[&str]) -> Result<(), StoreError> {
        self.bounded("create_table", self.inner.create_table(table, header))
            .await
    }

    async fn delete_table(&self, table: &str) -> Result<(), StoreError> {
        self.bounded("delete_table", self.inner.delete_table(table))
            .await
    }

    async fn append_row(&self, table: &str, values: Row) -> Result<(), StoreError> {
        self.bounded("append_row", self.inner.append_row(table, values))
            .await
    }

    async fn row_count(&self, table: &str) -> Result<usize, StoreError> {
        self.read_with_retry("row_count", table, || self.inner.row_count(table))
            .await
    }

    async fn read_rows(
        &self,
        table: &str,
        start_row: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<Vec<Row>, StoreError> {
        self.read_with_retry("read_rows", table, || {
            self.inner.read_rows(table, start_row, row_count, col_count)
        })
        .await
    }

    async fn delete_row(&self, table: &str, row_index: usize) -> Result<(), StoreError> {
        self.bounded("delete_row", self.inner.delete_row(table, row_index))
            .await
    }

    async fn sort_rows(&self, table: &str, column: usize) -> Result<(), StoreError> {
        self.bounded("sort_rows", self.inner.sort_rows(table, column))
            .await
    }
}
