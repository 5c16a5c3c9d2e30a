//! Relational table store backed by SeaORM.
//!
//! Each logical table is a row in `sheets`; its data rows live in
//! `sheet_rows` ordered by `position`, cells encoded as a JSON array.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use time::OffsetDateTime;

use super::{fit_row, sort_by_column, Row, StoreError, TableStore};
use crate::entities::{sheet_rows, sheets, SheetRows, Sheets};

#[derive(Debug, Clone)]
pub struct SeaTableStore {
    db: DatabaseConnection,
}

impl SeaTableStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn find_sheet<C: ConnectionTrait>(
    conn: &C,
    table: &str,
) -> Result<Option<sheets::Model>, StoreError> {
    Ok(Sheets::find()
        .filter(sheets::Column::Name.eq(table))
        .one(conn)
        .await?)
}

async fn require_sheet<C: ConnectionTrait>(
    conn: &C,
    table: &str,
) -> Result<sheets::Model, StoreError> {
    find_sheet(conn, table)
        .await?
        .ok_or_else(|| StoreError::MissingTable(table.to_string()))
}

fn encode_cells(table: &str, row: &Row) -> Result<String, StoreError> {
    serde_json::to_string(row).map_err(|e| StoreError::Corrupt {
        table: table.to_string(),
        detail: format!("encode: {e}"),
    })
}

fn decode_cells(table: &str, model: &sheet_rows::Model) -> Result<Row, StoreError> {
    serde_json::from_str(&model.cells).map_err(|e| StoreError::Corrupt {
        table: table.to_string(),
        detail: format!("row {}: {e}", model.id),
    })
}

#[async_trait]
impl TableStore for SeaTableStore {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        Ok(find_sheet(&self.db, table).await?.is_some())
    }

    async fn create_table(&self, table: &str, header: &[&str]) -> Result<(), StoreError> {
        let header = serde_json::to_string(header).map_err(|e| StoreError::Corrupt {
            table: table.to_string(),
            detail: format!("header: {e}"),
        })?;
        let sheet = sheets::ActiveModel {
            name: Set(table.to_string()),
            header: Set(header),
            created_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        match sheet.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(StoreError::TableExists(table.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_table(&self, table: &str) -> Result<(), StoreError> {
        let txn = self.db.begin().await?;
        let sheet = require_sheet(&txn, table).await?;
        SheetRows::delete_many()
            .filter(sheet_rows::Column::SheetId.eq(sheet.id))
            .exec(&txn)
            .await?;
        Sheets::delete_by_id(sheet.id).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    async fn append_row(&self, table: &str, values: Row) -> Result<(), StoreError> {
        let cells = encode_cells(table, &values)?;
        let txn = self.db.begin().await?;
        let sheet = require_sheet(&txn, table).await?;
        let last = SheetRows::find()
            .filter(sheet_rows::Column::SheetId.eq(sheet.id))
            .order_by_desc(sheet_rows::Column::Position)
            .one(&txn)
            .await?;
        let position = last.map(|r| r.position + 1).unwrap_or(0);
        sheet_rows::ActiveModel {
            sheet_id: Set(sheet.id),
            position: Set(position),
            cells: Set(cells),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;
        Ok(())
    }

    async fn row_count(&self, table: &str) -> Result<usize, StoreError> {
        let sheet = require_sheet(&self.db, table).await?;
        let count = SheetRows::find()
            .filter(sheet_rows::Column::SheetId.eq(sheet.id))
            .count(&self.db)
            .await?;
        Ok(count as usize)
    }

    async fn read_rows(
        &self,
        table: &str,
        start_row: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<Vec<Row>, StoreError> {
        let sheet = require_sheet(&self.db, table).await?;
        if row_count == 0 {
            return Ok(Vec::new());
        }
        let models = SheetRows::find()
            .filter(sheet_rows::Column::SheetId.eq(sheet.id))
            .order_by_asc(sheet_rows::Column::Position)
            .offset(start_row as u64)
            .limit(row_count as u64)
            .all(&self.db)
            .await?;
        models
            .iter()
            .map(|m| decode_cells(table, m).map(|row| fit_row(row, col_count)))
            .collect()
    }

    async fn delete_row(&self, table: &str, row_index: usize) -> Result<(), StoreError> {
        let txn = self.db.begin().await?;
        let sheet = require_sheet(&txn, table).await?;
        let target = SheetRows::find()
            .filter(sheet_rows::Column::SheetId.eq(sheet.id))
            .order_by_asc(sheet_rows::Column::Position)
            .offset(row_index as u64)
            .one(&txn)
            .await?;
        let Some(target) = target else {
            let len = SheetRows::find()
                .filter(sheet_rows::Column::SheetId.eq(sheet.id))
                .count(&txn)
                .await? as usize;
            return Err(StoreError::RowOutOfRange {
                table: table.to_string(),
                index: row_index,
                len,
            });
        };
        SheetRows::delete_by_id(target.id).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    async fn sort_rows(&self, table: &str, column: usize) -> Result<(), StoreError> {
        let txn = self.db.begin().await?;
        let sheet = require_sheet(&txn, table).await?;
        let models = SheetRows::find()
            .filter(sheet_rows::Column::SheetId.eq(sheet.id))
            .order_by_asc(sheet_rows::Column::Position)
            .all(&txn)
            .await?;

        let mut rows = models
            .iter()
            .map(|m| decode_cells(table, m))
            .collect::<Result<Vec<Row>, _>>()?;
        sort_by_column(&mut rows, column);

        // Positions stay put; cells move between them.
        for (model, row) in models.into_iter().zip(rows.iter()) {
            let cells = encode_cells(table, row)?;
            if cells == model.cells {
                continue;
            }
            let mut active: sheet_rows::ActiveModel = model.into();
            active.cells = Set(cells);
            active.update(&txn).await?;
        }
        txn.commit().await?;
        Ok(())
    }
}
