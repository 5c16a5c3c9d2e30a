use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Sheets {
    Table,
    Id,
    Name,
    Header,
    CreatedAt,
}

#[derive(Iden)]
enum SheetRows {
    Table,
    Id,
    SheetId,
    Position,
    Cells,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // sheets
        manager
            .create_table(
                Table::create()
                    .table(Sheets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sheets::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Sheets::Name).string().not_null())
                    .col(ColumnDef::new(Sheets::Header).text().not_null())
                    .col(
                        ColumnDef::new(Sheets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_sheets_name")
                    .table(Sheets::Table)
                    .col(Sheets::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // sheet_rows
        manager
            .create_table(
                Table::create()
                    .table(SheetRows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SheetRows::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(SheetRows::SheetId).big_integer().not_null())
                    .col(ColumnDef::new(SheetRows::Position).big_integer().not_null())
                    .col(ColumnDef::new(SheetRows::Cells).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sheet_rows_sheet_id")
                            .from(SheetRows::Table, SheetRows::SheetId)
                            .to(Sheets::Table, Sheets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_sheet_rows_sheet_position")
                    .table(SheetRows::Table)
                    .col(SheetRows::SheetId)
                    .col(SheetRows::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_sheet_rows_sheet_position")
                    .table(SheetRows::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SheetRows::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_sheets_name")
                    .table(Sheets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Sheets::Table).to_owned())
            .await?;

        Ok(())
    }
}
