//! Schema for the SQL-backed table store.

pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, Database, DatabaseConnection};

mod m20250901_000001_sheets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_sheets::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run a migration command against an open connection. Shared by the CLI
/// and the backend's startup path.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let defined = Migrator::migrations().len();
    let applied_before = count_applied_migrations(db).await.unwrap_or(0);

    tracing::info!(
        command = ?command,
        backend = ?backend,
        defined,
        applied = applied_before,
        "migration_start"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            let applied_after = count_applied_migrations(db).await.unwrap_or(0);
            tracing::info!(
                command = ?command,
                applied = applied_after,
                "migration_done"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(command = ?command, error = %e, "migration_failed");
            Err(e)
        }
    }
}

/// Number of applied migrations; 0 before the bookkeeping table exists.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) | Err(DbErr::Query(_)) => Ok(0),
        Err(e) => Err(e),
    }
}
