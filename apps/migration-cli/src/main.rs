use clap::{Parser, ValueEnum};
use migration::{migrate, Database, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Scorebook sheet store migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database URL (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
    {
        Some(url) => url,
        None => {
            eprintln!("❌ DATABASE_URL must be set (or pass --database-url)");
            std::process::exit(2);
        }
    };

    // In-memory SQLite is discarded when the process exits.
    if url.starts_with("sqlite::memory:") {
        eprintln!("❌ In-memory SQLite is not supported for CLI migrations.");
        std::process::exit(1);
    }

    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
