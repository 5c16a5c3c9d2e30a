//! Store and play-log settings read from the environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;

/// Which table store backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Memory,
    Database,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "database" | "db" => Ok(StoreBackend::Database),
            other => Err(AppError::config(format!(
                "SCOREBOOK_STORE must be 'memory' or 'database', got '{other}'"
            ))),
        }
    }
}

/// Where play events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLayout {
    /// One `Plays` table with a `gameId` column.
    #[default]
    Shared,
    /// One `Game_<id>` table per game.
    PerGame,
}

impl LogLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLayout::Shared => "shared",
            LogLayout::PerGame => "per_game",
        }
    }
}

impl FromStr for LogLayout {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(LogLayout::Shared),
            "per_game" | "per-game" => Ok(LogLayout::PerGame),
            other => Err(AppError::config(format!(
                "SCOREBOOK_PLAY_LOG must be 'shared' or 'per_game', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub layout: LogLayout,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            database_url: None,
            layout: LogLayout::Shared,
            timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("SCOREBOOK_STORE") {
            Some(v) => v.parse()?,
            None => StoreBackend::default(),
        };
        let layout = match lookup("SCOREBOOK_PLAY_LOG") {
            Some(v) => v.parse()?,
            None => LogLayout::default(),
        };
        let timeout_ms = match lookup("SCOREBOOK_STORE_TIMEOUT_MS") {
            Some(v) => v.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "SCOREBOOK_STORE_TIMEOUT_MS must be a positive integer, got '{v}'"
                ))
            })?,
            None => DEFAULT_STORE_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            return Err(AppError::config("SCOREBOOK_STORE_TIMEOUT_MS must be > 0"));
        }

        let database_url = match backend {
            StoreBackend::Database => Some(must_var(&lookup, "DATABASE_URL")?),
            StoreBackend::Memory => lookup("DATABASE_URL"),
        };

        Ok(Self {
            backend,
            database_url,
            layout,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Get required variable or return error
fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
