//! Error codes for the Scorebook API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// Malformed request body or query
    BadRequest,

    // Resource Not Found
    /// Game not found in the registry
    GameNotFound,
    /// Game has no play log table
    PlayLogNotFound,
    /// Table missing from the store
    TableNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Jersey number already on the roster
    PlayerNumberTaken,
    /// Table already exists
    TableExists,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Store Errors
    /// Table store failure
    StoreError,
    /// Table store call exceeded its timeout
    StoreTimeout,
    /// Table store unreachable
    StoreUnavailable,
    /// Stored rows could not be decoded
    DataCorruption,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayLogNotFound => "PLAY_LOG_NOT_FOUND",
            Self::TableNotFound => "TABLE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PlayerNumberTaken => "PLAYER_NUMBER_TAKEN",
            Self::TableExists => "TABLE_EXISTS",
            Self::Conflict => "CONFLICT",

            Self::StoreError => "STORE_ERROR",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
