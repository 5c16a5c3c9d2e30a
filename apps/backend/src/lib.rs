#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod commands;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;

// Re-exports for public API
pub use commands::{dispatch, Command, CommandOutput};
pub use config::db::DbProfile;
pub use config::store::{LogLayout, StoreBackend, StoreConfig};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use errors::ErrorCode;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;
pub use store::{MemoryTableStore, TableStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
