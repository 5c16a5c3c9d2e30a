//! Infrastructure layer - database bootstrap, state building and store error mapping.

pub mod db;
pub mod state;
pub mod store_errors;
