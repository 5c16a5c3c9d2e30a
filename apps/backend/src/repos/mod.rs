//! Table-level access for the domain layer.
//!
//! Repos are thin: they encode and decode rows and translate store errors
//! into `DomainError`. Validation and orchestration live in services.

pub mod games;
pub mod plays;
pub mod roster;
pub mod tables;
