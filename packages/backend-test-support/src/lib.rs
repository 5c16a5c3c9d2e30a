//! Shared helpers for scorebook backend tests: one-shot logging setup and
//! problem+json assertions that do not depend on backend types.

pub mod logging;
pub mod problem_details;
