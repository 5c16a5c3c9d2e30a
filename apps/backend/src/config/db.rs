use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Check a database URL against the profile's safety rules.
///
/// The test profile only accepts SQLite URLs or Postgres databases whose
/// name ends in `_test`.
pub fn validate_db_url(profile: DbProfile, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config("Database URL is empty"));
    }
    if profile == DbProfile::Prod || url.starts_with("sqlite:") {
        return Ok(());
    }

    let db_name = database_name(url).ok_or_else(|| {
        AppError::config(format!("Could not read a database name from URL '{url}'"))
    })?;
    if !db_name.ends_with("_test") {
        return Err(AppError::config(format!(
            "Test profile requires database name to end with '_test', but got: '{db_name}'"
        )));
    }
    Ok(())
}

/// Last path segment of a connection URL, without query string.
fn database_name(url: &str) -> Option<&str> {
    let without_query = url.split('?').next()?;
    let (_, after_scheme) = without_query.split_once("://")?;
    let (_, path) = after_scheme.split_once('/')?;
    let name = path.rsplit('/').next()?;
    (!name.is_empty()).then_some(name)
}
