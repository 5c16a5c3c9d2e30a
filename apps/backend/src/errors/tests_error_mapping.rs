// Unit tests for error mapping - pure domain logic without HTTP or store dependencies
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, StoreErrorKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation("game name is required");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "game name is required");
}

#[test]
fn maps_not_found_kinds() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::PlayLog, "no log").into();
    assert_eq!(app.code(), ErrorCode::PlayLogNotFound);

    let app: AppError =
        DomainError::not_found(NotFoundKind::Other("Thing".into()), "missing").into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::PlayerNumber, "taken").into();
    assert_eq!(app.code().as_str(), "PLAYER_NUMBER_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict").into();
    assert_eq!(app.code(), ErrorCode::Conflict);
}

#[test]
fn maps_store_errors() {
    let app: AppError = DomainError::store(StoreErrorKind::Timeout, "slow").into();
    assert!(matches!(app, AppError::StoreTimeout { .. }));
    assert_eq!(app.status().as_u16(), 504);

    let app: AppError = DomainError::store(StoreErrorKind::Unavailable, "down").into();
    assert_eq!(app.code(), ErrorCode::StoreUnavailable);
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::store(StoreErrorKind::DataCorruption, "bad row").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::store(StoreErrorKind::Other("x".into()), "boom").into();
    assert_eq!(app.code(), ErrorCode::StoreError);
}

#[test]
fn humanized_title_uses_words() {
    assert_eq!(AppError::humanize_code("GAME_NOT_FOUND"), "Game Not Found");
}
