use scorebook::config::store::LogLayout;
use scorebook::errors::domain::{ConflictKind, DomainError};
use scorebook::repos::tables::ROSTER;
use scorebook::AppError;

use crate::support::{build_test_state, faulty_state, Fault};

#[tokio::test]
async fn roster_starts_empty() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    assert!(state.roster().list_players().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn players_are_listed_by_number() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let roster = state.roster();

    roster.add_player("23", "Jordan").await?;
    roster.add_player("7", "Kukoc").await?;
    roster.add_player("33", "Pippen").await?;

    let players = roster.list_players().await?;
    let numbers: Vec<u32> = players.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![7, 23, 33]);
    assert_eq!(players[1].display(), "23 Jordan");
    Ok(())
}

#[tokio::test]
async fn add_player_trims_input() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let player = state.roster().add_player(" 91 ", "  Rodman ").await?;

    assert_eq!(player.number, 91);
    assert_eq!(player.name, "Rodman");
    assert_eq!(state.roster().list_players().await?, vec![player]);
    Ok(())
}

#[tokio::test]
async fn add_player_rejects_invalid_input() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let roster = state.roster();

    for (number, name) in [("", "Nobody"), ("ten", "Nobody"), ("-4", "Nobody"), ("4", "  ")] {
        let err = roster.add_player(number, name).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Validation(_)),
            "({number:?}, {name:?}) should fail validation, got {err:?}"
        );
    }
    assert!(roster.list_players().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_number_is_a_conflict() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let roster = state.roster();
    roster.add_player("23", "Jordan").await?;

    let err = roster.add_player("23", "James").await.unwrap_err();
    match err {
        DomainError::Conflict(ConflictKind::PlayerNumber, detail) => {
            assert!(detail.contains("Jordan"), "detail was {detail}");
        }
        other => panic!("expected number conflict, got {other:?}"),
    }
    assert_eq!(roster.list_players().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_resort_still_adds_the_player() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    let roster = state.roster();
    roster.add_player("30", "Cy").await?;
    faulty.fail_call("sort_rows", ROSTER, Fault::Unavailable);

    let added = roster.add_player("7", "Bo").await?;
    assert_eq!(added.number, 7);

    let numbers: Vec<u32> = roster.list_players().await?.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![7, 30]);

    let err = roster.add_player("7", "Bo").await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::PlayerNumber, _)));
    Ok(())
}
