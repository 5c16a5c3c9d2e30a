use scorebook::config::store::LogLayout;
use scorebook::domain::{PlayKind, PlayType, PlayerRef};
use scorebook::errors::domain::{DomainError, NotFoundKind, StoreErrorKind};
use scorebook::AppError;

use crate::support::{build_test_state, faulty_state, Fault};

#[tokio::test]
async fn record_play_builds_the_event() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let game = state.games().create_game("Finals").await?;

    let recorded = state
        .plays()
        .record_play("23 Jordan", " 3P_MADE ", &game.id)
        .await?;

    assert!(recorded.persisted);
    let play = &recorded.play;
    assert!(play.play_id.starts_with('P'));
    assert_eq!(play.game_id, game.id);
    assert_eq!(play.player(), PlayerRef::new(Some(23), "Jordan"));
    assert_eq!(play.play, PlayKind::Recognized(PlayType::ThreeMade));
    assert!(play.timestamp.is_some());

    let data = state.plays().initial_game_data(&game.id).await?;
    assert_eq!(data.plays, vec![recorded.play]);
    Ok(())
}

#[tokio::test]
async fn record_play_rejects_bad_input() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();

    for (player, play_type, game_id) in [
        ("Alice", "DUNK", "G1"),
        ("Alice", "", "G1"),
        ("  ", "2P_MADE", "G1"),
        ("Alice", "2P_MADE", " "),
    ] {
        let err = plays.record_play(player, play_type, game_id).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Validation(_)),
            "({player:?}, {play_type:?}, {game_id:?}) gave {err:?}"
        );
    }
    assert!(plays.initial_game_data("G1").await?.plays.is_empty());
    Ok(())
}

#[tokio::test]
async fn plays_keep_log_order_per_game() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();

    let a1 = plays.record_play("Alice", "2P_MADE", "G1").await?.play;
    plays.record_play("Zed", "FT_MADE", "G2").await?;
    let a2 = plays.record_play("Bob", "2P_MISSED", "G1").await?.play;
    let a3 = plays.record_play("Alice", "FT_MISSED", "G1").await?.play;

    let ids: Vec<String> = plays
        .initial_game_data("G1")
        .await?
        .plays
        .into_iter()
        .map(|p| p.play_id)
        .collect();
    assert_eq!(ids, vec![a1.play_id, a2.play_id, a3.play_id]);
    Ok(())
}

#[tokio::test]
async fn delete_play_removes_exactly_one_event() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();

    plays.record_play("Alice", "3P_MADE", "G1").await?;
    let target = plays.record_play("Bob", "2P_MADE", "G1").await?.play;
    plays.record_play("Bob", "FT_MADE", "G1").await?;

    assert!(plays.delete_play(&target.play_id, "G1").await?);

    let remaining = plays.initial_game_data("G1").await?.plays;
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|p| p.play_id != target.play_id));

    // Second delete finds nothing.
    assert!(!plays.delete_play(&target.play_id, "G1").await?);
    Ok(())
}

#[tokio::test]
async fn delete_play_missing_or_blank_is_a_noop() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();
    let kept = plays.record_play("Alice", "2P_MADE", "G1").await?.play;

    assert!(!plays.delete_play("missing-id", "G1").await?);
    assert!(!plays.delete_play("", "G1").await?);
    assert!(!plays.delete_play(&kept.play_id, "").await?);
    // Right id, wrong game.
    assert!(!plays.delete_play(&kept.play_id, "G2").await?);

    assert_eq!(plays.initial_game_data("G1").await?.plays, vec![kept]);
    Ok(())
}

#[tokio::test]
async fn initial_game_data_for_unknown_or_blank_game_is_empty() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    assert!(state.plays().initial_game_data("nope").await?.plays.is_empty());
    assert!(state.plays().initial_game_data("").await?.plays.is_empty());
    Ok(())
}

#[tokio::test]
async fn per_game_layout_requires_a_log_table() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::PerGame).await?;

    let err = state
        .plays()
        .record_play("Alice", "2P_MADE", "G-unknown")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::PlayLog, _)));

    let game = state.games().create_game("Finals").await?;
    let recorded = state.plays().record_play("Alice", "2P_MADE", &game.id).await?;
    assert!(recorded.persisted);
    assert_eq!(state.plays().initial_game_data(&game.id).await?.plays.len(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_append_is_reported_not_raised() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    faulty.fail_writes(Fault::Unavailable);

    let recorded = state.plays().record_play("Alice", "3P_MADE", "G1").await?;
    assert!(!recorded.persisted);
    assert!(recorded.play.play_id.starts_with('P'));

    faulty.heal();
    assert!(state.plays().initial_game_data("G1").await?.plays.is_empty());
    Ok(())
}

#[tokio::test]
async fn per_game_existence_check_failure_surfaces() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::PerGame).await?;
    let game = state.games().create_game("Finals").await?;
    faulty.fail_reads(Fault::Unavailable);

    let err = state
        .plays()
        .record_play("Alice", "2P_MADE", &game.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Store(StoreErrorKind::Unavailable, _)));
    Ok(())
}
