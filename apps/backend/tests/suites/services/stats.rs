use scorebook::config::store::LogLayout;
use scorebook::domain::{GameReport, PlayerRef, StatCounters};
use scorebook::AppError;

use crate::support::build_test_state;

fn counters(report: &GameReport, player: &PlayerRef) -> StatCounters {
    report
        .line(player)
        .unwrap_or_else(|| panic!("no line for {player}"))
        .counters
}

#[tokio::test]
async fn alice_and_bob_box_score() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let game = state.games().create_game("Scrimmage").await?;
    let plays = state.plays();

    plays.record_play("Alice", "3P_MADE", &game.id).await?;
    plays.record_play("Alice", "3P_MISSED", &game.id).await?;
    plays.record_play("Bob", "FT_MADE", &game.id).await?;

    let report = state.stats().compute_stats(&game.id).await?;
    assert_eq!(
        report.rows(),
        vec![
            ("Alice".to_string(), 3, 1, 2, 1, 2, 0, 0),
            ("Bob".to_string(), 1, 0, 0, 0, 0, 1, 1),
        ]
    );
    assert_eq!(report.total_score, 4);
    Ok(())
}

#[tokio::test]
async fn unknown_game_gives_empty_report() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    state.plays().record_play("Alice", "2P_MADE", "G1").await?;

    for id in ["nonexistent", ""] {
        let report = state.stats().compute_stats(id).await?;
        assert!(report.lines.is_empty());
        assert_eq!(report.total_score, 0);
    }
    Ok(())
}

#[tokio::test]
async fn unknown_game_in_per_game_layout_gives_empty_report() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::PerGame).await?;
    let report = state.stats().compute_stats("nonexistent").await?;
    assert!(report.lines.is_empty());
    assert_eq!(report.total_score, 0);
    Ok(())
}

#[tokio::test]
async fn record_adds_exactly_one_event() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let alice = PlayerRef::new(Some(4), "Alice");
    state.plays().record_play("4 Alice", "2P_MADE", "G1").await?;
    let before = state.stats().compute_stats("G1").await?;

    state.plays().record_play("4 Alice", "3P_MISSED", "G1").await?;
    let after = state.stats().compute_stats("G1").await?;

    let (b, a) = (counters(&before, &alice), counters(&after, &alice));
    assert_eq!(a.pts, b.pts);
    assert_eq!(a.fga, b.fga + 1);
    assert_eq!(a.tpa, b.tpa + 1);
    assert_eq!(a.fgm, b.fgm);
    assert_eq!(after.total_score, before.total_score);
    Ok(())
}

#[tokio::test]
async fn delete_removes_exactly_that_contribution() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();
    plays.record_play("Alice", "2P_MADE", "G1").await?;
    let three = plays.record_play("Alice", "3P_MADE", "G1").await?.play;
    plays.record_play("Bob", "FT_MADE", "G1").await?;

    let before = state.stats().compute_stats("G1").await?;
    assert!(plays.delete_play(&three.play_id, "G1").await?);
    let after = state.stats().compute_stats("G1").await?;

    let alice = PlayerRef::new(None, "Alice");
    let (b, a) = (counters(&before, &alice), counters(&after, &alice));
    assert_eq!(b.pts - a.pts, 3);
    assert_eq!(b.tpm - a.tpm, 1);
    assert_eq!(b.fga - a.fga, 1);
    assert_eq!(before.total_score - after.total_score, 3);
    assert_eq!(
        counters(&before, &PlayerRef::new(None, "Bob")),
        counters(&after, &PlayerRef::new(None, "Bob"))
    );
    Ok(())
}

#[tokio::test]
async fn deleting_a_players_only_play_drops_the_line() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();
    plays.record_play("Alice", "2P_MADE", "G1").await?;
    let bob = plays.record_play("Bob", "2P_MISSED", "G1").await?.play;

    plays.delete_play(&bob.play_id, "G1").await?;
    let report = state.stats().compute_stats("G1").await?;
    assert_eq!(report.lines.len(), 1);
    assert!(report.line(&PlayerRef::new(None, "Bob")).is_none());
    Ok(())
}

#[tokio::test]
async fn numbered_and_unnumbered_players_are_distinct() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::Shared).await?;
    let plays = state.plays();
    plays.record_play("23 Jordan", "2P_MADE", "G1").await?;
    plays.record_play("Jordan", "2P_MADE", "G1").await?;
    plays.record_play("45 Jordan", "FT_MADE", "G1").await?;

    let report = state.stats().compute_stats("G1").await?;
    let names: Vec<String> = report.rows().into_iter().map(|r| r.0).collect();
    assert_eq!(names, vec!["23 Jordan", "Jordan", "45 Jordan"]);
    assert_eq!(report.total_score, 5);
    Ok(())
}
