//! Property tests for stats over the full service stack (memory store).
//!
//! Properties tested:
//! - Recording order does not change any player's counters
//! - Attempts never fall below makes
//! - Total score equals the per-event point sum
//! - Deleting one play removes exactly its contribution

include!("../../common/proptest_prelude.rs");

use std::collections::HashMap;

use proptest::prelude::*;
use scorebook::config::store::LogLayout;
use scorebook::domain::{GameReport, PlayType, PlayerRef, StatCounters};
use scorebook::state::app_state::AppState;

use crate::support::build_test_state;

const PLAYERS: [&str; 4] = ["4 Alice", "Bob", "12 Cara", "Dee"];

fn shot() -> impl Strategy<Value = (&'static str, PlayType)> {
    (
        prop::sample::select(PLAYERS.to_vec()),
        prop::sample::select(PlayType::ALL.to_vec()),
    )
}

fn shot_seq(min: usize) -> impl Strategy<Value = Vec<(&'static str, PlayType)>> {
    prop::collection::vec(shot(), min..24)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(future)
}

async fn record_all(state: &AppState, game_id: &str, shots: &[(&str, PlayType)]) -> Vec<String> {
    let mut ids = Vec::with_capacity(shots.len());
    for (player, play) in shots {
        let recorded = state
            .plays()
            .record_play(player, play.code(), game_id)
            .await
            .expect("record_play");
        assert!(recorded.persisted);
        ids.push(recorded.play.play_id);
    }
    ids
}

fn counters_by_player(report: &GameReport) -> HashMap<PlayerRef, StatCounters> {
    report
        .lines
        .iter()
        .map(|l| (l.player.clone(), l.counters))
        .collect()
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Property: reversing the recording order yields the same counters
    #[test]
    fn prop_recording_order_is_irrelevant(shots in shot_seq(0)) {
        let (forward, backward) = block_on(async {
            let state = build_test_state(LogLayout::Shared).await.expect("state");
            record_all(&state, "G-fwd", &shots).await;
            let reversed: Vec<_> = shots.iter().rev().cloned().collect();
            record_all(&state, "G-rev", &reversed).await;
            (
                state.stats().compute_stats("G-fwd").await.expect("stats"),
                state.stats().compute_stats("G-rev").await.expect("stats"),
            )
        });

        prop_assert_eq!(counters_by_player(&forward), counters_by_player(&backward));
        prop_assert_eq!(forward.total_score, backward.total_score);
    }

    /// Property: makes never exceed attempts and totals add up
    #[test]
    fn prop_lines_are_consistent(shots in shot_seq(0)) {
        let report = block_on(async {
            let state = build_test_state(LogLayout::PerGame).await.expect("state");
            let game = state.games().create_game("Prop").await.expect("game");
            record_all(&state, &game.id, &shots).await;
            state.stats().compute_stats(&game.id).await.expect("stats")
        });

        for line in &report.lines {
            let c = line.counters;
            prop_assert!(c.fga >= c.fgm);
            prop_assert!(c.tpa >= c.tpm);
            prop_assert!(c.fta >= c.ftm);
            prop_assert!(c.fga >= c.tpa);
            prop_assert_eq!(c.pts, 2 * (c.fgm - c.tpm) + 3 * c.tpm + c.ftm);
        }
        let line_sum: u32 = report.lines.iter().map(|l| l.counters.pts).sum();
        let event_sum: u32 = shots.iter().map(|(_, p)| p.points()).sum();
        prop_assert_eq!(report.total_score, line_sum);
        prop_assert_eq!(report.total_score, event_sum);
    }

    /// Property: deleting a play subtracts exactly that play's points
    #[test]
    fn prop_delete_subtracts_one_play(
        (shots, victim) in shot_seq(1)
            .prop_flat_map(|s| {
                let len = s.len();
                (Just(s), 0..len)
            }),
    ) {
        let (before, after) = block_on(async {
            let state = build_test_state(LogLayout::Shared).await.expect("state");
            let ids = record_all(&state, "G1", &shots).await;
            let before = state.stats().compute_stats("G1").await.expect("stats");
            let deleted = state.plays().delete_play(&ids[victim], "G1").await.expect("delete");
            assert!(deleted);
            let after = state.stats().compute_stats("G1").await.expect("stats");
            (before, after)
        });

        let (_, play) = shots[victim];
        prop_assert_eq!(before.total_score - after.total_score, play.points());
    }
}
