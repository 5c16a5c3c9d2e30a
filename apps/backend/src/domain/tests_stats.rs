use crate::domain::play::{PlayEvent, PlayKind, PlayType};
use crate::domain::player::PlayerRef;
use crate::domain::stats::{aggregate, points_for, GameReport, StatCounters, REPORT_HEADERS};

fn ev(game_id: &str, name: &str, play: &str) -> PlayEvent {
    let player = PlayerRef::parse(name).unwrap();
    PlayEvent {
        timestamp: None,
        game_id: game_id.to_string(),
        player_number: player.number,
        player_name: player.name,
        play: PlayKind::from_code(play),
        play_id: String::new(),
    }
}

#[test]
fn alice_and_bob_box_score() {
    let events = vec![
        ev("G1", "Alice", "3P_MADE"),
        ev("G1", "Alice", "3P_MISSED"),
        ev("G1", "Bob", "FT_MADE"),
    ];

    let report = GameReport::from_events("G1", &events);

    assert_eq!(
        report.rows(),
        vec![
            ("Alice".to_string(), 3, 1, 2, 1, 2, 0, 0),
            ("Bob".to_string(), 1, 0, 0, 0, 0, 1, 1),
        ]
    );
    assert_eq!(report.total_score, 4);
}

#[test]
fn transition_table() {
    let cases = [
        (PlayType::TwoMade, StatCounters { pts: 2, fgm: 1, fga: 1, ..Default::default() }),
        (PlayType::TwoMissed, StatCounters { fga: 1, ..Default::default() }),
        (
            PlayType::ThreeMade,
            StatCounters { pts: 3, fgm: 1, fga: 1, tpm: 1, tpa: 1, ..Default::default() },
        ),
        (PlayType::ThreeMissed, StatCounters { fga: 1, tpa: 1, ..Default::default() }),
        (PlayType::FreeThrowMade, StatCounters { pts: 1, ftm: 1, fta: 1, ..Default::default() }),
        (PlayType::FreeThrowMissed, StatCounters { fta: 1, ..Default::default() }),
    ];

    for (play, expected) in cases {
        let mut counters = StatCounters::default();
        counters.apply(play);
        assert_eq!(counters, expected, "{play}");
    }
}

#[test]
fn lines_follow_first_appearance() {
    let events = vec![
        ev("G1", "9 Zed", "2P_MISSED"),
        ev("G1", "4 Amy", "2P_MADE"),
        ev("G1", "9 Zed", "2P_MADE"),
        ev("G1", "1 Max", "FT_MISSED"),
    ];

    let names: Vec<String> = aggregate("G1", &events)
        .iter()
        .map(|l| l.player.to_string())
        .collect();
    assert_eq!(names, vec!["9 Zed", "4 Amy", "1 Max"]);
}

#[test]
fn same_name_different_number_are_separate_lines() {
    let events = vec![ev("G1", "4 Sam", "2P_MADE"), ev("G1", "7 Sam", "3P_MADE")];

    let report = GameReport::from_events("G1", &events);
    assert_eq!(report.lines.len(), 2);
    assert_eq!(
        report.line(&PlayerRef::new(Some(7), "Sam")).unwrap().counters.pts,
        3
    );
}

#[test]
fn other_games_and_unknown_plays_are_ignored() {
    let events = vec![
        ev("G2", "Alice", "3P_MADE"),
        ev("G1", "Carol", "REBOUND"),
        ev("G1", "Alice", "2P_MADE"),
        ev(" G1 ", "Alice", "FT_MADE"),
    ];

    let report = GameReport::from_events("G1", &events);
    assert_eq!(report.rows(), vec![("Alice".to_string(), 3, 1, 1, 0, 0, 1, 1)]);
    assert!(report.line(&PlayerRef::new(None, "Carol")).is_none());
    assert_eq!(points_for("G1", &events), 3);
}

#[test]
fn empty_input_yields_empty_report() {
    let report = GameReport::from_events("nonexistent", &Vec::<PlayEvent>::new());
    assert_eq!(report, GameReport::empty("nonexistent"));
    assert!(report.rows().is_empty());
    assert_eq!(report.total_score, 0);
}

#[test]
fn report_serializes_headers_rows_and_total() {
    let events = vec![ev("G1", "23 Jo", "3P_MADE")];
    let json = serde_json::to_value(GameReport::from_events("G1", &events)).unwrap();

    assert_eq!(json["gameId"], "G1");
    assert_eq!(json["headers"], serde_json::json!(REPORT_HEADERS));
    assert_eq!(json["rows"], serde_json::json!([["23 Jo", 3, 1, 1, 1, 1, 0, 0]]));
    assert_eq!(json["totalScore"], 3);
}
