//! End-to-end runs over raw JSON snapshots, the same shape the server
//! delivers to the move endpoint.

use snakepilot::{
    gridworld::{models::GameState, types::Turn},
    pilot::{error::PilotError, Pilot, ShortestPilot},
};

fn state(json: &str) -> GameState {
    serde_json::from_str(json).expect("fixture must deserialize")
}

/// 3 rows by 5 columns: head at (1, 1) facing north, food at (2, 0), a rival
/// body segment at (1, 0). The only shortest path drops south through
/// (2, 1), which is a reversal for a north-facing snake; the west side is
/// blocked, so the east probe decides and the answer is a right turn.
const BOXED_WEST: &str = r#"{
    "you": "me",
    "board": [
        [null, null, null, null, null],
        [{"player": "rival"}, {"player": "me", "head": "N"}, null, null, null],
        ["🍎", null, null, null, null]
    ]
}"#;

#[test]
fn shortest_path_pipeline_resolves_the_first_hop() {
    let turn = ShortestPilot.next_turn(&state(BOXED_WEST)).unwrap();
    assert_eq!(turn, Some(Turn::Right));
}

#[test]
fn the_pipeline_is_idempotent_per_snapshot() {
    let snapshot = state(BOXED_WEST);
    let first = ShortestPilot.next_turn(&snapshot).unwrap();
    let second = ShortestPilot.next_turn(&snapshot).unwrap();
    assert_eq!(first, second);
}

#[test]
fn a_free_first_hop_uses_the_turn_table() {
    // food due east of an east-facing head: straight ahead.
    let turn = ShortestPilot
        .next_turn(&state(
            r#"{
                "you": "me",
                "board": [
                    [null, null, null],
                    [{"player": "me", "head": "E"}, null, "🍎"],
                    [null, null, null]
                ]
            }"#,
        ))
        .unwrap();
    assert_eq!(turn, Some(Turn::Straight));
}

#[test]
fn a_reversal_with_both_sides_walled_yields_no_safe_turn() {
    // north-facing head with rivals on both flanks and the food behind it.
    let turn = ShortestPilot
        .next_turn(&state(
            r#"{
                "you": "me",
                "board": [
                    [null, null, null],
                    [{"player": "a"}, {"player": "me", "head": "N"}, {"player": "b"}],
                    ["🍎", null, null]
                ]
            }"#,
        ))
        .unwrap();
    assert_eq!(turn, None);
}

#[test]
fn walled_off_food_fails_with_unreachable() {
    let result = ShortestPilot.next_turn(&state(
        r#"{
            "you": "me",
            "board": [
                [null, {"player": "wall"}, null],
                [null, {"player": "wall"}, {"player": "me", "head": "N"}],
                ["🍎", {"player": "wall"}, null]
            ]
        }"#,
    ));
    assert!(matches!(result, Err(PilotError::Unreachable { .. })));
}

#[test]
fn a_snapshot_without_our_head_fails_with_agent_not_found() {
    let result = ShortestPilot.next_turn(&state(
        r#"{
            "you": "me",
            "board": [
                [{"player": "someone", "head": "S"}, null],
                ["🍎", null]
            ]
        }"#,
    ));
    assert_eq!(result, Err(PilotError::AgentNotFound("me".to_owned())));
}

#[test]
fn a_snapshot_without_food_fails_with_target_not_found() {
    let result = ShortestPilot.next_turn(&state(
        r#"{
            "you": "me",
            "board": [
                [{"player": "me", "head": "S"}, null],
                [null, null]
            ]
        }"#,
    ));
    assert_eq!(result, Err(PilotError::TargetNotFound));
}
