//! Game service tests.
//!
//! These tests exercise the endpoints the way a client would:
//! - Lazy creation, reset and scores across players
//! - Envelope shapes for successes and failures
//! - Concurrent access to one registry

use std::thread;

use serde_json::{json, Value};

use lumberjack_idle::service::{lock_game, ActionResult};
use lumberjack_idle::{
    ActionRequest, ApiResponse, GameConfig, GameRegistry, GameService, ManualClock, Request,
};

fn service() -> GameService<ManualClock> {
    let registry = GameRegistry::with_config(GameConfig::default(), ManualClock::new(0)).unwrap();
    GameService::with_registry(registry)
}

fn to_json(response: &ApiResponse) -> Value {
    serde_json::to_value(response).unwrap()
}

/// Looking up a player creates their game once.
#[test]
fn test_state_creates_game_lazily() {
    let service = service();

    let first = service.state("Valou").unwrap();
    let second = service.state("Valou").unwrap();

    assert_eq!(service.registry().len(), 1);
    assert_eq!(first.state.max_tree_hp, second.state.max_tree_hp);
    assert_eq!(first.state.axe_level, 1);
    assert_eq!(first.game_duration, "0s");
}

/// The state endpoint applies a due worker tick.
#[test]
fn test_state_processes_workers() {
    let service = service();
    let game = service.registry().get_or_create("p");
    {
        let mut game = lock_game(&game);
        game.state.workers.vico = 1;
        game.state.tree_hp = 100;
        game.state.max_tree_hp = 100;
    }

    service.registry().clock().advance(1_500);
    let view = service.state("p").unwrap();

    assert_eq!(view.state.tree_hp, 92);
    assert_eq!(view.game_duration, "1s");
}

/// Reset discards progress but keeps the player registered.
#[test]
fn test_reset() {
    let service = service();
    for _ in 0..20 {
        service.action(&ActionRequest::new("p", "chop")).unwrap();
    }

    let view = service.reset("p").unwrap();

    assert_eq!(view.state.stats.total_clicks, 0);
    assert_eq!(view.state.wood, 0);
    assert_eq!(service.registry().len(), 1);
}

/// Scores are ordered by beer, then prestige points, then name.
#[test]
fn test_scores_order() {
    let service = service();
    let players = [
        ("carol", 10, 0),
        ("alice", 50, 1),
        ("bob", 50, 3),
        ("dave", 10, 0),
    ];
    for (name, beer, prestige) in players {
        let game = service.registry().get_or_create(name);
        let mut game = lock_game(&game);
        game.state.beer = beer;
        game.state.prestige_points = prestige;
    }

    let names: Vec<String> = service
        .scores()
        .into_iter()
        .map(|entry| entry.player_name)
        .collect();

    assert_eq!(names, ["bob", "alice", "carol", "dave"]);
}

/// Score rows carry lifetime statistics.
#[test]
fn test_score_entry_fields() {
    let service = service();
    service.action(&ActionRequest::new("p", "chop")).unwrap();

    let json = serde_json::to_value(service.scores()).unwrap();
    let row = &json[0];

    assert_eq!(row["player_name"], "p");
    assert_eq!(row["total_clicks"], 1);
    assert_eq!(row["is_game_won"], false);
    for key in ["beer", "prestige_points", "game_duration", "total_wood"] {
        assert!(row.get(key).is_some(), "missing {key}");
    }
}

/// Successful actions return the result and the updated state.
#[test]
fn test_action_envelope() {
    let service = service();
    let response = service.handle(Request::Action(ActionRequest::new("p", "chop")));
    let json = to_json(&response);

    assert_eq!(json["success"], true);
    assert!(json.get("error").is_none());
    assert!(json["data"]["action_result"]["is_critical"].is_boolean());
    assert_eq!(json["data"]["game_state"]["stats"]["total_clicks"], 1);
    assert!(json["data"]["game_state"]["prices"].is_object());
}

/// Failures carry only the error message.
#[test]
fn test_error_envelopes() {
    let service = service();

    let cases = [
        (r#"{"endpoint":"state","player_name":""}"#, "Player name is required"),
        (
            r#"{"endpoint":"action","player_name":"p","action":"buy_worker"}"#,
            "Worker type is required",
        ),
        (
            r#"{"endpoint":"action","player_name":"p","action":"buy_upgrade"}"#,
            "Upgrade type is required",
        ),
        (
            r#"{"endpoint":"action","player_name":"p","action":"fly"}"#,
            "Unknown action: fly",
        ),
        (
            r#"{"endpoint":"action","player_name":"p","action":"upgrade_axe"}"#,
            "not enough wood: need 15, have 0",
        ),
        (
            r#"{"endpoint":"action","player_name":"p","action":"buy_worker","target":"nobody"}"#,
            "unknown worker type: nobody",
        ),
    ];

    for (line, message) in cases {
        let json = to_json(&service.handle_line(line));
        assert_eq!(json, json!({"success": false, "error": message}), "{line}");
    }
}

/// Malformed lines are answered, not fatal.
#[test]
fn test_malformed_request() {
    let service = service();

    for line in ["not json", "{}", r#"{"endpoint":"teleport"}"#] {
        let response = service.handle_line(line);
        assert!(!response.success);
        assert!(response
            .error
            .as_deref()
            .unwrap()
            .starts_with("Invalid request"));
    }
    assert!(service.handle_line(r#"{"endpoint":"health"}"#).success);
}

/// A full purchase flow through the line protocol.
#[test]
fn test_purchase_flow() {
    let service = service();
    service.state("p").unwrap();
    lock_game(&service.registry().get("p").unwrap()).state.wood = 1_000;

    let response = service.handle_line(
        r#"{"endpoint":"action","player_name":"p","action":"buy_upgrade","target":"golden_axe"}"#,
    );
    let json = to_json(&response);

    assert_eq!(json["data"]["action_result"], "Upgrade golden_axe purchased successfully");
    assert_eq!(json["data"]["game_state"]["upgrades"]["golden_axe"], 1);
    assert_eq!(json["data"]["game_state"]["wood"], 0);
    assert_eq!(json["data"]["game_state"]["prices"]["golden_axe"], 1200);
}

/// Prestige through the service reports the points gained.
#[test]
fn test_prestige_action() {
    let service = service();
    let game = service.registry().get_or_create("p");
    lock_game(&game).state.beer = 1_000;

    let data = service.action(&ActionRequest::new("p", "prestige")).unwrap();

    assert_eq!(
        data.action_result,
        ActionResult::Message("Prestige activated successfully (+10 points)".into())
    );
    assert_eq!(data.game_state.state.prestige_points, 10);
    assert!(!data.game_state.can_prestige);
}

/// Health counts active games.
#[test]
fn test_health() {
    let service = service();
    service.state("a").unwrap();
    service.state("b").unwrap();
    service.registry().clock().set(42_000);

    let json = to_json(&service.handle(Request::Health));

    assert_eq!(
        json,
        json!({"success": true, "data": {"status": "ok", "timestamp": 42_000, "active_games": 2}})
    );
}

/// Many threads chopping for overlapping players lose no clicks.
#[test]
fn test_concurrent_access() {
    let service = service();
    let players = ["a", "b", "c", "d"];
    let chops_per_thread = 250;

    thread::scope(|scope| {
        for t in 0..8 {
            let service = &service;
            scope.spawn(move || {
                let player = players[t % players.len()];
                for _ in 0..chops_per_thread {
                    service.action(&ActionRequest::new(player, "chop")).unwrap();
                    service.state(player).unwrap();
                }
            });
        }
    });

    assert_eq!(service.registry().len(), players.len());
    for entry in service.scores() {
        assert_eq!(entry.total_clicks, 2 * chops_per_thread);
    }
}
