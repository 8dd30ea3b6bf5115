//! # Client Reconciliation Scenarios
//!
//! End-to-end checks driven through the wire format, the way a socket would
//! feed the client:
//!
//! 1. **Effects**: melee pulses expire on the clock, not on broadcasts
//! 2. **Cache-first selection**: cached attributes show without a request
//! 3. **Stale responses**: a late reply is cached but never shown
//! 4. **Despawn**: the panel closes and the cache forgets the unit
//! 5. **Session restart**: nothing cached survives into the next game
//!
//! Run with: cargo test --package rampart_client --test scenarios

use rampart_client::{outbound_channel, BoardClick, ClientConfig, GameClient, OutboundDrain};
use rampart_shared::{EntityId, Vec2};
use rampart_ui::{EffectDirective, EffectKind, ManualClock, RenderCommand, Selection, UIRenderer};

const ME: i64 = 1;

fn connected_client(start_ms: u64) -> (ManualClock, GameClient<ManualClock>, OutboundDrain) {
    let clock = ManualClock::new(start_ms);
    let (queue, drain) = outbound_channel(64);
    let mut client = GameClient::new(ClientConfig::default(), clock.clone(), queue);

    client
        .handle_text(&format!(r#"{{"type":"PlayerId","data":{ME}}}"#))
        .unwrap();
    client.join_lobby(0).unwrap();
    let _ = drain.drain();

    (clock, client, drain)
}

fn tower_json(id: EntityId, x: f32, y: f32) -> String {
    format!(
        r#"{{"id":{id},"shape":"Square","x":{x},"y":{y},"owner_id":{ME},"is_enemy":false,
            "current_hp":100.0,"max_hp":100.0,"is_worker":false,
            "current_mana":null,"max_mana":null,"worker_state":null}}"#
    )
}

fn game_state(units: &[String], phase: &str) -> String {
    format!(
        r#"{{"type":"GameState","data":{{"units":[{}],"players":[],"phase":"{phase}","phase_timer":30.0}}}}"#,
        units.join(",")
    )
}

fn unit_info(id: EntityId, sell_value: u32) -> String {
    boss_info(id, sell_value, false)
}

fn boss_info(id: EntityId, sell_value: u32, is_boss: bool) -> String {
    format!(
        r#"{{"type":"UnitInfo","data":{{"entity_id":{id},"attack_damage":12.0,"attack_rate":0.75,
            "attack_range":180.0,"damage_type":"FireMagical","armor":null,"is_boss":{is_boss},
            "sell_value":{sell_value}}}}}"#
    )
}

// ============================================================================
// SCENARIO A: MELEE EFFECT LIFETIME
// ============================================================================

#[test]
fn verify_melee_effect_expires_on_clock() {
    let (clock, mut client, _drain) = connected_client(1000);
    let config = ClientConfig {
        melee_ms: 100,
        ..ClientConfig::default()
    };
    let (queue, _melee_drain) = outbound_channel(8);
    let mut short = GameClient::new(config, clock.clone(), queue);
    short.join_lobby(0).unwrap();

    let event = r#"{"type":"CombatEvents","data":[{"attacker_id":1,"target_id":2,
        "attack_type":"PhysicalBasic","start_pos":{"x":0.0,"y":0.0},"end_pos":{"x":50.0,"y":50.0}}]}"#;
    short.handle_text(event).unwrap();
    client.handle_text(event).unwrap();

    let effect = &short.effects().effects()[0];
    assert_eq!(effect.kind, EffectKind::Melee);
    assert_eq!(effect.started_at, 1000);

    match short.effects().render(1050).as_slice() {
        [EffectDirective::Melee {
            center,
            radius,
            color,
            ..
        }] => {
            assert_eq!(*center, Vec2::new(50.0, 50.0));
            assert!((radius - 10.0).abs() < 1e-4);
            assert!((color.a - 0.5).abs() < 1e-4);
        }
        other => panic!("expected one melee directive, got {other:?}"),
    }

    clock.set(1101);
    let mut renderer = UIRenderer::new();
    let batches = short.render_frame(&mut renderer);
    assert!(batches.is_empty());
    assert!(short.effects().is_empty());

    // The default 200 ms pulse outlives the short one
    assert!(!client.effects().effects()[0].is_expired(1101));
    assert!(client.effects().effects()[0].is_expired(1200));
}

#[test]
fn verify_projectile_travels_with_trail_behind() {
    let (clock, mut client, _drain) = connected_client(0);
    client
        .handle_text(
            r#"{"type":"CombatEvents","data":[{"attacker_id":1,"target_id":2,
            "attack_type":"FireMagical","start_pos":{"x":0.0,"y":0.0},"end_pos":{"x":300.0,"y":0.0}}]}"#,
        )
        .unwrap();

    clock.set(150);
    let mut renderer = UIRenderer::new();
    let batches = client.render_frame(&mut renderer);

    let circles: Vec<(Vec2, f32)> = batches[0]
        .commands
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 2);
    assert!((circles[0].0.x - 150.0).abs() < 1e-3);
    assert!(circles[0].1 > circles[1].1);
}

// ============================================================================
// SCENARIO B: CACHE-FIRST SELECTION
// ============================================================================

#[test]
fn verify_cached_sell_value_shows_without_request() {
    let (_clock, mut client, drain) = connected_client(0);
    client
        .handle_text(&game_state(&[tower_json(42, 90.0, 90.0)], "Build"))
        .unwrap();

    client.handle_text(&unit_info(42, 75)).unwrap();
    client.select_unit(42).unwrap();

    let view = client.panel().view();
    assert!(view.visible);
    assert_eq!(view.sell_value_label().as_deref(), Some("75g"));
    assert!(view.sell_action.is_available());
    assert!(drain.drain().is_empty(), "no detail request for a cached unit");
}

#[test]
fn verify_first_selection_requests_detail() {
    let (_clock, mut client, drain) = connected_client(0);
    client
        .handle_text(&game_state(&[tower_json(42, 90.0, 90.0)], "Build"))
        .unwrap();

    assert_eq!(client.select_at(90.0, 90.0).unwrap(), BoardClick::Selected(42));
    assert_eq!(
        drain.drain_json().unwrap(),
        vec![r#"{"action":"requestUnitInfo","payload":{"entity_id":42}}"#.to_string()]
    );

    client.handle_text(&unit_info(42, 75)).unwrap();
    let rows: Vec<&str> = client
        .panel()
        .view()
        .stats
        .iter()
        .map(|row| row.value.as_str())
        .collect();
    assert_eq!(rows, vec!["12", "0.75/s", "180", "FireMagical"]);
}

// ============================================================================
// SCENARIO C: STALE RESPONSE GUARD
// ============================================================================

#[test]
fn verify_stale_response_cached_not_shown() {
    let (_clock, mut client, drain) = connected_client(0);
    client
        .handle_text(&game_state(
            &[tower_json(42, 90.0, 90.0), tower_json(99, 210.0, 90.0)],
            "Build",
        ))
        .unwrap();

    client.select_unit(42).unwrap();
    client.select_unit(99).unwrap();
    assert_eq!(drain.drain().len(), 2);

    client.handle_text(&unit_info(42, 50)).unwrap();

    let view = client.panel().view();
    assert_eq!(view.entity_id, Some(99));
    assert!(view.stats.is_empty());
    assert!(view.sell_value.is_none());
    assert!(client.panel().cache().get(42).is_some());

    // Reselecting 42 shows the cached reply without another request
    client.select_unit(42).unwrap();
    assert_eq!(client.panel().view().sell_value, Some(50));
    assert!(drain.drain().is_empty());
}

// ============================================================================
// SCENARIO D: DESPAWN AND SELL
// ============================================================================

#[test]
fn verify_despawn_closes_panel_and_evicts() {
    let (_clock, mut client, _drain) = connected_client(0);
    client
        .handle_text(&game_state(&[tower_json(42, 90.0, 90.0)], "Build"))
        .unwrap();
    client.select_unit(42).unwrap();
    client.handle_text(&unit_info(42, 75)).unwrap();

    client.handle_text(&game_state(&[], "Combat")).unwrap();

    assert_eq!(client.panel().selection(), Selection::Unselected);
    assert!(client.panel().cache().get(42).is_none());
}

#[test]
fn verify_sell_follows_build_phase() {
    let (_clock, mut client, drain) = connected_client(0);
    let towers = [tower_json(42, 90.0, 150.0)];
    client.handle_text(&game_state(&towers, "Combat")).unwrap();
    client.select_unit(42).unwrap();
    let _ = drain.drain();

    assert!(!client.invoke_sell().unwrap());

    client.handle_text(&game_state(&towers, "Build")).unwrap();
    assert!(client.invoke_sell().unwrap());
    assert_eq!(
        drain.drain_json().unwrap(),
        vec![r#"{"action":"sell","payload":{"row":2,"col":1}}"#.to_string()]
    );
    assert!(!client.panel().view().visible);
}

// ============================================================================
// SCENARIO E: SESSION RESTART
// ============================================================================

#[test]
fn verify_rejoin_requests_detail_again() {
    let (_clock, mut client, drain) = connected_client(0);
    client
        .handle_text(&game_state(&[tower_json(7, 90.0, 90.0)], "Build"))
        .unwrap();
    client.handle_text(&boss_info(7, 75, true)).unwrap();

    client.leave_session().unwrap();
    assert!(client.panel().cache().get(7).is_none());

    client.join_lobby(1).unwrap();
    client
        .handle_text(&game_state(&[tower_json(7, 90.0, 90.0)], "Build"))
        .unwrap();
    let _ = drain.drain();

    assert!(client.select_unit(7).unwrap());
    assert_eq!(
        drain.drain_json().unwrap(),
        vec![r#"{"action":"requestUnitInfo","payload":{"entity_id":7}}"#.to_string()]
    );
    let view = client.panel().view();
    assert!(view.sell_value.is_none());
    assert!(!view.is_boss);
}

#[test]
fn verify_detail_reply_after_leaving_is_dropped() {
    let (_clock, mut client, drain) = connected_client(0);
    client
        .handle_text(&game_state(&[tower_json(7, 90.0, 90.0)], "Build"))
        .unwrap();
    client.select_unit(7).unwrap();
    client.leave_session().unwrap();

    client.handle_text(&unit_info(7, 75)).unwrap();
    assert!(client.panel().cache().is_empty());

    client.join_lobby(0).unwrap();
    client
        .handle_text(&game_state(&[tower_json(7, 90.0, 90.0)], "Build"))
        .unwrap();
    let _ = drain.drain();
    client.select_unit(7).unwrap();
    assert_eq!(drain.drain().len(), 1, "fresh game asks again");
}

// ============================================================================
// SCENARIO F: BUILDING
// ============================================================================

#[test]
fn verify_empty_cell_click_places_selected_shape() {
    let (_clock, mut client, drain) = connected_client(0);
    client
        .handle_text(&game_state(&[tower_json(42, 90.0, 90.0)], "Build"))
        .unwrap();
    client.set_build_shape(rampart_shared::Shape::Circle);

    assert!(matches!(client.select_at(310.0, 130.0).unwrap(), BoardClick::Placed(_)));
    assert_eq!(client.select_at(700.0, 130.0).unwrap(), BoardClick::Ignored);
    assert_eq!(
        drain.drain_json().unwrap(),
        vec![r#"{"action":"place","payload":{"shape":"Circle","row":2,"col":5}}"#.to_string()]
    );
}
