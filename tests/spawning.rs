//! Spawner cadence, road composition, and offscreen cleanup.

mod common;

use common::*;
use cheetah_run::ecs::components::{Drift, Hazard, Pickup, Position};
use cheetah_run::ecs::resources::{GameConfig, TelemetryKind};
use cheetah_run::model::{HazardKind, PickupKind};

fn count_pickups(session: &mut cheetah_run::GameSession) -> usize {
    let world = session.app_mut().world_mut();
    let mut query = world.query::<&Pickup>();
    query.iter(world).count()
}

fn hazards(session: &mut cheetah_run::GameSession) -> Vec<(HazardKind, f64, bool)> {
    let world = session.app_mut().world_mut();
    let mut query = world.query::<(&Hazard, &Position, Option<&Drift>)>();
    query
        .iter(world)
        .map(|(hazard, pos, drift)| (hazard.kind, pos.x, drift.is_some()))
        .collect()
}

#[test]
fn one_wave_per_spawn_interval() {
    // All-pickup waves so nothing can end the run, and no bottom edge so
    // nothing leaves the world uncounted.
    let config = GameConfig {
        obstacle_probability: 0.0,
        despawn_margin: 1e9,
        month_interval_min_ms: 3_600_000,
        month_interval_max_ms: 3_600_000,
        ..GameConfig::default()
    };
    let mut session = session_with(config, 13);
    let (_, telemetry, _) = run_collecting(&mut session, 10_050);

    // Waves at 2, 4, 6, 8, 10 s. A pickup is either still in the world or
    // was collected by the player on its way past.
    let collected = telemetry
        .iter()
        .filter(|e| e.kind == TelemetryKind::ResourcePickup)
        .count();
    assert_eq!(count_pickups(&mut session) + collected, 5);
}

#[test]
fn road_waves_carry_one_to_three_cars() {
    let config = GameConfig {
        obstacle_probability: 1.0,
        road_probability: 1.0,
        month_interval_min_ms: 3_600_000,
        month_interval_max_ms: 3_600_000,
        ..GameConfig::default()
    };
    let mut session = session_with(config, 13);
    tick_millis(&mut session, 2_050); // one wave, still far from the family

    let spawned = hazards(&mut session);
    let roads: Vec<_> = spawned
        .iter()
        .filter(|(kind, _, _)| *kind == HazardKind::Road)
        .collect();
    let cars: Vec<_> = spawned
        .iter()
        .filter(|(kind, _, _)| *kind == HazardKind::Car)
        .collect();
    assert_eq!(roads.len(), 1);
    // The road spans the whole field.
    assert_eq!(roads[0].1, 180.0);
    assert!((1..=3).contains(&cars.len()));
    // Every car drifts.
    assert!(cars.iter().all(|(_, _, drifts)| *drifts));
}

#[test]
fn lane_hazards_sit_on_lane_centers() {
    let config = GameConfig {
        obstacle_probability: 1.0,
        road_probability: 0.0,
        month_interval_min_ms: 3_600_000,
        month_interval_max_ms: 3_600_000,
        ..GameConfig::default()
    };
    let mut session = session_with(config, 13);
    tick_millis(&mut session, 2_050);

    let spawned = hazards(&mut session);
    assert_eq!(spawned.len(), 1);
    let (kind, x, _) = spawned[0];
    assert!(HazardKind::LANE_KINDS.contains(&kind));
    assert!([45.0, 135.0, 225.0, 315.0].contains(&x));
}

#[test]
fn entities_past_the_bottom_edge_are_destroyed() {
    let mut session = quiet_session(13);
    // Default field: bottom edge plus margin is y = 860.
    let gone = place_pickup(&mut session, PickupKind::Water, 45.0, 870.0);
    let kept = place_pickup(&mut session, PickupKind::Water, 45.0, 700.0);
    session.tick();

    assert!(!entity_exists(&mut session, gone));
    assert!(entity_exists(&mut session, kept));
}
