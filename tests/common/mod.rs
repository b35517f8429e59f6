#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use cheetah_run::GameSession;
use cheetah_run::ecs::components::{Hazard, Hitbox, Pickup, Position};
use cheetah_run::ecs::resources::{GameConfig, TelemetryEvent};
use cheetah_run::model::{GameResults, HazardKind, PickupKind};

pub const TICK_MS: u64 = 50;

/// A config with the spawner and month progression pushed out past any
/// realistic test horizon, so scenarios control the world themselves.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        spawn_interval_ms: 3_600_000,
        month_interval_min_ms: 3_600_000,
        month_interval_max_ms: 3_600_000,
        ..GameConfig::default()
    }
}

pub fn session_with(config: GameConfig, seed: u64) -> GameSession {
    GameSession::with_id(1, config, seed)
}

pub fn quiet_session(seed: u64) -> GameSession {
    session_with(quiet_config(), seed)
}

/// Run for `ms` of play time, discarding the outputs.
pub fn tick_millis(session: &mut GameSession, ms: u64) {
    for _ in 0..ms / TICK_MS {
        session.tick();
    }
}

/// Run for `ms` of play time, collecting every patch, telemetry event, and
/// the results if they land inside the window.
pub fn run_collecting(
    session: &mut GameSession,
    ms: u64,
) -> (
    Vec<serde_json::Value>,
    Vec<TelemetryEvent>,
    Option<GameResults>,
) {
    let mut patches = Vec::new();
    let mut telemetry = Vec::new();
    let mut results = None;
    for _ in 0..ms / TICK_MS {
        let out = session.tick();
        if let Some(patch) = out.update {
            patches.push(patch);
        }
        telemetry.extend(out.telemetry);
        if out.results.is_some() {
            results = out.results;
        }
    }
    (patches, telemetry, results)
}

/// Drop a hazard directly into the world, bypassing the spawner.
pub fn place_hazard(session: &mut GameSession, kind: HazardKind, x: f64, y: f64) -> Entity {
    let hitbox = Hitbox::from(GameConfig::default().hazard_box);
    session
        .app_mut()
        .world_mut()
        .spawn((Hazard::new(kind), Position { x, y }, hitbox))
        .id()
}

/// Drop a pickup directly into the world, bypassing the spawner.
pub fn place_pickup(session: &mut GameSession, kind: PickupKind, x: f64, y: f64) -> Entity {
    let hitbox = Hitbox::from(GameConfig::default().pickup_box);
    session
        .app_mut()
        .world_mut()
        .spawn((Pickup { kind }, Position { x, y }, hitbox))
        .id()
}

pub fn entity_exists(session: &mut GameSession, entity: Entity) -> bool {
    session.app_mut().world().get_entity(entity).is_ok()
}

pub fn position_of(session: &mut GameSession, entity: Entity) -> Position {
    *session
        .app_mut()
        .world()
        .get::<Position>(entity)
        .expect("entity should have a position")
}
