use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde_json::json;

use crate::ecs::components::{Drift, Hazard, Hitbox, LaneTween, Pickup, Position};
use crate::ecs::resources::TelemetryKind;
use crate::model::{HazardKind, PickupKind, TerminalCause};

use super::CarSpec;
use super::applicator::ApplyCtx;

/// Move the family toward a lane. Out-of-range and same-lane requests are
/// silently ignored; the input layer already filters most of these.
pub(crate) fn apply_change_lane(ctx: &mut ApplyCtx, world: &mut World, lane: u32) {
    if lane >= ctx.config.lane_count {
        tracing::warn!(lane, "lane change out of range, ignoring");
        return;
    }
    if lane == ctx.data.lane {
        return;
    }

    ctx.data.lane = lane;
    let to_x = ctx.config.lane_x(lane);

    // Player slides immediately; each cub starts a little later, producing
    // the trailing line.
    let mut targets = vec![(ctx.family.player, 0u64)];
    for (i, &cub) in ctx.family.cubs.iter().enumerate() {
        targets.push((cub, ctx.config.cub_lag_ms * (i as u64 + 1)));
    }
    for (entity, delay_ms) in targets {
        if let Some(mut tween) = world.get_mut::<LaneTween>(entity) {
            let from_x = tween.x_at(ctx.now);
            *tween = LaneTween {
                from_x,
                to_x,
                start: ctx.now,
                duration_ms: ctx.config.lane_change_duration_ms,
                delay_ms,
            };
        }
    }

    ctx.outbox.set("lane", json!(lane));
    ctx.record(TelemetryKind::LaneChange, json!({ "lane": lane }));
}

/// Create a single-lane obstacle just above the visible field.
pub(crate) fn apply_spawn_hazard(ctx: &mut ApplyCtx, world: &mut World, kind: HazardKind, lane: u32) {
    world.spawn((
        Hazard::new(kind),
        Position {
            x: ctx.config.lane_x(lane),
            y: -ctx.config.spawn_margin,
        },
        Hitbox::from(ctx.config.hazard_box),
    ));
    tracing::debug!(kind = kind.as_str(), lane, "hazard spawned");
}

/// Create a road spanning every lane, plus its pre-rolled cars.
pub(crate) fn apply_spawn_road(ctx: &mut ApplyCtx, world: &mut World, cars: &[CarSpec]) {
    let y = -ctx.config.spawn_margin;
    world.spawn((
        Hazard::new(HazardKind::Road),
        Position {
            x: ctx.config.field_width() / 2.0,
            y,
        },
        Hitbox {
            half_w: ctx.config.field_width() / 2.0,
            half_h: ctx.config.road_half_height,
        },
    ));
    for car in cars {
        world.spawn((
            Hazard::new(HazardKind::Car),
            Position {
                x: ctx.config.lane_x(car.lane),
                y,
            },
            Hitbox::from(ctx.config.car_box),
            Drift { dx: car.drift },
        ));
    }
    tracing::debug!(cars = cars.len(), "road spawned");
}

/// Create a collectible resource just above the visible field.
pub(crate) fn apply_spawn_pickup(ctx: &mut ApplyCtx, world: &mut World, kind: PickupKind, lane: u32) {
    world.spawn((
        Pickup { kind },
        Position {
            x: ctx.config.lane_x(lane),
            y: -ctx.config.spawn_margin,
        },
        Hitbox::from(ctx.config.pickup_box),
    ));
    tracing::debug!(kind = kind.as_str(), lane, "pickup spawned");
}

/// Remove an entity that scrolled out of the field. Skips entities already
/// consumed earlier in the drain.
pub(crate) fn apply_despawn(world: &mut World, entity: Entity) {
    if world.get_entity(entity).is_ok() {
        world.despawn(entity);
    }
}

/// Player hit an obstacle: terminal, cause taken from the hazard family.
pub(crate) fn apply_player_struck(ctx: &mut ApplyCtx, kind: HazardKind) {
    ctx.terminate(TerminalCause::Death(kind.death_cause()));
}

/// A cub hit an obstacle: the cub is lost, the hazard stays live for the
/// rest of the family but is disarmed for this pair. Losing the last cub is
/// terminal.
pub(crate) fn apply_cub_struck(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cub: Entity,
    hazard: Entity,
    kind: HazardKind,
) {
    // Already resolved earlier this tick (e.g. the same cub overlapped two
    // hazards at once) — a cub is lost at most once.
    let Some(slot) = ctx.family.cubs.iter().position(|&c| c == cub) else {
        return;
    };
    ctx.family.cubs.remove(slot);
    if world.get_entity(cub).is_ok() {
        world.despawn(cub);
    }
    if let Some(mut hazard) = world.get_mut::<Hazard>(hazard) {
        hazard.struck_cubs.push(cub);
    }

    ctx.data.cubs = ctx.data.cubs.saturating_sub(1);
    ctx.outbox.set("cubs", json!(ctx.data.cubs));
    ctx.record(
        TelemetryKind::CubLost,
        json!({ "cause": kind.death_cause().as_str(), "cubsRemaining": ctx.data.cubs }),
    );
    tracing::debug!(cause = kind.as_str(), remaining = ctx.data.cubs, "cub lost");

    if ctx.data.cubs == 0 {
        ctx.terminate(TerminalCause::Death(crate::model::DeathCause::AllCubsLost));
    }
}
