//! Spawner — periodic creation of hazards and pickups, and cleanup of
//! entities that leave the visible field.
//!
//! Every spawn interval: random lane, 70/30 obstacle-vs-resource roll (the
//! split is configuration, 70/30 is the shipped default). An obstacle roll
//! may instead become a full-width road carrying 1–3 drifting cars. Subtype
//! choice goes through the per-season weight table, uniform by default.
//!
//! All randomness is rolled here; the commands the applicator receives are
//! fully specified.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::{Or, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;
use rand::rngs::SmallRng;

use crate::ecs::commands::{CarSpec, GameCommand};
use crate::ecs::components::{Hazard, Pickup, Position};
use crate::ecs::conditions::{game_active, spawn_due};
use crate::ecs::resources::{GameConfig, GameData, SpawnRng};
use crate::ecs::schedule::{DomainSet, GameTick};
use crate::model::{HazardKind, PickupKind};

pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            spawn_wave
                .run_if(game_active)
                .run_if(spawn_due)
                .in_set(DomainSet::Spawning),
        );
        app.add_systems(
            GameTick,
            despawn_offscreen
                .run_if(game_active)
                .in_set(DomainSet::Spawning),
        );
    }
}

fn spawn_wave(
    config: Res<GameConfig>,
    data: Res<GameData>,
    mut rng: ResMut<SpawnRng>,
    mut commands: MessageWriter<GameCommand>,
) {
    let rng = &mut rng.0;
    let lane = rng.random_range(0..config.lane_count);
    let weights = config.spawn_weights(data.season);

    if rng.random_bool(config.obstacle_probability) {
        if rng.random_bool(config.road_probability) {
            let count = rng.random_range(config.cars_per_road_min..=config.cars_per_road_max);
            let cars = (0..count)
                .map(|_| CarSpec {
                    lane: rng.random_range(0..config.lane_count),
                    drift: rng.random_range(-config.car_drift_limit..=config.car_drift_limit),
                })
                .collect();
            commands.write(GameCommand::SpawnRoad { cars });
        } else {
            let kind = HazardKind::LANE_KINDS[pick_weighted(rng, &weights.hazards)];
            commands.write(GameCommand::SpawnHazard { kind, lane });
        }
    } else {
        let kind = PickupKind::ALL[pick_weighted(rng, &weights.pickups)];
        commands.write(GameCommand::SpawnPickup { kind, lane });
    }
}

/// Weighted index pick. A zero total falls back to the first entry.
fn pick_weighted(rng: &mut SmallRng, weights: &[u32]) -> usize {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return 0;
    }
    let mut roll = rng.random_range(0..total);
    for (i, &w) in weights.iter().enumerate() {
        if roll < w {
            return i;
        }
        roll -= w;
    }
    weights.len() - 1
}

/// Destroy spawned entities once they scroll past the bottom edge or drift
/// out the sides. No scoring effect.
#[allow(clippy::type_complexity)]
fn despawn_offscreen(
    config: Res<GameConfig>,
    spawned: Query<(Entity, &Position), Or<(With<Hazard>, With<Pickup>)>>,
    mut commands: MessageWriter<GameCommand>,
) {
    let bottom = config.field_height + config.despawn_margin;
    let left = -config.despawn_margin;
    let right = config.field_width() + config.despawn_margin;

    for (entity, pos) in spawned.iter() {
        if pos.y > bottom || pos.x < left || pos.x > right {
            commands.write(GameCommand::Despawn { entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn weighted_pick_respects_zero_weights() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let idx = pick_weighted(&mut rng, &[0, 5, 0]);
            assert_eq!(idx, 1);
        }
    }

    #[test]
    fn weighted_pick_covers_all_indices() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[pick_weighted(&mut rng, &[1, 1, 1])] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
