//! Collision resolution — AABB overlap tests between the family and
//! everything spawned.
//!
//! Detection only: consequences (death, cub loss, pickup payout) are
//! commands resolved by the applicator, which also enforces the
//! at-most-once rules when several overlaps land in the same tick.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::ecs::commands::GameCommand;
use crate::ecs::components::{Hazard, Hitbox, Pickup, Position, aabb_overlap};
use crate::ecs::conditions::game_active;
use crate::ecs::resources::FamilyEntities;
use crate::ecs::schedule::{DomainSet, GameTick};

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            resolve_collisions
                .run_if(game_active)
                .in_set(DomainSet::Collision),
        );
    }
}

fn resolve_collisions(
    family: Res<FamilyEntities>,
    bodies: Query<(&Position, &Hitbox)>,
    hazards: Query<(Entity, &Hazard, &Position, &Hitbox)>,
    pickups: Query<(Entity, &Pickup, &Position, &Hitbox)>,
    mut commands: MessageWriter<GameCommand>,
) {
    let Ok((player_pos, player_box)) = bodies.get(family.player) else {
        return;
    };

    // Player vs obstacles. The first hit ends the run; nothing after it
    // matters.
    for (_, hazard, pos, hitbox) in hazards.iter() {
        if aabb_overlap(player_pos, player_box, pos, hitbox) {
            commands.write(GameCommand::PlayerStruck { kind: hazard.kind });
            return;
        }
    }

    // Cubs vs obstacles. One consequence per cub per tick; pairs already
    // resolved on a previous tick are disarmed via `struck_cubs`.
    for &cub in &family.cubs {
        let Ok((cub_pos, cub_box)) = bodies.get(cub) else {
            continue;
        };
        for (hazard_entity, hazard, pos, hitbox) in hazards.iter() {
            if hazard.struck_cubs.contains(&cub) {
                continue;
            }
            if aabb_overlap(cub_pos, cub_box, pos, hitbox) {
                commands.write(GameCommand::CubStruck {
                    cub,
                    hazard: hazard_entity,
                    kind: hazard.kind,
                });
                break;
            }
        }
    }

    // Player vs resources. Only the player collects; cubs pass through.
    for (pickup_entity, pickup, pos, hitbox) in pickups.iter() {
        if aabb_overlap(player_pos, player_box, pos, hitbox) {
            commands.write(GameCommand::Collect {
                pickup: pickup_entity,
                kind: pickup.kind,
            });
        }
    }
}
