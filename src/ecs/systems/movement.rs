//! Per-tick motion: world scroll, car drift, and family lane tweens.
//!
//! Spawned entities scroll downward at the current family speed (the world
//! moves, the family stays at a fixed row). Cars additionally drift
//! horizontally. The family's x follows its `LaneTween`, eased so a lane
//! change reads as a slide rather than a teleport.

use bevy_app::{App, Plugin};
use bevy_ecs::query::{Or, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::ecs::clock::GameClock;
use crate::ecs::components::{Drift, Hazard, LaneTween, Pickup, Position};
use crate::ecs::conditions::game_active;
use crate::ecs::resources::GameData;
use crate::ecs::schedule::{DomainSet, GameTick};
use crate::ecs::time::{MILLIS_PER_SECOND, TICK_MS};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            (scroll_entities, apply_lane_tweens)
                .chain()
                .run_if(game_active)
                .in_set(DomainSet::Movement),
        );
    }
}

#[allow(clippy::type_complexity)]
fn scroll_entities(
    data: Res<GameData>,
    mut movers: Query<(&mut Position, Option<&Drift>), Or<(With<Hazard>, With<Pickup>)>>,
) {
    let dt = TICK_MS as f64 / MILLIS_PER_SECOND as f64;
    for (mut pos, drift) in movers.iter_mut() {
        pos.y += data.speed * dt;
        if let Some(drift) = drift {
            pos.x += drift.dx * dt;
        }
    }
}

fn apply_lane_tweens(clock: Res<GameClock>, mut family: Query<(&mut Position, &LaneTween)>) {
    for (mut pos, tween) in family.iter_mut() {
        pos.x = tween.x_at(clock.now);
    }
}
