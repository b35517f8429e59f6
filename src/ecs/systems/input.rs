//! Input translation — raw host gestures into simulation commands.
//!
//! Applies the gesture thresholds and rate limits: swipes must cross the
//! configured distance, key presses honor a per-key cooldown, bursts come
//! from a double-tap or the dedicated control with its own cooldown.
//! Anything that fails a check is dropped without error.

use bevy_app::{App, Plugin};
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Res, ResMut};

use crate::ecs::clock::GameClock;
use crate::ecs::commands::GameCommand;
use crate::ecs::conditions::game_active;
use crate::ecs::events::{InputEvent, LaneDir};
use crate::ecs::resources::{GameConfig, GameData, InputState};
use crate::ecs::schedule::{DomainSet, GameTick};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            translate_input
                .run_if(game_active)
                .in_set(DomainSet::Input),
        );
    }
}

fn translate_input(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    data: Res<GameData>,
    mut state: ResMut<InputState>,
    mut events: MessageReader<InputEvent>,
    mut commands: MessageWriter<GameCommand>,
) {
    let now = clock.now;
    // Track the lane locally so several inputs in one frame chain correctly.
    let mut lane = data.lane;

    for event in events.read() {
        match *event {
            InputEvent::Swipe { dx } => {
                if dx.abs() >= config.swipe_threshold {
                    let dir = if dx < 0.0 { LaneDir::Left } else { LaneDir::Right };
                    lane = request_lane_change(lane, dir, &config, &mut commands);
                }
            }
            InputEvent::Key { dir } => {
                let ready = state
                    .last_key_at
                    .is_none_or(|last| now.millis_since(last) >= config.key_cooldown_ms);
                if ready {
                    state.last_key_at = Some(now);
                    lane = request_lane_change(lane, dir, &config, &mut commands);
                }
            }
            InputEvent::Tap => match state.last_tap_at {
                Some(last) if now.millis_since(last) <= config.double_tap_window_ms => {
                    state.last_tap_at = None;
                    commands.write(GameCommand::TriggerBurst);
                }
                _ => state.last_tap_at = Some(now),
            },
            InputEvent::BurstButton => {
                let ready = state
                    .last_burst_at
                    .is_none_or(|last| now.millis_since(last) >= config.burst_cooldown_ms);
                if ready {
                    state.last_burst_at = Some(now);
                    commands.write(GameCommand::TriggerBurst);
                }
            }
        }
    }
}

/// Emit a lane-change command one step in `dir`, or ignore the request when
/// it would leave the field. Returns the lane the family will occupy.
fn request_lane_change(
    current: u32,
    dir: LaneDir,
    config: &GameConfig,
    commands: &mut MessageWriter<GameCommand>,
) -> u32 {
    let target = match dir {
        LaneDir::Left => current.checked_sub(1),
        LaneDir::Right => Some(current + 1),
    };
    match target {
        Some(lane) if lane < config.lane_count => {
            commands.write(GameCommand::ChangeLane { lane });
            lane
        }
        _ => current,
    }
}
