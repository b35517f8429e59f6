use bevy_ecs::system::Res;

use super::clock::GameClock;
use super::resources::{BurstTimer, GameConfig, GameStatus, MonthTimer};
use super::time::MILLIS_PER_SECOND;

/// True while the run has not reached a terminal state. Every mutating
/// system is gated on this; once it stops passing, the periodic processes
/// are effectively canceled.
pub fn game_active(status: Res<GameStatus>) -> bool {
    status.is_active()
}

/// True in the window between a terminal trigger and result finalization.
pub fn termination_pending(status: Res<GameStatus>) -> bool {
    matches!(*status, GameStatus::Terminating(_))
}

/// Fires once per spawn interval.
pub fn spawn_due(clock: Res<GameClock>, config: Res<GameConfig>) -> bool {
    clock.now.crossed_interval(config.spawn_interval_ms)
}

/// Fires once per economy interval (health decay / energy regen).
pub fn economy_due(clock: Res<GameClock>, config: Res<GameConfig>) -> bool {
    clock.now.crossed_interval(config.economy_interval_ms)
}

/// Fires once per second of play time, driving the countdown.
pub fn second_elapsed(clock: Res<GameClock>) -> bool {
    clock.now.crossed_interval(MILLIS_PER_SECOND)
}

/// True when the randomized month deadline has been reached.
pub fn month_due(clock: Res<GameClock>, timer: Res<MonthTimer>) -> bool {
    clock.now >= timer.next_due
}

/// True when an active burst has outlived its duration.
pub fn burst_expired(clock: Res<GameClock>, timer: Res<BurstTimer>) -> bool {
    timer.ends_at.is_some_and(|ends_at| clock.now >= ends_at)
}
