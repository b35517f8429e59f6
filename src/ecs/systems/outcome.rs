//! Outcome finalization — the single Terminating → Over transition.
//!
//! Runs in the reaction phase after the applicator, so the snapshot it reads
//! already includes every effect of the tick that triggered termination.
//! Results are computed exactly once per run.

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Res, ResMut};
use serde_json::Value;

use crate::ecs::clock::GameClock;
use crate::ecs::conditions::termination_pending;
use crate::ecs::resources::{
    EventLog, GameConfig, GameData, GameStatus, SessionId, TelemetryEvent, TelemetryIds,
    TelemetryKind,
};
use crate::ecs::schedule::{GameTick, TickPhase};
use crate::model::GameResults;

pub struct OutcomePlugin;

impl Plugin for OutcomePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            finalize_outcome
                .run_if(termination_pending)
                .in_set(TickPhase::Reactions),
        );
    }
}

fn finalize_outcome(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    data: Res<GameData>,
    session: Res<SessionId>,
    mut status: ResMut<GameStatus>,
    mut ids: ResMut<TelemetryIds>,
    mut log: ResMut<EventLog>,
) {
    let GameStatus::Terminating(cause) = &*status else {
        return;
    };
    let cause = *cause;

    let game_time = config.session_seconds.saturating_sub(data.time_remaining);
    let results = GameResults::compute(
        cause,
        data.cubs,
        data.current_month,
        data.score,
        game_time,
    );

    log.push(TelemetryEvent {
        id: ids.0.next_id(),
        session_id: session.0,
        kind: TelemetryKind::GameEnd,
        at_ms: clock.now.as_millis(),
        month: data.current_month,
        data: serde_json::to_value(&results).unwrap_or(Value::Null),
    });
    tracing::debug!(
        ?cause,
        cubs = results.cubs_survived,
        months = results.months_completed,
        score = results.final_score,
        "run finished"
    );

    *status = GameStatus::Over(results);
}
