use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::GameClock;
use crate::ecs::resources::{
    BurstTimer, EventLog, FamilyEntities, GameConfig, GameData, GameStatus, SessionId,
    TelemetryEvent, TelemetryIds, TelemetryKind, UpdateOutbox,
};
use crate::ecs::time::GameTime;
use crate::model::TerminalCause;

use super::GameCommand;
use super::apply_economy;
use super::apply_progression;
use super::apply_world;

/// Context passed to all `apply_*` sub-functions, providing mutable access
/// to the extracted resources without requiring direct World access.
pub(crate) struct ApplyCtx {
    pub now: GameTime,
    pub config: GameConfig,
    pub session: SessionId,
    pub data: GameData,
    pub status: GameStatus,
    pub log: EventLog,
    pub outbox: UpdateOutbox,
    pub ids: TelemetryIds,
    pub burst: BurstTimer,
    pub family: FamilyEntities,
}

impl ApplyCtx {
    /// Record a telemetry event stamped with the session, play time, and
    /// current month.
    pub(crate) fn record(&mut self, kind: TelemetryKind, data: serde_json::Value) {
        let id = self.ids.0.next_id();
        self.log.push(TelemetryEvent {
            id,
            session_id: self.session.0,
            kind,
            at_ms: self.now.as_millis(),
            month: self.data.current_month,
            data,
        });
    }

    /// Flip the run into its terminal state. Remaining commands this tick
    /// are dropped by the applicator loop, so the first terminal rule wins.
    pub(crate) fn terminate(&mut self, cause: TerminalCause) {
        tracing::debug!(?cause, "terminal condition reached");
        self.status = GameStatus::Terminating(cause);
    }
}

/// Exclusive system that drains all pending `GameCommand` messages and
/// applies them in order. Runs in `TickPhase::PostUpdate`.
///
/// Once the status leaves `Active` — whether before this tick or mid-drain —
/// no further command mutates anything.
pub fn apply_game_commands(world: &mut World) {
    let commands: Vec<GameCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<GameCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let now = world.resource::<GameClock>().now;
    let config = world.resource::<GameConfig>().clone();
    let session = *world.resource::<SessionId>();
    let data = world.remove_resource::<GameData>().unwrap();
    let status = world.remove_resource::<GameStatus>().unwrap();
    let log = world.remove_resource::<EventLog>().unwrap();
    let outbox = world.remove_resource::<UpdateOutbox>().unwrap();
    let ids = world.remove_resource::<TelemetryIds>().unwrap();
    let burst = world.remove_resource::<BurstTimer>().unwrap();
    let family = world.remove_resource::<FamilyEntities>().unwrap();

    let mut ctx = ApplyCtx {
        now,
        config,
        session,
        data,
        status,
        log,
        outbox,
        ids,
        burst,
        family,
    };

    for cmd in commands {
        if !ctx.status.is_active() {
            break;
        }
        match cmd {
            GameCommand::ChangeLane { lane } => {
                apply_world::apply_change_lane(&mut ctx, world, lane);
            }
            GameCommand::SpawnHazard { kind, lane } => {
                apply_world::apply_spawn_hazard(&mut ctx, world, kind, lane);
            }
            GameCommand::SpawnRoad { cars } => {
                apply_world::apply_spawn_road(&mut ctx, world, &cars);
            }
            GameCommand::SpawnPickup { kind, lane } => {
                apply_world::apply_spawn_pickup(&mut ctx, world, kind, lane);
            }
            GameCommand::Despawn { entity } => {
                apply_world::apply_despawn(world, entity);
            }
            GameCommand::PlayerStruck { kind } => {
                apply_world::apply_player_struck(&mut ctx, kind);
            }
            GameCommand::CubStruck { cub, hazard, kind } => {
                apply_world::apply_cub_struck(&mut ctx, world, cub, hazard, kind);
            }
            GameCommand::Collect { pickup, kind } => {
                apply_economy::apply_collect(&mut ctx, world, pickup, kind);
            }
            GameCommand::TriggerBurst => apply_economy::apply_trigger_burst(&mut ctx),
            GameCommand::EndBurst => apply_economy::apply_end_burst(&mut ctx),
            GameCommand::EconomyTick => apply_economy::apply_economy_tick(&mut ctx),
            GameCommand::CountdownTick => apply_progression::apply_countdown_tick(&mut ctx),
            GameCommand::AdvanceMonth => apply_progression::apply_advance_month(&mut ctx),
        }
    }

    world.insert_resource(ctx.data);
    world.insert_resource(ctx.status);
    world.insert_resource(ctx.log);
    world.insert_resource(ctx.outbox);
    world.insert_resource(ctx.ids);
    world.insert_resource(ctx.burst);
    world.insert_resource(ctx.family);
}
