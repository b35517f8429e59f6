//! Host-facing session facade.
//!
//! One `GameSession` owns one run from start to finish. The host pushes raw
//! input events, calls [`GameSession::tick`] once per rendered frame, and
//! gets back a changed-field patch for its HUD, any telemetry recorded this
//! tick, and — on exactly one tick — the final results. Telemetry is
//! fire-and-forget: the host ships it or drops it, the simulation never
//! waits.

use std::sync::atomic::{AtomicU64, Ordering};

use bevy_app::App;
use bevy_ecs::message::Messages;
use serde_json::Value;

use crate::ecs::app::{build_game_app_deterministic, build_game_app_seeded};
use crate::ecs::events::InputEvent;
use crate::ecs::resources::{EventLog, GameConfig, GameData, GameStatus, TelemetryEvent, UpdateOutbox};
use crate::ecs::schedule::GameTick;
use crate::model::GameResults;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// What one tick hands back to the host.
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// JSON object of fields that changed this tick, or `None` when nothing
    /// did.
    pub update: Option<Value>,
    /// Telemetry recorded since the previous tick.
    pub telemetry: Vec<TelemetryEvent>,
    /// Final results, present on exactly one tick per session.
    pub results: Option<GameResults>,
}

/// A single run of the game, from family spawn to results.
pub struct GameSession {
    app: App,
    session_id: u64,
    results_emitted: bool,
}

impl GameSession {
    /// Start a fresh session with a process-unique ID and a random seed.
    pub fn new(config: GameConfig) -> Self {
        let session_id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            app: build_game_app_seeded(session_id, config, rand::random()),
            session_id,
            results_emitted: false,
        }
    }

    /// Start a session with a fixed seed and single-threaded executor, for
    /// replay and tests.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        let session_id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        Self::with_id(session_id, config, seed)
    }

    /// Start a deterministic session under a caller-chosen ID.
    pub fn with_id(session_id: u64, config: GameConfig, seed: u64) -> Self {
        Self {
            app: build_game_app_deterministic(session_id, config, seed),
            session_id,
            results_emitted: false,
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Queue a raw input event for the next tick.
    pub fn input(&mut self, event: InputEvent) {
        self.app
            .world_mut()
            .resource_mut::<Messages<InputEvent>>()
            .write(event);
    }

    /// Advance the simulation one frame and collect everything the host
    /// needs from it.
    pub fn tick(&mut self) -> TickOutput {
        self.app.world_mut().run_schedule(GameTick);

        let world = self.app.world_mut();
        let update = world.resource_mut::<UpdateOutbox>().drain();
        let telemetry = world.resource_mut::<EventLog>().drain();

        let results = if self.results_emitted {
            None
        } else {
            let emitted = world.resource::<GameStatus>().results().cloned();
            if emitted.is_some() {
                self.results_emitted = true;
            }
            emitted
        };

        TickOutput {
            update,
            telemetry,
            results,
        }
    }

    /// Current simulation snapshot (read-only).
    pub fn data(&self) -> &GameData {
        self.app.world().resource::<GameData>()
    }

    /// Final results, once the run is over.
    pub fn results(&self) -> Option<&GameResults> {
        self.app.world().resource::<GameStatus>().results()
    }

    pub fn is_over(&self) -> bool {
        self.results().is_some()
    }

    /// Direct access to the underlying app, for tests and tooling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::resources::TelemetryKind;

    #[test]
    fn session_ids_are_unique() {
        let a = GameSession::seeded(GameConfig::default(), 1);
        let b = GameSession::seeded(GameConfig::default(), 1);
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn first_tick_emits_game_start_telemetry() {
        let mut session = GameSession::seeded(GameConfig::default(), 5);
        let out = session.tick();
        assert!(
            out.telemetry
                .iter()
                .any(|e| e.kind == TelemetryKind::GameStart)
        );
        assert!(out.results.is_none());
    }

    #[test]
    fn quiet_tick_produces_no_update() {
        let mut session = GameSession::seeded(GameConfig::default(), 5);
        session.tick();
        // Tick 2 at 50 ms: no interval boundary, no input, nothing changes.
        let out = session.tick();
        assert!(out.update.is_none());
    }

    #[test]
    fn countdown_shows_up_in_the_patch() {
        let mut session = GameSession::seeded(GameConfig::default(), 5);
        let mut saw_time = false;
        for _ in 0..21 {
            if let Some(update) = session.tick().update {
                if update.get("timeRemaining").is_some() {
                    saw_time = true;
                }
            }
        }
        assert!(saw_time);
        assert_eq!(session.data().time_remaining, 119);
    }
}
