//! Core simulation for an endless-runner survival game: a cheetah mother
//! leads four cubs through 18 in-game months of hazards, pickups, and
//! seasons inside a ~120 second session.
//!
//! The crate is headless. [`session::GameSession`] is the host boundary:
//! push raw input in, tick once per rendered frame, read back a
//! changed-field patch, telemetry, and eventually [`model::GameResults`].
//! Everything underneath runs on a fixed 50 ms tick inside a `bevy_ecs`
//! world — see [`ecs::build_game_app`] for the wiring.

pub mod ecs;
pub mod id;
pub mod model;
pub mod session;

pub use id::IdGenerator;
pub use model::{
    Achievement, AchievementTier, DeathCause, GameResults, HazardKind, PickupKind, Season,
    TerminalCause,
};
pub use session::{GameSession, TickOutput};
