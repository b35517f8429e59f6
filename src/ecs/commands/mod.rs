pub mod applicator;
mod apply_economy;
mod apply_progression;
mod apply_world;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{HazardKind, PickupKind};

pub use applicator::apply_game_commands;

/// One car riding a road hazard, pre-rolled by the spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarSpec {
    pub lane: u32,
    /// Horizontal drift in units/second, may be negative.
    pub drift: f64,
}

/// A state-change intent for the simulation.
///
/// Gameplay systems roll their randomness in `TickPhase::Update` and emit
/// fully specified commands via `MessageWriter<GameCommand>`; the exclusive
/// applicator in `TickPhase::PostUpdate` applies them in order, records
/// telemetry and changed-field updates, and flips the status to
/// `Terminating` the moment a terminal rule fires — commands queued after
/// that point in the same tick are dropped, which is what makes the five
/// terminal conditions mutually exclusive.
#[derive(Message, Debug, Clone)]
pub enum GameCommand {
    /// Move the family to a lane. Out-of-range or same-lane requests are
    /// silently ignored.
    ChangeLane { lane: u32 },

    /// Create a single-lane obstacle at the top of the field.
    SpawnHazard { kind: HazardKind, lane: u32 },
    /// Create a full-width road hazard plus its cars.
    SpawnRoad { cars: Vec<CarSpec> },
    /// Create a collectible resource at the top of the field.
    SpawnPickup { kind: PickupKind, lane: u32 },
    /// Remove an entity that left the visible field. No scoring effect.
    Despawn { entity: Entity },

    /// The player overlapped an obstacle — terminal.
    PlayerStruck { kind: HazardKind },
    /// A cub overlapped an obstacle it had not struck before.
    CubStruck {
        cub: Entity,
        hazard: Entity,
        kind: HazardKind,
    },
    /// The player overlapped a resource.
    Collect { pickup: Entity, kind: PickupKind },

    /// Activate the speed burst. A no-op unless burst energy is full.
    TriggerBurst,
    /// Auto-deactivate an expired burst.
    EndBurst,

    /// Periodic health decay and energy regeneration.
    EconomyTick,
    /// One second of the countdown elapsed.
    CountdownTick,
    /// The randomized month deadline fired.
    AdvanceMonth,
}
