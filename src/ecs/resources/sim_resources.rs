use std::hash::{DefaultHasher, Hash, Hasher};

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::IdGenerator;
use crate::ecs::time::GameTime;
use crate::model::{GameResults, TerminalCause};

/// Deterministic root RNG for the session.
#[derive(Resource)]
pub struct SimRng {
    pub rng: SmallRng,
    pub seed: u64,
}

// ---------------------------------------------------------------------------
// Per-domain RNG resources
// ---------------------------------------------------------------------------

macro_rules! domain_rng {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Resource)]
        pub struct $name(pub SmallRng);

        impl Default for $name {
            fn default() -> Self {
                Self(SmallRng::seed_from_u64(0))
            }
        }
    };
}

domain_rng!(SpawnRng, "Per-domain RNG for spawn rolls.");
domain_rng!(ProgressionRng, "Per-domain RNG for month interval sampling.");

/// Derive a deterministic per-domain seed from the session seed, domain
/// name, and tick count.
fn derive_domain_seed(seed: u64, domain: &str, tick: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    tick.hash(&mut hasher);
    hasher.finish()
}

/// Exclusive system that re-seeds the per-domain RNGs each tick.
/// Runs in `TickPhase::PreUpdate` before any domain systems.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimRng>().seed;
    let tick = world.resource::<crate::ecs::clock::GameClock>().tick_count;

    macro_rules! reseed {
        ($res:ty, $label:expr) => {
            world.resource_mut::<$res>().0 =
                SmallRng::seed_from_u64(derive_domain_seed(seed, $label, tick));
        };
    }

    reseed!(SpawnRng, "spawn");
    reseed!(ProgressionRng, "progression");
}

/// Session identifier handed in by the session-initiation collaborator.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub u64);

/// Generator for telemetry event IDs.
#[derive(Resource, Default)]
pub struct TelemetryIds(pub IdGenerator);

/// Termination state machine: `Active → Terminating(cause) → Over(results)`.
///
/// The applicator moves Active → Terminating the moment a terminal command
/// lands and stops applying further commands; the outcome finalizer moves
/// Terminating → Over exactly once, computing `GameResults`. Every mutating
/// system is gated on `Active`, which is the whole cancellation discipline —
/// there are no timers to tear down, only conditions that stop passing.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum GameStatus {
    Active,
    Terminating(TerminalCause),
    Over(GameResults),
}

impl GameStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    pub fn results(&self) -> Option<&GameResults> {
        match self {
            GameStatus::Over(results) => Some(results),
            _ => None,
        }
    }
}

/// Deadline for the next month advance, uniformly resampled from the
/// configured range after each advance.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MonthTimer {
    pub next_due: GameTime,
}

/// Deadline for auto-deactivating an active speed burst.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct BurstTimer {
    pub ends_at: Option<GameTime>,
}

/// Input rate-limit bookkeeping.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub last_key_at: Option<GameTime>,
    pub last_tap_at: Option<GameTime>,
    pub last_burst_at: Option<GameTime>,
}

/// The player and cub entities of this session. Collision and lane-change
/// handling address the family directly instead of re-querying markers.
#[derive(Resource, Debug, Clone)]
pub struct FamilyEntities {
    pub player: Entity,
    pub cubs: Vec<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_seeds_differ_by_domain_and_tick() {
        let a = derive_domain_seed(42, "spawn", 1);
        let b = derive_domain_seed(42, "progression", 1);
        let c = derive_domain_seed(42, "spawn", 2);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, derive_domain_seed(42, "spawn", 1));
    }

    #[test]
    fn status_transitions() {
        let status = GameStatus::Active;
        assert!(status.is_active());
        assert!(status.results().is_none());

        let status = GameStatus::Terminating(TerminalCause::Completed);
        assert!(!status.is_active());
        assert!(status.results().is_none());
    }
}
