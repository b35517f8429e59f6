use serde::{Deserialize, Serialize};

/// Obstacle subtypes. Every hazard is dangerous; the kind only determines
/// the death cause reported when the player is struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Dog,
    Trap,
    Fence,
    Poacher,
    /// Full-width road hazard spanning all lanes.
    Road,
    /// Car sub-entity spawned on a road; reported as `road` on collision.
    Car,
}

impl HazardKind {
    /// Subtypes eligible for a single-lane obstacle roll.
    pub const LANE_KINDS: [HazardKind; 4] = [
        HazardKind::Dog,
        HazardKind::Trap,
        HazardKind::Fence,
        HazardKind::Poacher,
    ];

    pub fn death_cause(self) -> DeathCause {
        match self {
            HazardKind::Dog => DeathCause::Dog,
            HazardKind::Trap => DeathCause::Trap,
            HazardKind::Fence => DeathCause::Fence,
            HazardKind::Poacher => DeathCause::Poacher,
            // The whole car/road family reports a single cause.
            HazardKind::Road | HazardKind::Car => DeathCause::Road,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HazardKind::Dog => "dog",
            HazardKind::Trap => "trap",
            HazardKind::Fence => "fence",
            HazardKind::Poacher => "poacher",
            HazardKind::Road => "road",
            HazardKind::Car => "car",
        }
    }
}

/// Collectible resource subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupKind {
    Water,
    Gazelle,
    Rabbit,
}

impl PickupKind {
    pub const ALL: [PickupKind; 3] = [PickupKind::Water, PickupKind::Gazelle, PickupKind::Rabbit];

    /// Health granted on collection (before the 100-point cap).
    pub fn health_value(self) -> u32 {
        match self {
            PickupKind::Water => 15,
            PickupKind::Gazelle => 25,
            PickupKind::Rabbit => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PickupKind::Water => "water",
            PickupKind::Gazelle => "gazelle",
            PickupKind::Rabbit => "rabbit",
        }
    }
}

/// Why a run ended in death. Absent from `GameResults` on natural completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    Dog,
    Trap,
    Fence,
    Poacher,
    Road,
    Starvation,
    AllCubsLost,
}

impl DeathCause {
    pub fn as_str(self) -> &'static str {
        match self {
            DeathCause::Dog => "dog",
            DeathCause::Trap => "trap",
            DeathCause::Fence => "fence",
            DeathCause::Poacher => "poacher",
            DeathCause::Road => "road",
            DeathCause::Starvation => "starvation",
            DeathCause::AllCubsLost => "all_cubs_lost",
        }
    }
}
