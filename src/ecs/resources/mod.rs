pub mod config;
pub mod event_log;
pub mod game_data;
pub mod outbox;
pub mod sim_resources;

pub use config::{GameConfig, HitboxSize, SpawnWeights};
pub use event_log::{EventLog, TelemetryEvent, TelemetryKind};
pub use game_data::GameData;
pub use outbox::UpdateOutbox;
pub use sim_resources::{
    BurstTimer, FamilyEntities, GameStatus, InputState, MonthTimer, ProgressionRng, SessionId,
    SimRng, SpawnRng, TelemetryIds, distribute_rng,
};
