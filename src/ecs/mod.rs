pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod conditions;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod systems;
pub mod time;

pub use app::{
    build_game_app, build_game_app_deterministic, build_game_app_seeded,
    build_game_app_with_executor,
};
pub use clock::GameClock;
pub use commands::GameCommand;
pub use components::{Cub, Drift, Hazard, Hitbox, LaneTween, Pickup, Player, Position};
pub use conditions::game_active;
pub use events::{InputEvent, LaneDir};
pub use plugin::GamePlugin;
pub use resources::{EventLog, GameConfig, GameData, GameStatus, UpdateOutbox};
pub use schedule::{DomainSet, GameTick, TickPhase, configure_game_schedule};
pub use time::GameTime;
