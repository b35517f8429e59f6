use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;
use serde_json::json;

use super::clock::GameClock;
use super::commands::{GameCommand, apply_game_commands};
use super::components::{Cub, Hitbox, LaneTween, Player, Position};
use super::events::InputEvent;
use super::plugin::GamePlugin;
use super::resources::{
    BurstTimer, EventLog, FamilyEntities, GameConfig, GameData, GameStatus, InputState, MonthTimer,
    ProgressionRng, SessionId, SimRng, SpawnRng, TelemetryEvent, TelemetryIds, TelemetryKind,
    UpdateOutbox,
};
use super::schedule::{TickPhase, configure_game_schedule};
use super::time::GameTime;

/// Build a headless Bevy app holding one complete run: clock, family
/// entities, core resources, message types, domain plugins, and the command
/// applicator.
///
/// Manual tick control:
/// ```no_run
/// # use cheetah_run::ecs::{GameTick, build_game_app};
/// # use cheetah_run::ecs::resources::GameConfig;
/// let mut app = build_game_app(1, GameConfig::default());
/// for _ in 0..20 {  // 1 second of 50 ms ticks
///     app.world_mut().run_schedule(GameTick);
/// }
/// ```
pub fn build_game_app(session_id: u64, config: GameConfig) -> App {
    build_game_app_seeded(session_id, config, 42)
}

/// Build a game app with a specific RNG seed and multi-threaded executor.
pub fn build_game_app_seeded(session_id: u64, config: GameConfig, seed: u64) -> App {
    build_game_app_with_executor(session_id, config, seed, ExecutorKind::MultiThreaded)
}

/// Build a game app with single-threaded executor for reproducible
/// determinism.
///
/// Use this when exact RNG consumption order across ticks must be identical
/// across runs.
pub fn build_game_app_deterministic(session_id: u64, config: GameConfig, seed: u64) -> App {
    build_game_app_with_executor(session_id, config, seed, ExecutorKind::SingleThreaded)
}

/// Build a game app with a specific executor kind.
pub fn build_game_app_with_executor(
    session_id: u64,
    config: GameConfig,
    seed: u64,
    executor: ExecutorKind,
) -> App {
    let mut app = App::empty();

    // The first month deadline comes straight off the root RNG so two apps
    // with the same seed share their whole timeline.
    let mut root = SmallRng::seed_from_u64(seed);
    let first_month_due = GameTime::ZERO
        .after_millis(root.random_range(config.month_interval_min_ms..=config.month_interval_max_ms));

    // Core resources
    app.insert_resource(GameClock::new());
    app.insert_resource(GameData::new(&config));
    app.insert_resource(GameStatus::Active);
    app.insert_resource(EventLog::new());
    app.insert_resource(UpdateOutbox::default());
    app.insert_resource(TelemetryIds::default());
    app.insert_resource(SessionId(session_id));
    app.insert_resource(MonthTimer {
        next_due: first_month_due,
    });
    app.insert_resource(BurstTimer::default());
    app.insert_resource(InputState::default());
    app.insert_resource(SimRng { rng: root, seed });

    // Per-domain RNG resources (reseeded each tick by distribute_rng)
    app.init_resource::<SpawnRng>();
    app.init_resource::<ProgressionRng>();

    // The family: player up front, cubs trailing at fixed spacing.
    let player_x = config.lane_x(config.initial_lane);
    let world = app.world_mut();
    let player = world
        .spawn((
            Player,
            Position {
                x: player_x,
                y: config.player_y,
            },
            Hitbox::from(config.player_box),
            LaneTween::settled(player_x),
        ))
        .id();
    let cubs = (0..config.initial_cubs)
        .map(|i| {
            world
                .spawn((
                    Cub { index: i },
                    Position {
                        x: player_x,
                        y: config.player_y + config.cub_spacing * f64::from(i + 1),
                    },
                    Hitbox::from(config.cub_box),
                    LaneTween::settled(player_x),
                ))
                .id()
        })
        .collect();
    app.insert_resource(FamilyEntities { player, cubs });

    // Register message types
    MessageRegistry::register_message::<InputEvent>(app.world_mut());
    MessageRegistry::register_message::<GameCommand>(app.world_mut());

    // Build schedule with message rotation + applicator + RNG distribution
    let mut schedule = configure_game_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(TickPhase::PreUpdate));
    schedule.add_systems(super::resources::distribute_rng.in_set(TickPhase::PreUpdate));
    schedule.add_systems(apply_game_commands.in_set(TickPhase::PostUpdate));
    app.add_schedule(schedule);
    app.add_plugins(GamePlugin);

    {
        let world = app.world_mut();
        let id = world.resource_mut::<TelemetryIds>().0.next_id();
        let event = TelemetryEvent {
            id,
            session_id,
            kind: TelemetryKind::GameStart,
            at_ms: 0,
            month: 1,
            data: json!({ "seed": seed }),
        };
        world.resource_mut::<EventLog>().push(event);
    }

    app.insert_resource(config);
    app
}
