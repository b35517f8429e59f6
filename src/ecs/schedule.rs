use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one simulation frame.
/// Run manually per rendered frame via `app.world_mut().run_schedule(GameTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameTick;

/// Ordered phases within each tick.
///
/// Systems are assigned to phases via `.in_set(TickPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < PostUpdate <
/// Reactions < Last. Gameplay systems roll and emit commands in Update, the
/// command applicator mutates state in PostUpdate, and the outcome finalizer
/// runs in Reactions so it sees every mutation of the tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Reactions,
    Last,
}

/// Per-domain system sets within `TickPhase::Update`.
///
/// Cross-domain ordering:
/// ```text
/// Input → Progression → Spawning → Movement → Collision → Economy
/// ```
///
/// Spawning before movement so fresh entities get their first scroll step
/// next tick, and collision after movement so overlap tests see this
/// frame's positions. All effects go through commands, so cross-domain
/// state stays consistent regardless.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainSet {
    Input,
    Progression,
    Spawning,
    Movement,
    Collision,
    Economy,
}

fn configure_domain_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(
        (
            DomainSet::Input,
            DomainSet::Progression,
            DomainSet::Spawning,
            DomainSet::Movement,
            DomainSet::Collision,
            DomainSet::Economy,
        )
            .chain()
            .in_set(TickPhase::Update),
    );
}

/// Build a configured `GameTick` schedule with phase ordering.
pub fn configure_game_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(GameTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            TickPhase::PreUpdate,
            TickPhase::Update,
            TickPhase::PostUpdate,
            TickPhase::Reactions,
            TickPhase::Last,
        )
            .chain(),
    );
    configure_domain_ordering(&mut schedule);
    schedule.add_systems(advance_clock.in_set(TickPhase::Last));
    schedule
}
