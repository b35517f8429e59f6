//! Run progression: the one-second countdown and the randomized month
//! deadline.
//!
//! The month interval is resampled here, immediately on firing, so the next
//! deadline exists before the command is even applied. Month effects (season
//! change, win check) go through the applicator.

use bevy_app::{App, Plugin};
use bevy_ecs::message::MessageWriter;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Res, ResMut};
use rand::Rng;

use crate::ecs::clock::GameClock;
use crate::ecs::commands::GameCommand;
use crate::ecs::conditions::{game_active, month_due, second_elapsed};
use crate::ecs::resources::{GameConfig, MonthTimer, ProgressionRng};
use crate::ecs::schedule::{DomainSet, GameTick};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            (
                countdown.run_if(second_elapsed),
                advance_month.run_if(month_due),
            )
                .chain()
                .run_if(game_active)
                .in_set(DomainSet::Progression),
        );
    }
}

fn countdown(mut commands: MessageWriter<GameCommand>) {
    commands.write(GameCommand::CountdownTick);
}

fn advance_month(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut timer: ResMut<MonthTimer>,
    mut rng: ResMut<ProgressionRng>,
    mut commands: MessageWriter<GameCommand>,
) {
    commands.write(GameCommand::AdvanceMonth);

    let interval = rng
        .0
        .random_range(config.month_interval_min_ms..=config.month_interval_max_ms);
    timer.next_due = clock.now.after_millis(interval);
}
