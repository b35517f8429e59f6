//! Health/energy economy triggers.
//!
//! The periodic decay/regen pulse and the burst-expiry deadline both emit
//! commands; the actual arithmetic lives with the applicator so it lands in
//! the same ordered stream as collection and burst activation.

use bevy_app::{App, Plugin};
use bevy_ecs::message::MessageWriter;
use bevy_ecs::schedule::IntoScheduleConfigs;

use crate::ecs::commands::GameCommand;
use crate::ecs::conditions::{burst_expired, economy_due, game_active};
use crate::ecs::schedule::{DomainSet, GameTick};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            GameTick,
            (
                economy_pulse.run_if(economy_due),
                expire_burst.run_if(burst_expired),
            )
                .chain()
                .run_if(game_active)
                .in_set(DomainSet::Economy),
        );
    }
}

fn economy_pulse(mut commands: MessageWriter<GameCommand>) {
    commands.write(GameCommand::EconomyTick);
}

fn expire_burst(mut commands: MessageWriter<GameCommand>) {
    commands.write(GameCommand::EndBurst);
}
