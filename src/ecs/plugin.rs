use bevy_app::{App, Plugin};

use super::systems::{
    CollisionPlugin, EconomyPlugin, InputPlugin, MovementPlugin, OutcomePlugin, ProgressionPlugin,
    SpawningPlugin,
};

/// Aggregate plugin that installs all simulation domain plugins.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            InputPlugin,
            ProgressionPlugin,
            SpawningPlugin,
            MovementPlugin,
            CollisionPlugin,
            EconomyPlugin,
            OutcomePlugin,
        ));
    }
}
