//! Domain systems, one plugin per concern.

pub mod collision;
pub mod economy;
pub mod input;
pub mod movement;
pub mod outcome;
pub mod progression;
pub mod spawning;

pub use collision::CollisionPlugin;
pub use economy::EconomyPlugin;
pub use input::InputPlugin;
pub use movement::MovementPlugin;
pub use outcome::OutcomePlugin;
pub use progression::ProgressionPlugin;
pub use spawning::SpawningPlugin;
