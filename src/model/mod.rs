pub mod kinds;
pub mod outcome;
pub mod season;

pub use kinds::{DeathCause, HazardKind, PickupKind};
pub use outcome::{Achievement, AchievementTier, GameResults, TerminalCause};
pub use season::Season;
