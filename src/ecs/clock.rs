use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use super::time::{GameTime, TICK_MS};

/// Simulation clock resource tracking elapsed play time and tick count.
///
/// Advances by one tick ([`TICK_MS`]) per `GameTick`. The `advance_clock`
/// system moves the clock forward at the end of each tick (in
/// `TickPhase::Last`), so systems see the current time before it advances.
#[derive(Resource)]
pub struct GameClock {
    pub now: GameTime,
    pub tick_count: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            now: GameTime::ZERO,
            tick_count: 0,
        }
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.now = self.now.next_tick();
        self.tick_count += 1;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Bevy system that advances the clock by one tick. Registered in
/// `TickPhase::Last` so all other systems see the current time before it
/// advances. Keeps running after termination — only `GameData` freezes, not
/// wall time.
pub fn advance_clock(mut clock: ResMut<GameClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        let clock = GameClock::new();
        assert_eq!(clock.now, GameTime::ZERO);
        assert_eq!(clock.tick_count, 0);
    }

    #[test]
    fn advance_moves_one_tick() {
        let mut clock = GameClock::new();
        clock.advance();
        assert_eq!(clock.now.as_millis(), TICK_MS);
        assert_eq!(clock.tick_count, 1);
    }

    #[test]
    fn one_second_of_ticks() {
        let mut clock = GameClock::new();
        let per_second = 1_000 / TICK_MS;
        for _ in 0..per_second {
            clock.advance();
        }
        assert_eq!(clock.now.as_secs(), 1);
        assert_eq!(clock.tick_count, per_second);
    }
}
