use std::fmt;

/// Length of one simulation tick. The host runs one tick per rendered frame;
/// all interval constants below are multiples of this.
pub const TICK_MS: u64 = 50;

pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Countdown length of a full session.
pub const SESSION_SECONDS: u32 = 120;

/// Elapsed play time as total milliseconds since session start.
///
/// A plain `u64` wrapper — no calendar, just milliseconds. Natural `u64`
/// ordering equals chronological ordering, which is what the deadline
/// checks rely on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameTime(u64);

impl GameTime {
    pub const ZERO: GameTime = GameTime(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(secs * MILLIS_PER_SECOND)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Whole seconds elapsed.
    pub fn as_secs(self) -> u64 {
        self.0 / MILLIS_PER_SECOND
    }

    /// Time one tick later.
    pub fn next_tick(self) -> Self {
        Self(self.0 + TICK_MS)
    }

    /// Time `millis` later.
    pub fn after_millis(self, millis: u64) -> Self {
        Self(self.0 + millis)
    }

    /// Milliseconds elapsed since `earlier` (saturating).
    pub fn millis_since(self, earlier: GameTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// True when the tick that just brought the clock to `self` crossed a
    /// multiple of `interval_ms`. Never true at time zero, so interval
    /// systems first fire one full interval into the run.
    pub fn crossed_interval(self, interval_ms: u64) -> bool {
        if self.0 == 0 || interval_ms == 0 {
            return false;
        }
        let prev = self.0.saturating_sub(TICK_MS);
        self.0 / interval_ms > prev / interval_ms
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.as_secs();
        write!(f, "{}:{:02}.{:03}", secs / 60, secs % 60, self.0 % 1_000)
    }
}
