use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::model::Season;

/// The single mutable simulation state for a session.
///
/// Owned by the core and mutated only by the command applicator; the host
/// reads it each frame (and receives per-field change patches through the
/// update outbox). Health and burst energy stay within [0, 100] after every
/// operation — all writes go through the clamping methods below.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    /// Surviving cubs.
    pub cubs: u32,
    /// Progression counter, 1..=18.
    pub current_month: u32,
    /// Countdown in whole seconds.
    pub time_remaining: u32,
    pub health: f64,
    pub burst_energy: f64,
    pub score: u64,
    /// Always `Season::from_month(current_month)`.
    pub season: Season,
    /// Player lane index, 0..lane_count.
    pub lane: u32,
    /// Effective scroll speed in units/second.
    pub speed: f64,
    pub speed_burst_active: bool,
    /// Rabbits collected toward the next energy refill; resets at the quota.
    pub rabbits_collected: u32,
}

impl GameData {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cubs: config.initial_cubs,
            current_month: 1,
            time_remaining: config.session_seconds,
            health: 100.0,
            burst_energy: 100.0,
            score: 0,
            season: Season::from_month(1),
            lane: config.initial_lane,
            speed: config.base_speed,
            speed_burst_active: false,
            rabbits_collected: 0,
        }
    }

    pub fn gain_health(&mut self, amount: f64) {
        self.health = (self.health + amount).min(100.0);
    }

    pub fn decay_health(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn gain_energy(&mut self, amount: f64) {
        self.burst_energy = (self.burst_energy + amount).min(100.0);
    }

    pub fn refill_energy(&mut self) {
        self.burst_energy = 100.0;
    }

    pub fn drain_energy(&mut self) {
        self.burst_energy = 0.0;
    }

    /// Recompute the effective speed from the burst and low-health state.
    /// The low-health penalty layers on top of the burst multiplier and is
    /// floored at the configured minimum.
    pub fn recompute_speed(&mut self, config: &GameConfig) {
        let mut speed = config.base_speed;
        if self.speed_burst_active {
            speed *= config.burst_multiplier;
        }
        if self.health < config.low_health_threshold {
            speed = (speed * config.low_health_multiplier).max(config.min_speed);
        }
        self.speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_state() {
        let data = GameData::new(&GameConfig::default());
        assert_eq!(data.cubs, 4);
        assert_eq!(data.current_month, 1);
        assert_eq!(data.time_remaining, 120);
        assert_eq!(data.health, 100.0);
        assert_eq!(data.burst_energy, 100.0);
        assert_eq!(data.score, 0);
        assert_eq!(data.season, Season::Spring);
        assert!(!data.speed_burst_active);
        assert_eq!(data.rabbits_collected, 0);
    }

    #[test]
    fn health_and_energy_stay_clamped() {
        let config = GameConfig::default();
        let mut data = GameData::new(&config);
        data.gain_health(500.0);
        assert_eq!(data.health, 100.0);
        data.decay_health(250.0);
        assert_eq!(data.health, 0.0);
        data.gain_energy(75.0);
        assert_eq!(data.burst_energy, 100.0);
        data.drain_energy();
        data.gain_energy(35.0);
        assert_eq!(data.burst_energy, 35.0);
    }

    #[test]
    fn burst_doubles_speed() {
        let config = GameConfig::default();
        let mut data = GameData::new(&config);
        data.speed_burst_active = true;
        data.recompute_speed(&config);
        assert_eq!(data.speed, config.base_speed * 2.0);
        data.speed_burst_active = false;
        data.recompute_speed(&config);
        assert_eq!(data.speed, config.base_speed);
    }

    #[test]
    fn low_health_penalty_layers_on_burst() {
        let config = GameConfig::default();
        let mut data = GameData::new(&config);
        data.health = 20.0;
        data.recompute_speed(&config);
        assert_eq!(data.speed, config.base_speed * 0.5);

        data.speed_burst_active = true;
        data.recompute_speed(&config);
        assert_eq!(data.speed, config.base_speed * 2.0 * 0.5);
    }

    #[test]
    fn low_health_penalty_floors_at_min_speed() {
        let mut config = GameConfig::default();
        config.base_speed = 150.0;
        let mut data = GameData::new(&config);
        data.health = 10.0;
        data.recompute_speed(&config);
        assert_eq!(data.speed, config.min_speed);
    }

    #[test]
    fn serializes_camel_case() {
        let data = GameData::new(&GameConfig::default());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["currentMonth"], 1);
        assert_eq!(json["burstEnergy"], 100.0);
        assert_eq!(json["rabbitsCollected"], 0);
    }
}
