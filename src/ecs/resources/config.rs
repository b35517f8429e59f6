use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::ecs::time::SESSION_SECONDS;
use crate::model::Season;

/// Axis-aligned half-extents used for overlap tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitboxSize {
    pub half_w: f64,
    pub half_h: f64,
}

/// Relative subtype weights for one season's spawn rolls.
///
/// `hazards` indexes [`crate::model::HazardKind::LANE_KINDS`] (dog, trap,
/// fence, poacher); `pickups` indexes [`crate::model::PickupKind::ALL`]
/// (water, gazelle, rabbit). Defaults are uniform; the table exists so the
/// balance pass can skew subtypes by season without touching code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnWeights {
    pub hazards: [u32; 4],
    pub pickups: [u32; 3],
}

impl Default for SpawnWeights {
    fn default() -> Self {
        Self {
            hazards: [1; 4],
            pickups: [1; 3],
        }
    }
}

/// Explicitly constructed game balance and geometry configuration.
///
/// The defaults carry the shipped game's numbers; the scenario tests pin the
/// ones that are rules rather than balance (the 70/30 obstacle/resource
/// split, pickup health values, decay/regen amounts, interval lengths).
/// Everything else is tunable data.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    // -- Intervals (ms) --
    pub spawn_interval_ms: u64,
    pub economy_interval_ms: u64,
    /// Month advance deadline, uniformly resampled from this inclusive range.
    pub month_interval_min_ms: u64,
    pub month_interval_max_ms: u64,
    pub burst_duration_ms: u64,

    // -- Session --
    pub session_seconds: u32,
    pub months_to_win: u32,
    pub initial_cubs: u32,
    pub initial_lane: u32,

    // -- Spawn probabilities --
    pub obstacle_probability: f64,
    /// Chance an obstacle roll becomes a full-width road instead.
    pub road_probability: f64,
    pub cars_per_road_min: u32,
    pub cars_per_road_max: u32,
    /// Cars drift horizontally within ±this many units/second.
    pub car_drift_limit: f64,
    /// Subtype weights indexed by season (spring, summer, autumn, winter).
    pub season_weights: [SpawnWeights; 4],

    // -- Speed model --
    pub base_speed: f64,
    pub min_speed: f64,
    pub burst_multiplier: f64,
    pub low_health_threshold: f64,
    pub low_health_multiplier: f64,

    // -- Economy --
    pub health_decay: f64,
    pub energy_regen: f64,
    pub rabbits_per_burst: u32,

    // -- Geometry --
    pub lane_count: u32,
    pub lane_width: f64,
    pub field_height: f64,
    /// Entities enter this far above the field and leave this far below it.
    pub spawn_margin: f64,
    pub despawn_margin: f64,
    pub player_y: f64,
    /// Trailing gap between the player and each successive cub.
    pub cub_spacing: f64,
    pub road_half_height: f64,
    pub player_box: HitboxSize,
    pub cub_box: HitboxSize,
    pub hazard_box: HitboxSize,
    pub pickup_box: HitboxSize,
    pub car_box: HitboxSize,

    // -- Input --
    pub swipe_threshold: f64,
    pub key_cooldown_ms: u64,
    pub burst_cooldown_ms: u64,
    pub double_tap_window_ms: u64,
    pub lane_change_duration_ms: u64,
    /// Extra tween delay per cub index. Purely cosmetic trailing.
    pub cub_lag_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 2_000,
            economy_interval_ms: 3_000,
            month_interval_min_ms: 6_000,
            month_interval_max_ms: 8_000,
            burst_duration_ms: 2_000,

            session_seconds: SESSION_SECONDS,
            months_to_win: 18,
            initial_cubs: 4,
            initial_lane: 1,

            obstacle_probability: 0.7,
            road_probability: 0.2,
            cars_per_road_min: 1,
            cars_per_road_max: 3,
            car_drift_limit: 12.0,
            season_weights: [SpawnWeights::default(); 4],

            base_speed: 200.0,
            min_speed: 100.0,
            burst_multiplier: 2.0,
            low_health_threshold: 25.0,
            low_health_multiplier: 0.5,

            health_decay: 5.0,
            energy_regen: 10.0,
            rabbits_per_burst: 3,

            lane_count: 4,
            lane_width: 90.0,
            field_height: 800.0,
            spawn_margin: 60.0,
            despawn_margin: 60.0,
            player_y: 620.0,
            cub_spacing: 46.0,
            road_half_height: 26.0,
            player_box: HitboxSize {
                half_w: 28.0,
                half_h: 28.0,
            },
            cub_box: HitboxSize {
                half_w: 20.0,
                half_h: 20.0,
            },
            hazard_box: HitboxSize {
                half_w: 30.0,
                half_h: 30.0,
            },
            pickup_box: HitboxSize {
                half_w: 26.0,
                half_h: 26.0,
            },
            car_box: HitboxSize {
                half_w: 34.0,
                half_h: 22.0,
            },

            swipe_threshold: 50.0,
            key_cooldown_ms: 300,
            burst_cooldown_ms: 500,
            double_tap_window_ms: 500,
            lane_change_duration_ms: 200,
            cub_lag_ms: 120,
        }
    }
}

impl GameConfig {
    /// Center x of a lane.
    pub fn lane_x(&self, lane: u32) -> f64 {
        (f64::from(lane) + 0.5) * self.lane_width
    }

    pub fn field_width(&self) -> f64 {
        f64::from(self.lane_count) * self.lane_width
    }

    pub fn spawn_weights(&self, season: Season) -> &SpawnWeights {
        let idx = match season {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
        };
        &self.season_weights[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_rules() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_interval_ms, 2_000);
        assert_eq!(config.economy_interval_ms, 3_000);
        assert_eq!(config.obstacle_probability, 0.7);
        assert_eq!(config.road_probability, 0.2);
        assert_eq!(config.health_decay, 5.0);
        assert_eq!(config.energy_regen, 10.0);
        assert_eq!(config.rabbits_per_burst, 3);
        assert_eq!(config.session_seconds, 120);
        assert_eq!(config.months_to_win, 18);
    }

    #[test]
    fn lanes_are_evenly_spaced() {
        let config = GameConfig::default();
        assert_eq!(config.lane_x(0), 45.0);
        assert_eq!(config.lane_x(3), 315.0);
        assert_eq!(config.field_width(), 360.0);
    }

    #[test]
    fn partial_overrides_deserialize_over_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"baseSpeed": 250.0}"#).unwrap();
        assert_eq!(config.base_speed, 250.0);
        assert_eq!(config.spawn_interval_ms, 2_000);
    }
}
