use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use super::resources::HitboxSize;
use super::time::GameTime;
use crate::model::{HazardKind, PickupKind};

/// The player-controlled cheetah. One per session.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// A trailing cub. `index` fixes its slot in the follow line.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cub {
    pub index: u32,
}

/// World position in field units. Origin top-left; entities scroll toward
/// +y and despawn past the bottom edge.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned collision half-extents.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hitbox {
    pub half_w: f64,
    pub half_h: f64,
}

impl From<HitboxSize> for Hitbox {
    fn from(size: HitboxSize) -> Self {
        Self {
            half_w: size.half_w,
            half_h: size.half_h,
        }
    }
}

/// AABB overlap test between two positioned hitboxes.
pub fn aabb_overlap(a_pos: &Position, a_box: &Hitbox, b_pos: &Position, b_box: &Hitbox) -> bool {
    (a_pos.x - b_pos.x).abs() <= a_box.half_w + b_box.half_w
        && (a_pos.y - b_pos.y).abs() <= a_box.half_h + b_box.half_h
}

/// A spawned obstacle. `struck_cubs` remembers which cubs it already hit:
/// the hazard persists for the rest of the family but never resolves the
/// same pair twice.
#[derive(Component, Debug, Clone)]
pub struct Hazard {
    pub kind: HazardKind,
    pub struck_cubs: Vec<Entity>,
}

impl Hazard {
    pub fn new(kind: HazardKind) -> Self {
        Self {
            kind,
            struck_cubs: Vec::new(),
        }
    }
}

/// A collectible resource. Consumed by the player's first overlap.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pickup {
    pub kind: PickupKind,
}

/// Slight constant horizontal drift, units/second. Cars on a road carry this.
#[derive(Component, Debug, Clone, Copy)]
pub struct Drift {
    pub dx: f64,
}

/// Smoothed horizontal slide between lane centers. Player and cubs always
/// carry one; a finished tween just keeps reporting its destination. Cub
/// tweens start `delay_ms` late, which produces the trailing line — purely
/// cosmetic, collision still uses the animated position.
#[derive(Component, Debug, Clone, Copy)]
pub struct LaneTween {
    pub from_x: f64,
    pub to_x: f64,
    pub start: GameTime,
    pub duration_ms: u64,
    pub delay_ms: u64,
}

impl LaneTween {
    /// A tween that has already settled at `x`.
    pub fn settled(x: f64) -> Self {
        Self {
            from_x: x,
            to_x: x,
            start: GameTime::ZERO,
            duration_ms: 0,
            delay_ms: 0,
        }
    }

    /// Animated x at `now`, smoothstep-eased between the endpoints.
    pub fn x_at(&self, now: GameTime) -> f64 {
        let elapsed = now.millis_since(self.start).saturating_sub(self.delay_ms);
        if now.millis_since(self.start) < self.delay_ms {
            return self.from_x;
        }
        if self.duration_ms == 0 || elapsed >= self.duration_ms {
            return self.to_x;
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        let eased = t * t * (3.0 - 2.0 * t);
        self.from_x + (self.to_x - self.from_x) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_requires_both_axes() {
        let hit = Hitbox {
            half_w: 10.0,
            half_h: 10.0,
        };
        let a = Position { x: 0.0, y: 0.0 };
        let near = Position { x: 15.0, y: 5.0 };
        let far_x = Position { x: 25.0, y: 0.0 };
        let far_y = Position { x: 0.0, y: 30.0 };
        assert!(aabb_overlap(&a, &hit, &near, &hit));
        assert!(!aabb_overlap(&a, &hit, &far_x, &hit));
        assert!(!aabb_overlap(&a, &hit, &far_y, &hit));
    }

    #[test]
    fn tween_eases_between_endpoints() {
        let tween = LaneTween {
            from_x: 0.0,
            to_x: 100.0,
            start: GameTime::ZERO,
            duration_ms: 200,
            delay_ms: 0,
        };
        assert_eq!(tween.x_at(GameTime::ZERO), 0.0);
        assert_eq!(tween.x_at(GameTime::from_millis(200)), 100.0);
        assert_eq!(tween.x_at(GameTime::from_millis(1_000)), 100.0);
        let mid = tween.x_at(GameTime::from_millis(100));
        assert!(mid > 40.0 && mid < 60.0);
    }

    #[test]
    fn tween_delay_holds_the_origin() {
        let tween = LaneTween {
            from_x: 0.0,
            to_x: 100.0,
            start: GameTime::from_millis(1_000),
            duration_ms: 200,
            delay_ms: 120,
        };
        assert_eq!(tween.x_at(GameTime::from_millis(1_100)), 0.0);
        assert_eq!(tween.x_at(GameTime::from_millis(1_320)), 100.0);
    }

    #[test]
    fn settled_tween_stays_put() {
        let tween = LaneTween::settled(45.0);
        assert_eq!(tween.x_at(GameTime::ZERO), 45.0);
        assert_eq!(tween.x_at(GameTime::from_secs(10)), 45.0);
    }
}
