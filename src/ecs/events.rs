use bevy_ecs::message::Message;

/// Direction of a keyboard lane-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneDir {
    Left,
    Right,
}

/// Raw player input forwarded by the host each frame. The input system
/// translates these into simulation commands, applying the gesture
/// thresholds and rate limits; anything that fails a check is silently
/// dropped.
#[derive(Message, Debug, Clone, Copy)]
pub enum InputEvent {
    /// A completed horizontal drag, in screen units. Triggers a lane change
    /// when the distance crosses the swipe threshold.
    Swipe { dx: f64 },
    /// A directional key press, rate-limited to one lane change per cooldown.
    Key { dir: LaneDir },
    /// A screen tap; two within the double-tap window trigger a speed burst.
    Tap,
    /// The dedicated burst control, with its own cooldown.
    BurstButton,
}
