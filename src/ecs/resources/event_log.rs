use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

/// Telemetry event categories the core emits. Fire-and-forget: the host
/// forwards them to its analytics collaborator and losing one never affects
/// the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryKind {
    GameStart,
    LaneChange,
    CubLost,
    ResourcePickup,
    SpeedBurst,
    MonthReached,
    GameEnd,
}

impl TelemetryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TelemetryKind::GameStart => "game_start",
            TelemetryKind::LaneChange => "lane_change",
            TelemetryKind::CubLost => "cub_lost",
            TelemetryKind::ResourcePickup => "resource_pickup",
            TelemetryKind::SpeedBurst => "speed_burst",
            TelemetryKind::MonthReached => "month_reached",
            TelemetryKind::GameEnd => "game_end",
        }
    }
}

/// One telemetry record: session, month context, elapsed play time, and an
/// event-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryEvent {
    pub id: u64,
    pub session_id: u64,
    pub kind: TelemetryKind,
    /// Elapsed play time in milliseconds when the event fired.
    pub at_ms: u64,
    pub month: u32,
    pub data: serde_json::Value,
}

/// Accumulates telemetry events between host drains.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<TelemetryEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TelemetryEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to the host, leaving the log empty.
    pub fn drain(&mut self) -> Vec<TelemetryEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_log() {
        let mut log = EventLog::new();
        log.push(TelemetryEvent {
            id: 1,
            session_id: 7,
            kind: TelemetryKind::GameStart,
            at_ms: 0,
            month: 1,
            data: serde_json::Value::Null,
        });
        assert_eq!(log.drain().len(), 1);
        assert!(log.drain().is_empty());
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TelemetryKind::ResourcePickup).unwrap(),
            "\"resource_pickup\""
        );
    }
}
