use bevy_ecs::resource::Resource;
use serde_json::{Map, Value};

/// Accumulates the `GameData` fields that changed since the host last
/// drained, keyed by their camelCase wire names. Backs the partial-update
/// contract: the renderer receives only what changed, never a full replace.
#[derive(Resource, Debug, Clone, Default)]
pub struct UpdateOutbox {
    changed: Map<String, Value>,
}

impl UpdateOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a changed field. Later writes within the same drain window
    /// overwrite earlier ones, so the host always sees the newest value.
    pub fn set(&mut self, field: &str, value: Value) {
        self.changed.insert(field.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    /// The accumulated patch, or `None` when nothing changed.
    pub fn drain(&mut self) -> Option<Value> {
        if self.changed.is_empty() {
            None
        } else {
            Some(Value::Object(std::mem::take(&mut self.changed)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drain_returns_only_changed_fields() {
        let mut outbox = UpdateOutbox::new();
        assert_eq!(outbox.drain(), None);

        outbox.set("health", json!(95.0));
        outbox.set("score", json!(150));
        let patch = outbox.drain().unwrap();
        assert_eq!(patch, json!({"health": 95.0, "score": 150}));
        assert_eq!(outbox.drain(), None);
    }

    #[test]
    fn later_writes_win() {
        let mut outbox = UpdateOutbox::new();
        outbox.set("health", json!(95.0));
        outbox.set("health", json!(90.0));
        assert_eq!(outbox.drain().unwrap(), json!({"health": 90.0}));
    }
}
