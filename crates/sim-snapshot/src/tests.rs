use std::collections::HashMap;

use serde_json::{json, Map, Value};
use sim_core::{EntityId, Tick};
use sim_decision::{Environment, EnvironmentResult, NoopEnvironment, Position};
use sim_ecs::{Component, ComponentStore, TimeBudgetComponent, TIME_BUDGET_TAG};

use super::*;

/// A minimal `Environment` with real state, to exercise `to_dict`/
/// `restore_from_dict` round-tripping through a capture/restore cycle
/// (NoopEnvironment always has empty state, which would pass trivially).
#[derive(Debug, Default, Clone)]
struct GridEnvironment {
    positions: HashMap<String, Position>,
}

impl Environment for GridEnvironment {
    fn is_valid_position(&self, _position: &Position) -> bool {
        true
    }

    fn get_neighbors(&self, _position: &Position) -> Vec<Position> {
        Vec::new()
    }

    fn distance(&self, _a: &Position, _b: &Position) -> f64 {
        0.0
    }

    fn get_entities_at_position(&self, _position: &Position) -> Vec<EntityId> {
        Vec::new()
    }

    fn get_entities_in_radius(&self, _position: &Position, _radius: f64) -> Vec<EntityId> {
        Vec::new()
    }

    fn update_entity_position(&mut self, entity_id: &EntityId, position: &Position) -> EnvironmentResult<()> {
        self.positions.insert(entity_id.as_str().to_string(), position.clone());
        Ok(())
    }

    fn remove_entity(&mut self, entity_id: &EntityId) {
        self.positions.remove(entity_id.as_str());
    }

    fn to_dict(&self) -> Map<String, Value> {
        self.positions.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn restore_from_dict(&mut self, data: &Map<String, Value>) -> EnvironmentResult<()> {
        self.positions = data.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Ok(())
    }
}

/// Reconstructs the one built-in component type this test suite needs.
/// A real embedder's factory matches on every type tag it registered.
struct TestFactory;

impl ComponentFactory for TestFactory {
    fn create_component(&self, type_tag: &str, data: &Map<String, Value>) -> Result<Box<dyn Component>, SnapshotError> {
        if type_tag == TIME_BUDGET_TAG.as_str() {
            let initial = data
                .get("initial_time_budget")
                .and_then(Value::as_f64)
                .ok_or_else(|| SnapshotError::Corrupt("missing initial_time_budget".into()))?;
            let current = data
                .get("current_time_budget")
                .and_then(Value::as_f64)
                .ok_or_else(|| SnapshotError::Corrupt("missing current_time_budget".into()))?;
            let is_active = data.get("is_active").and_then(Value::as_bool).unwrap_or(current > 0.0);
            let action_counts: HashMap<String, u64> = data
                .get("action_counts")
                .cloned()
                .map(serde_json::from_value)
                .transpose()
                .map_err(|e: serde_json::Error| SnapshotError::Corrupt(e.to_string()))?
                .unwrap_or_default();

            let mut tb = TimeBudgetComponent::new(initial);
            tb.current_time_budget = current;
            tb.is_active = is_active;
            tb.action_counts = action_counts;
            Ok(Box::new(tb))
        } else {
            Err(SnapshotError::UnknownComponentType(type_tag.to_string()))
        }
    }
}

fn populated_store() -> ComponentStore {
    let mut store = ComponentStore::new();
    store.add_entity(EntityId::new("a")).unwrap();
    store.add_entity(EntityId::new("b")).unwrap();
    let mut tb_a = TimeBudgetComponent::new(10.0);
    tb_a.record_action("move");
    tb_a.record_action("move");
    store.add_component(&EntityId::new("a"), Box::new(tb_a)).unwrap();
    store
        .add_component(&EntityId::new("b"), Box::new(TimeBudgetComponent::new(5.0)))
        .unwrap();
    store
}

mod capture_restore_tests {
    use super::*;

    #[test]
    fn restore_reproduces_component_state() {
        let store = populated_store();
        let mut env = GridEnvironment::default();
        env.update_entity_position(&EntityId::new("a"), &json!({"x": 1, "y": 2})).unwrap();

        let snapshot = capture(&store, &env, Tick(42), "run-1", Some(7));
        assert_eq!(snapshot.entities.len(), 2);
        assert_eq!(snapshot.tick, Tick(42));

        let (restored, restored_env) = restore(&snapshot, &TestFactory, Box::new(GridEnvironment::default())).unwrap();

        assert_eq!(restored.entity_ids(), store.entity_ids());
        let tb = restored.get_as::<TimeBudgetComponent>(&EntityId::new("a"), TIME_BUDGET_TAG).unwrap();
        assert_eq!(tb.action_counts.get("move"), Some(&2));
        assert_eq!(restored_env.to_dict().get("a"), Some(&json!({"x": 1, "y": 2})));
    }

    #[test]
    fn entity_insertion_order_survives_json_round_trip() {
        let mut store = ComponentStore::new();
        for id in ["z", "a", "m"] {
            store.add_entity(EntityId::new(id)).unwrap();
        }
        let env = NoopEnvironment;
        let snapshot = capture(&store, &env, Tick(0), "run-2", None);

        let json = snapshot.to_json_string().unwrap();
        let reloaded = Snapshot::from_json_str(&json).unwrap();

        let ids: Vec<&str> = reloaded.entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn unknown_component_type_is_rejected() {
        let mut store = ComponentStore::new();
        store.add_entity(EntityId::new("a")).unwrap();
        store
            .add_component(&EntityId::new("a"), Box::new(TimeBudgetComponent::new(1.0)))
            .unwrap();

        let env = NoopEnvironment;
        let mut snapshot = capture(&store, &env, Tick(0), "run-3", None);
        // Corrupt the tag so the factory can't recognize it.
        let components = std::mem::take(&mut snapshot.entities[0].components);
        snapshot.entities[0].components = components
            .into_iter()
            .map(|(_, v)| ("bogus_component".to_string(), v))
            .collect();

        let err = restore(&snapshot, &TestFactory, Box::new(NoopEnvironment)).unwrap_err();
        assert!(matches!(err, SnapshotError::UnknownComponentType(tag) if tag == "bogus_component"));
    }
}

mod snapshot_store_tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips_byte_identical_state() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store_on_disk = SnapshotStore::new(dir.path(), "run-4");

        let state = populated_store();
        let env = NoopEnvironment;
        let snapshot = capture(&state, &env, Tick(50), "run-4", Some(11));

        let path = store_on_disk.save(&snapshot).unwrap();
        assert!(path.ends_with("snapshot_tick_50.json"));

        let loaded = store_on_disk.load(50).unwrap();
        assert_eq!(loaded.tick, snapshot.tick);
        assert_eq!(loaded.simulation_id, snapshot.simulation_id);
        assert_eq!(loaded.seed, snapshot.seed);
        assert_eq!(loaded.entities.len(), snapshot.entities.len());
    }

    #[test]
    fn path_for_tick_follows_naming_convention() {
        let store = SnapshotStore::new("/tmp/does-not-exist", "run-5");
        let path = store.path_for_tick(100);
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "snapshot_tick_100.json");
    }
}
