//! The restorable snapshot record and the `capture`/`restore` functions
//! that move state into and out of it.
//!
//! `entities` is a `Vec`, not a JSON object keyed by entity id —
//! `serde_json::Map` is a sorted `BTreeMap` in this workspace (the
//! `preserve_order` feature isn't enabled anywhere in the dependency
//! stack), so a JSON object would silently drop entity insertion order on
//! every round-trip. A JSON array of `{id, components}` records carries
//! that order for free and deserializes back into the same `Vec` order,
//! which is exactly what restore needs to reconstruct entity IDs and
//! insertion order from the snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sim_core::{EntityId, Tick};
use sim_decision::Environment;
use sim_ecs::ComponentStore;

use crate::error::SnapshotError;
use crate::factory::ComponentFactory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    /// Component dicts keyed by type tag. Order among an entity's own
    /// components doesn't matter — restore reconstructs them
    /// independently — so a sorted `Map` here is fine.
    pub components: Map<String, Value>,
}

/// A complete, restorable description of `SimulationState` at a tick
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub simulation_id: String,
    /// The master RNG seed the run started with. Not the RNG's internal
    /// generator state — the tick scheduler derives a fresh RNG per tick
    /// as a pure function of `(seed, tick)` (see `sim_core::SimRng::for_tick`),
    /// so resuming a run only needs the seed, never opaque generator
    /// state that this stack has no portable serialized form for.
    pub seed: Option<u64>,
    pub entities: Vec<EntitySnapshot>,
    pub environment: Map<String, Value>,
}

impl Snapshot {
    pub fn to_json_string(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(data: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

type SnapshotResult<T> = Result<T, SnapshotError>;

/// Serialize `store` and `environment` into a [`Snapshot`] at `tick`.
pub fn capture(
    store: &ComponentStore,
    environment: &dyn Environment,
    tick: Tick,
    simulation_id: impl Into<String>,
    seed: Option<u64>,
) -> Snapshot {
    let entities = store
        .entity_ids()
        .iter()
        .map(|id| {
            let components = store
                .components_of(id)
                .map(|comps| {
                    comps
                        .iter()
                        .map(|(tag, component)| (tag.as_str().to_string(), Value::Object(component.to_dict())))
                        .collect::<Map<String, Value>>()
                })
                .unwrap_or_default();
            EntitySnapshot { id: id.clone(), components }
        })
        .collect();

    Snapshot {
        tick,
        simulation_id: simulation_id.into(),
        seed,
        entities,
        environment: environment.to_dict(),
    }
}

/// Rebuild a `ComponentStore` and rehydrate `environment` from `snapshot`.
///
/// All-or-fatal: the first entity, component, or environment failure
/// aborts with [`SnapshotError::Corrupt`] (or `UnknownComponentType`)
/// rather than leaving a partially populated store.
pub fn restore(
    snapshot: &Snapshot,
    factory: &dyn ComponentFactory,
    mut environment: Box<dyn Environment>,
) -> Result<(ComponentStore, Box<dyn Environment>), SnapshotError> {
    let mut store = ComponentStore::new();

    for entity in &snapshot.entities {
        store
            .add_entity(entity.id.clone())
            .map_err(|e| SnapshotError::Corrupt(e.to_string()))?;

        for (tag, dict) in &entity.components {
            let data = dict
                .as_object()
                .ok_or_else(|| SnapshotError::Corrupt(format!("component '{tag}' on {} is not an object", entity.id)))?;
            let component = factory.create_component(tag, data)?;
            store
                .add_component(&entity.id, component)
                .map_err(|e| SnapshotError::Corrupt(e.to_string()))?;
        }
    }

    environment
        .restore_from_dict(&snapshot.environment)
        .map_err(|e| SnapshotError::Corrupt(e.to_string()))?;

    Ok((store, environment))
}
