//! The spatial/world abstraction.
//!
//! The core treats positions as opaque: it never interprets coordinates,
//! never does geometry, and only ever round-trips a position through
//! whatever shape the embedder chose. `serde_json::Value` is therefore the
//! position representation — the same opaque-payload idiom already used
//! for component `to_dict`/params/details elsewhere in this workspace,
//! rather than introducing a generic `Environment<Position>` parameter
//! that would ripple through every collaborator trait.

use serde_json::{Map, Value};
use sim_core::EntityId;
use thiserror::Error;

/// An opaque world position. The core never inspects its contents.
pub type Position = Value;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("environment restore failed: {0}")]
    RestoreFailed(String),
}

pub type EnvironmentResult<T> = Result<T, EnvironmentError>;

/// Spatial/world abstraction supplied by the embedder.
///
/// Implementations own whatever spatial index (grid, graph, continuous
/// plane) they like; the core only ever calls through this trait.
pub trait Environment {
    fn is_valid_position(&self, position: &Position) -> bool;

    /// Positions reachable from `position` in one step. Empty for an
    /// invalid or isolated position.
    fn get_neighbors(&self, position: &Position) -> Vec<Position>;

    /// A non-negative distance metric between two positions. Meaning
    /// (Euclidean, graph hops, …) is entirely up to the implementation.
    fn distance(&self, a: &Position, b: &Position) -> f64;

    fn get_entities_at_position(&self, position: &Position) -> Vec<EntityId>;

    fn get_entities_in_radius(&self, position: &Position, radius: f64) -> Vec<EntityId>;

    /// Move `entity_id` to `position`. Fails if the position is invalid
    /// for this environment.
    fn update_entity_position(&mut self, entity_id: &EntityId, position: &Position) -> EnvironmentResult<()>;

    /// Remove all trace of `entity_id` from the spatial index. No-op if
    /// the entity was never placed.
    fn remove_entity(&mut self, entity_id: &EntityId);

    /// A snapshot-safe representation, written into `Snapshot.environment`
    /// at every snapshot boundary.
    fn to_dict(&self) -> Map<String, Value>;

    /// Rehydrate from a previously captured `to_dict` output. Restore is
    /// all-or-nothing: a failure must leave the snapshot caller free to
    /// abort with `SnapshotCorrupt` rather than apply a partial restore.
    fn restore_from_dict(&mut self, data: &Map<String, Value>) -> EnvironmentResult<()>;
}

/// The trivial `Environment`: no positions are ever valid, nothing is ever
/// placed. Every pluggable trait in this lineage ships a no-op
/// implementation for tests and minimal embedders (mirrors
/// `NoopRewardCalculator`/`NoopCognitiveScaffold` above).
#[derive(Clone, Debug, Default)]
pub struct NoopEnvironment;

impl Environment for NoopEnvironment {
    fn is_valid_position(&self, _position: &Position) -> bool {
        false
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

    fn update_entity_position(&mut self, _entity_id: &EntityId, _position: &Position) -> EnvironmentResult<()> {
        Ok(())
    }

    fn remove_entity(&mut self, _entity_id: &EntityId) {}

    fn to_dict(&self) -> Map<String, Value> {
        Map::new()
    }

    fn restore_from_dict(&mut self, _data: &Map<String, Value>) -> EnvironmentResult<()> {
        Ok(())
    }
}
