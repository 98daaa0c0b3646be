//! `SimError`: the structured, tick/entity-tagged error surfaced to
//! `SimulationManager::run`'s caller. Every variant names the offending
//! tick, and the entity or System/handler tag where applicable, so a
//! caller can act on the failure without re-deriving context from a bare
//! string.

use sim_core::{EntityId, Tick};
use sim_snapshot::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("builder misconfigured: {0}")]
    Config(String),

    #[error("tick {tick}: system '{system}' failed: {message}")]
    System { tick: Tick, system: String, message: String },

    #[error("tick {tick}, entity {entity_id}: {message}")]
    Handler {
        tick: Tick,
        entity_id: EntityId,
        message: String,
    },

    #[error("tick {tick}: component store error: {message}")]
    Store { tick: Tick, message: String },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl SimError {
    pub fn system(tick: Tick, system: impl Into<String>, message: impl ToString) -> Self {
        Self::System {
            tick,
            system: system.into(),
            message: message.to_string(),
        }
    }

    pub fn handler(tick: Tick, entity_id: EntityId, message: impl ToString) -> Self {
        Self::Handler {
            tick,
            entity_id,
            message: message.to_string(),
        }
    }

    pub fn store(tick: Tick, message: impl ToString) -> Self {
        Self::Store {
            tick,
            message: message.to_string(),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;

/// The outcome of a completed `run` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The loop reached `end_step`, or the active set emptied early.
    Completed,
    /// A cooperative cancellation request was observed between turns.
    Cancelled,
}
