//! `System`: a per-tick bulk-work procedure plus optional event
//! subscriptions, and `SystemManager`: the ordered registry that drives
//! them.

use std::any::Any;

use async_trait::async_trait;
use sim_core::{ComponentTypeTag, Tick};
use tracing::{debug, instrument};

use crate::error::SystemError;

/// A cross-cutting per-tick behavior.
///
/// `update` is `async` so a System can await a long-running collaborator
/// (a database logger, the cognitive scaffold) without blocking the tick
/// loop — driven on a single-threaded executor, so no `Send` bound is
/// required on the returned future.
///
/// Systems are expected to capture whatever store/bus handles they need
/// at construction time (when the embedder wires them up via
/// `SystemManager::register_system`), rather than receive them again on
/// every `update` call.
#[async_trait(?Send)]
pub trait System {
    /// A stable name used in error messages and system lookup.
    fn name(&self) -> &'static str;

    /// Component types this System expects to operate on. Informational;
    /// the core does not enforce it, but a System's own `update` should
    /// filter via `ComponentStore::entities_with` using this set.
    fn required_components(&self) -> &'static [ComponentTypeTag] {
        &[]
    }

    /// Per-tick bulk work (decay, spawning, metrics). Must not drive
    /// per-entity decisions — that is the scheduler's job.
    async fn update(&mut self, current_tick: Tick) -> Result<(), SystemError>;

    fn as_any(&self) -> &dyn Any;
}

/// The ordered registry of Systems. Registration order is update order.
#[derive(Default)]
pub struct SystemManager {
    systems: Vec<Box<dyn System>>,
}

impl SystemManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a System. Order of registration is the order `update_all`
    /// invokes them in.
    pub fn register_system(&mut self, system: Box<dyn System>) {
        debug!(system = system.name(), "registering system");
        self.systems.push(system);
    }

    /// Await every System's `update` sequentially, in registration order.
    /// Aborts on the first error, tagging it with the offending System's
    /// name if not already tagged.
    #[instrument(skip(self))]
    pub async fn update_all(&mut self, current_tick: Tick) -> Result<(), SystemError> {
        for system in self.systems.iter_mut() {
            system.update(current_tick).await.map_err(|e| match e {
                SystemError::Failed { system: s, message } => SystemError::Failed { system: s, message },
                other => SystemError::failed(system.name(), other.to_string()),
            })?;
        }
        Ok(())
    }

    /// By-name lookup for cross-system wiring (the source's by-type
    /// lookup, expressed with a stable name since Rust has no analog of
    /// reflecting on a dynamic class object).
    pub fn get_system(&self, name: &str) -> Option<&dyn System> {
        self.systems.iter().find(|s| s.name() == name).map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
