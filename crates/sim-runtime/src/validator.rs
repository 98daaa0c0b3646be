//! Periodic component validation and auto-fix.
//!
//! Every `K` ticks, walk every entity's components, call `validate`, and
//! `auto_fix` whatever comes back invalid. Failures are returned as a
//! structured [`ValidationReport`] list rather than only logged, so
//! embedders and tests can assert on them directly.

use sim_core::{ComponentTypeTag, EntityId, SimConfig};
use sim_system::SimulationState;
use tracing::warn;

/// One component's validation failure and whether `auto_fix` repaired it.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub entity_id: EntityId,
    pub type_tag: ComponentTypeTag,
    pub errors: Vec<String>,
    pub auto_fixed: bool,
}

/// Walks every entity's components against the store, never halting on a
/// failure — validation is diagnostic, not fatal.
#[derive(Default)]
pub struct ComponentValidator;

impl ComponentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate every component of every entity in `state`, auto-fixing
    /// (and reporting) any that fail. Order of the returned reports
    /// follows entity insertion order; the tags within an entity are
    /// unordered.
    pub fn run(&self, state: &SimulationState, config: &SimConfig) -> Vec<ValidationReport> {
        let mut reports = Vec::new();
        let ids: Vec<EntityId> = state.store().entity_ids().to_vec();

        for id in ids {
            let tags: Vec<ComponentTypeTag> = {
                let store = state.store();
                store
                    .components_of(&id)
                    .map(|components| components.keys().copied().collect())
                    .unwrap_or_default()
            };

            for tag in tags {
                let validation = {
                    let store = state.store();
                    store.get_component(&id, tag).map(|c| c.validate(&id))
                };
                let Some((is_valid, errors)) = validation else {
                    continue;
                };
                if is_valid {
                    continue;
                }

                let auto_fixed = {
                    let mut store = state.store_mut();
                    store
                        .get_component_mut(&id, tag)
                        .map(|c| c.auto_fix(&id, config))
                        .unwrap_or(false)
                };

                warn!(%id, %tag, ?errors, auto_fixed, "component validation failed");
                reports.push(ValidationReport {
                    entity_id: id.clone(),
                    type_tag: tag,
                    errors,
                    auto_fixed,
                });
            }
        }

        reports
    }
}
