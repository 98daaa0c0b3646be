use sim_core::EntityId;
use sim_ecs::ActionPlanComponent;

use crate::context::SimContext;

/// Chooses one candidate (or none) from the list an `ActionGenerator`
/// produced. May read `ctx.store` for context (e.g. a Q-table keyed by
/// entity state) but must not mutate it.
pub trait DecisionSelector {
    /// `None` means the entity passes its turn this tick.
    fn select(
        &self,
        ctx: &SimContext,
        entity_id: &EntityId,
        candidates: Vec<ActionPlanComponent>,
    ) -> Option<ActionPlanComponent>;
}
