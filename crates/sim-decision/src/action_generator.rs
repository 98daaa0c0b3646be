use sim_core::EntityId;
use sim_ecs::ActionPlanComponent;

use crate::context::SimContext;

/// Produces the set of candidate actions an entity could take this turn.
///
/// Implementations must be pure with respect to `ctx.store`: reading is
/// fine, mutating is not — the scheduler calls this before any commitment
/// has been made to a plan.
pub trait ActionGenerator {
    /// Candidate plans for `entity_id` at `ctx.tick`. An empty vector
    /// means the entity passes its turn.
    fn generate(&self, ctx: &SimContext, entity_id: &EntityId) -> Vec<ActionPlanComponent>;
}
