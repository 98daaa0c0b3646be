//! Read-only view handed to the decision pipeline each turn.

use sim_core::Tick;
use sim_ecs::ComponentStore;

use crate::environment::Environment;

/// Everything an `ActionGenerator`/`DecisionSelector`/`RewardCalculator`
/// needs to read — never to mutate — about the world this tick.
pub struct SimContext<'a> {
    pub tick: Tick,
    pub store: &'a ComponentStore,
    pub environment: &'a dyn Environment,
}

impl<'a> SimContext<'a> {
    pub fn new(tick: Tick, store: &'a ComponentStore, environment: &'a dyn Environment) -> Self {
        Self { tick, store, environment }
    }
}
