//! Fluent construction of a [`SimulationManager`], splitting its
//! collaborators into the ones a caller must supply and the ones that
//! default to a no-op implementation.

use std::rc::Rc;

use sim_core::SimConfig;
use sim_decision::{ActionGenerator, DecisionSelector, Environment, NoopEnvironment, NoopRewardCalculator, RewardCalculator};
use sim_ecs::ComponentStore;
use sim_system::{SimulationState, System, SystemManager};

use crate::error::{SimError, SimResult};
use crate::manager::SimulationManager;

/// Builds a [`SimulationManager`] for a fresh (tick-0) run.
///
/// Required: `config`, `action_generator`, `decision_selector`.
/// Everything else has a sensible default: `reward_calculator` defaults
/// to [`NoopRewardCalculator`], `environment` to [`NoopEnvironment`], and
/// `simulation_id` is derived from the config's seed if not set
/// explicitly.
pub struct SimulationManagerBuilder {
    config: Option<SimConfig>,
    action_generator: Option<Rc<dyn ActionGenerator>>,
    decision_selector: Option<Rc<dyn DecisionSelector>>,
    reward_calculator: Rc<dyn RewardCalculator>,
    environment: Box<dyn Environment>,
    simulation_id: Option<String>,
    initial_store: ComponentStore,
    systems: Vec<Box<dyn System>>,
}

impl Default for SimulationManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationManagerBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            action_generator: None,
            decision_selector: None,
            reward_calculator: Rc::new(NoopRewardCalculator),
            environment: Box::new(NoopEnvironment),
            simulation_id: None,
            initial_store: ComponentStore::new(),
            systems: Vec::new(),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn action_generator(mut self, generator: Rc<dyn ActionGenerator>) -> Self {
        self.action_generator = Some(generator);
        self
    }

    pub fn decision_selector(mut self, selector: Rc<dyn DecisionSelector>) -> Self {
        self.decision_selector = Some(selector);
        self
    }

    pub fn reward_calculator(mut self, calculator: Rc<dyn RewardCalculator>) -> Self {
        self.reward_calculator = calculator;
        self
    }

    pub fn environment(mut self, environment: Box<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    pub fn simulation_id(mut self, id: impl Into<String>) -> Self {
        self.simulation_id = Some(id.into());
        self
    }

    /// A pre-populated store (entities with their starting components).
    /// Defaults to empty if never called.
    pub fn initial_store(mut self, store: ComponentStore) -> Self {
        self.initial_store = store;
        self
    }

    /// Append a System beyond the built-in `ActionSystem`, which every
    /// manager registers automatically (see
    /// [`SimulationManager::assemble`]). Registration order is update
    /// order.
    pub fn system(mut self, system: Box<dyn System>) -> Self {
        self.systems.push(system);
        self
    }

    pub fn build(self) -> SimResult<SimulationManager> {
        let config = self.config.ok_or_else(|| SimError::Config("missing config".into()))?;
        let action_generator = self
            .action_generator
            .ok_or_else(|| SimError::Config("missing action_generator".into()))?;
        let decision_selector = self
            .decision_selector
            .ok_or_else(|| SimError::Config("missing decision_selector".into()))?;

        let simulation_id = self.simulation_id.unwrap_or_else(|| derive_simulation_id(config.random_seed));
        let state = SimulationState::from_parts(self.initial_store, self.environment);

        Ok(SimulationManager::assemble(
            config,
            state,
            SystemManager::new(),
            action_generator,
            decision_selector,
            self.reward_calculator,
            simulation_id,
            sim_core::Tick::ZERO,
            self.systems,
        ))
    }
}

/// Derives a stable run id from the configured seed rather than
/// wall-clock time plus a random UUID, since either of those would break
/// this crate's determinism guarantee. An unseeded (non-reproducible) run
/// gets an OS-entropy id instead, which is no less reproducible than the
/// run itself.
fn derive_simulation_id(seed: Option<u64>) -> String {
    match seed {
        Some(seed) => format!("sim-{seed:016x}"),
        None => {
            let mut rng = sim_core::SimRng::from_entropy();
            format!("sim-{:016x}", rng.random::<u64>())
        }
    }
}
