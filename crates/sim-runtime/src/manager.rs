//! `SimulationManager`: the tick-loop orchestrator.
//!
//! Each tick runs the same five-step body: enumerate the active set, run
//! every System's bulk update, shuffle the active set deterministically,
//! walk it turn by turn dispatching the decision pipeline, then snapshot
//! on cadence. Observer hooks bracket every phase so an embedder can log
//! or inspect progress without the core depending on any particular
//! logging sink.

use std::cell::Cell;
use std::rc::Rc;

use sim_core::{EntityId, SimConfig, SimRng, Tick};
use sim_decision::{ActionGenerator, DecisionSelector, Environment, RewardCalculator, SimContext};
use sim_event::{topics, Payload};
use sim_snapshot::{capture, restore, ComponentFactory, Snapshot, SnapshotStore};
use sim_system::{ActionSystem, System, SimulationState, SystemManager};
use tracing::{info, instrument, warn};

use crate::error::{RunOutcome, SimError, SimResult};
use crate::observer::SimObserver;
use crate::validator::ComponentValidator;

pub struct SimulationManager {
    config: SimConfig,
    state: SimulationState,
    system_manager: SystemManager,
    action_generator: Rc<dyn ActionGenerator>,
    decision_selector: Rc<dyn DecisionSelector>,
    validator: ComponentValidator,
    simulation_id: String,
    snapshot_store: SnapshotStore,
    cancel: Rc<Cell<bool>>,
    current_tick: Tick,
}

impl SimulationManager {
    /// Assembled only through [`crate::SimulationManagerBuilder`] or
    /// [`SimulationManager::resume_from_snapshot`].
    pub(crate) fn assemble(
        config: SimConfig,
        state: SimulationState,
        mut system_manager: SystemManager,
        action_generator: Rc<dyn ActionGenerator>,
        decision_selector: Rc<dyn DecisionSelector>,
        reward_calculator: Rc<dyn RewardCalculator>,
        simulation_id: String,
        starting_tick: Tick,
        extra_systems: Vec<Box<dyn System>>,
    ) -> Self {
        // The action dispatcher is always present and always registered
        // first, so `execute_*` fan-out happens before any embedder
        // System that reacts to `action_chosen` on its own.
        system_manager.register_system(Box::new(ActionSystem::new(&state, reward_calculator)));
        for system in extra_systems {
            system_manager.register_system(system);
        }

        let snapshot_store = SnapshotStore::new(&config.log_directory, &simulation_id);

        Self {
            config,
            state,
            system_manager,
            action_generator,
            decision_selector,
            validator: ComponentValidator::new(),
            simulation_id,
            snapshot_store,
            cancel: Rc::new(Cell::new(false)),
            current_tick: starting_tick,
        }
    }

    /// Rebuild a manager from a snapshot: restores the store and
    /// environment via `sim-snapshot`, then continues `run()` from
    /// `snapshot.tick + 1`.
    #[allow(clippy::too_many_arguments)]
    pub fn resume_from_snapshot(
        snapshot: &Snapshot,
        factory: &dyn ComponentFactory,
        environment_template: Box<dyn Environment>,
        config: SimConfig,
        action_generator: Rc<dyn ActionGenerator>,
        decision_selector: Rc<dyn DecisionSelector>,
        reward_calculator: Rc<dyn RewardCalculator>,
        systems: Vec<Box<dyn System>>,
    ) -> SimResult<Self> {
        let (store, environment) = restore(snapshot, factory, environment_template)?;
        let state = SimulationState::from_parts(store, environment);

        Ok(Self::assemble(
            config,
            state,
            SystemManager::new(),
            action_generator,
            decision_selector,
            reward_calculator,
            snapshot.simulation_id.clone(),
            snapshot.tick.offset(1),
            systems,
        ))
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn simulation_id(&self) -> &str {
        &self.simulation_id
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// A shared flag the embedder can flip from outside the loop to
    /// request cooperative cancellation.
    pub fn cancel_handle(&self) -> Rc<Cell<bool>> {
        self.cancel.clone()
    }

    /// Drive ticks from the manager's current tick up to
    /// `config.end_tick()` (exclusive).
    #[instrument(skip(self, observer))]
    pub async fn run(&mut self, observer: &mut dyn SimObserver) -> SimResult<RunOutcome> {
        let end = self.config.end_tick();

        while self.current_tick < end {
            let tick = self.current_tick;
            observer.on_tick_start(tick);

            if self.config.validation_interval != 0 && tick.is_multiple_of(self.config.validation_interval) {
                let reports = self.validator.run(&self.state, &self.config);
                if !reports.is_empty() {
                    warn!(tick = %tick, failures = reports.len(), "validation failures this tick");
                }
            }

            self.state.begin_tick();
            let active = self.state.active_entity_ids();
            if active.is_empty() {
                info!(tick = %tick, "active set empty, terminating run early");
                return self.finish(tick, observer, RunOutcome::Completed);
            }

            self.system_manager
                .update_all(tick)
                .await
                .map_err(|e| SimError::system(tick, "system_manager", e))?;

            let mut shuffled = active;
            self.shuffle_rng(tick).shuffle(&mut shuffled);

            for entity_id in &shuffled {
                if !self.state.is_active(entity_id) {
                    continue;
                }
                self.process_turn(tick, entity_id)?;

                if self.cancel.get() {
                    warn!(tick = %tick, "cancellation observed mid-tick, stopping after current turn");
                    return self.finish(tick, observer, RunOutcome::Cancelled);
                }
            }

            observer.on_tick_end(tick);

            if tick.0 > 0 && tick.is_multiple_of(self.config.snapshot_interval) {
                let snapshot = self.snapshot_now(tick)?;
                observer.on_snapshot(tick, &snapshot);
            }

            if self.cancel.get() {
                return self.finish(tick, observer, RunOutcome::Cancelled);
            }

            self.current_tick = tick.offset(1);
        }

        self.finish(end, observer, RunOutcome::Completed)
    }

    /// One entity's turn: generate candidates, select one, attach it as
    /// the entity's `ActionPlan`, and publish `action_chosen`.
    fn process_turn(&self, tick: Tick, entity_id: &EntityId) -> SimResult<()> {
        let plan = {
            let store = self.state.store();
            let environment = self.state.environment();
            let ctx = SimContext::new(tick, &store, &*environment);

            let candidates = self.action_generator.generate(&ctx, entity_id);
            if candidates.is_empty() {
                return Ok(());
            }
            self.decision_selector.select(&ctx, entity_id, candidates)
        };

        let Some(plan) = plan else {
            return Ok(());
        };

        self.state
            .store_mut()
            .add_component(entity_id, Box::new(plan.clone()))
            .map_err(|e| SimError::store(tick, e))?;

        let payload = Payload::new(entity_id.clone(), tick).with_action_plan(plan);
        self.state
            .bus()
            .publish(topics::ACTION_CHOSEN, &payload)
            .map_err(|e| SimError::handler(tick, entity_id.clone(), e))
    }

    /// The shuffle RNG for `tick`: a pure function of `(seed, tick)` when
    /// seeded, OS entropy (and therefore non-reproducible) otherwise.
    fn shuffle_rng(&self, tick: Tick) -> SimRng {
        match self.config.random_seed {
            Some(seed) => SimRng::for_tick(seed, tick),
            None => SimRng::from_entropy(),
        }
    }

    fn snapshot_now(&self, tick: Tick) -> SimResult<Snapshot> {
        let snapshot = capture(
            &self.state.store(),
            &*self.state.environment(),
            tick,
            self.simulation_id.clone(),
            self.config.random_seed,
        );
        self.snapshot_store.save(&snapshot)?;
        Ok(snapshot)
    }

    fn finish(&mut self, tick: Tick, observer: &mut dyn SimObserver, outcome: RunOutcome) -> SimResult<RunOutcome> {
        let snapshot = self.snapshot_now(tick)?;
        observer.on_snapshot(tick, &snapshot);
        observer.on_sim_end(tick);
        Ok(outcome)
    }
}
