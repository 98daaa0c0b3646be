//! The shared mutable state the tick loop drives: the component store and
//! the event bus, plus the bookkeeping needed to honor the at-most-once
//! `entity_inactivated` guarantee — multiple deactivation sources for the
//! same entity in the same tick must dedupe at the emission site.
//!
//! The store is wrapped in `Rc<RefCell<_>>` rather than handed out by
//! plain reference because `System`s capture a clone of the handle at
//! registration time and mutate it later from event-handler closures —
//! see [`crate::ActionSystem`]. The component store is the only shared
//! mutable state and is accessed only from the scheduler's single task, so
//! `Rc`/`RefCell` are enough here; there's no need for `Arc`/`Mutex`.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::rc::Rc;

use sim_core::{EntityId, Tick};
use sim_decision::{Environment, NoopEnvironment};
use sim_ecs::{ComponentStore, TimeBudgetComponent, TIME_BUDGET_TAG};
use sim_event::{topics, EventBus, HandlerError, Payload};

#[derive(Clone)]
pub struct SimulationState {
    store: Rc<RefCell<ComponentStore>>,
    environment: Rc<RefCell<Box<dyn Environment>>>,
    bus: EventBus,
    already_inactivated_this_tick: Rc<RefCell<HashSet<EntityId>>>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// A fresh, empty store paired with a `NoopEnvironment` — callers that
    /// need a real spatial world should follow up with
    /// [`SimulationState::set_environment`].
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(ComponentStore::new())),
            environment: Rc::new(RefCell::new(Box::new(NoopEnvironment))),
            bus: EventBus::new(),
            already_inactivated_this_tick: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Rebuild state around a pre-populated store and environment (used by
    /// snapshot restore, which reconstructs both directly).
    pub fn from_parts(store: ComponentStore, environment: Box<dyn Environment>) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            environment: Rc::new(RefCell::new(environment)),
            bus: EventBus::new(),
            already_inactivated_this_tick: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Rebuild state around a pre-populated store, keeping the default
    /// `NoopEnvironment` (used by snapshot restore when the embedder has no
    /// real spatial world, and by tests).
    pub fn from_store(store: ComponentStore) -> Self {
        Self::from_parts(store, Box::new(NoopEnvironment))
    }

    pub fn store(&self) -> Ref<'_, ComponentStore> {
        self.store.borrow()
    }

    pub fn store_mut(&self) -> RefMut<'_, ComponentStore> {
        self.store.borrow_mut()
    }

    /// A clone of the store handle, for Systems to capture at
    /// registration time.
    pub fn store_handle(&self) -> Rc<RefCell<ComponentStore>> {
        self.store.clone()
    }

    /// Replace the environment collaborator (e.g. after the embedder
    /// constructs its concrete world implementation).
    pub fn set_environment(&self, environment: Box<dyn Environment>) {
        *self.environment.borrow_mut() = environment;
    }

    pub fn environment(&self) -> Ref<'_, dyn Environment> {
        Ref::map(self.environment.borrow(), |b| b.as_ref())
    }

    pub fn environment_mut(&self) -> RefMut<'_, dyn Environment> {
        RefMut::map(self.environment.borrow_mut(), |b| b.as_mut())
    }

    /// A clone of the environment handle, for Systems to capture at
    /// registration time.
    pub fn environment_handle(&self) -> Rc<RefCell<Box<dyn Environment>>> {
        self.environment.clone()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// `true` iff `id` has a `TimeBudgetComponent` with `is_active == true`.
    pub fn is_active(&self, id: &EntityId) -> bool {
        self.store()
            .get_as::<TimeBudgetComponent>(id, TIME_BUDGET_TAG)
            .map(|tb| tb.is_active)
            .unwrap_or(false)
    }

    /// The insertion-ordered set of currently active entities.
    pub fn active_entity_ids(&self) -> Vec<EntityId> {
        self.store()
            .entities_with(&[TIME_BUDGET_TAG])
            .into_iter()
            .filter_map(|(id, comps)| {
                let tb = comps
                    .get(&TIME_BUDGET_TAG)?
                    .as_any()
                    .downcast_ref::<TimeBudgetComponent>()?;
                tb.is_active.then_some(id)
            })
            .collect()
    }

    /// Must be called once at the start of every tick, before any
    /// deactivation can occur, so the at-most-once guarantee is scoped
    /// per tick rather than per run.
    pub fn begin_tick(&self) {
        self.already_inactivated_this_tick.borrow_mut().clear();
    }

    /// Flip `id`'s `TimeBudgetComponent.is_active` to `false` and publish
    /// `entity_inactivated`, deduped so a second deactivation source for
    /// the same entity in the same tick is silent.
    pub fn deactivate_entity(
        &self,
        id: &EntityId,
        current_tick: Tick,
        reason: impl Into<String>,
    ) -> Result<(), HandlerError> {
        {
            let mut store = self.store_mut();
            if let Some(tb) = store.get_as_mut::<TimeBudgetComponent>(id, TIME_BUDGET_TAG) {
                tb.is_active = false;
                tb.current_time_budget = 0.0;
            }
        }

        let first_this_tick = self.already_inactivated_this_tick.borrow_mut().insert(id.clone());
        if first_this_tick {
            let payload = Payload::new(id.clone(), current_tick).with_reason(reason);
            self.bus.publish(topics::ENTITY_INACTIVATED, &payload)?;
        }
        Ok(())
    }
}
