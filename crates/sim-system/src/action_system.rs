//! The central router of the action lifecycle: consumes `action_chosen`,
//! fans it out to the concrete System that executes that action, then
//! consumes the resulting `action_outcome_ready` to compute the final
//! reward and publish the terminal `action_executed` event.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use sim_core::{EntityId, Tick};
use sim_decision::{Environment, RewardCalculator, SimContext};
use sim_ecs::{ActionOutcomeComponent, ActionPlanComponent, ComponentStore, TimeBudgetComponent, TIME_BUDGET_TAG};
use sim_event::{topics, EventBus, HandlerError, Payload};
use tracing::{error, warn};

use crate::error::SystemError;
use crate::state::SimulationState;
use crate::system::System;

/// Registers itself against `action_chosen` and `action_outcome_ready` at
/// construction time; nothing further is needed from `SystemManager` —
/// `ActionSystem` has no bulk per-tick work of its own, so its `System`
/// impl (in `lib.rs`) is a no-op `update`.
pub struct ActionSystem {
    store: Rc<RefCell<ComponentStore>>,
    environment: Rc<RefCell<Box<dyn Environment>>>,
    bus: EventBus,
}

impl ActionSystem {
    pub fn new(state: &SimulationState, reward_calculator: Rc<dyn RewardCalculator>) -> Self {
        let store = state.store_handle();
        let environment = state.environment_handle();
        let bus = state.bus().clone();

        {
            let store = store.clone();
            let environment = environment.clone();
            let bus_for_dispatch = bus.clone();
            let reward_calculator = reward_calculator.clone();
            bus.subscribe(topics::ACTION_CHOSEN, move |payload| {
                let plan = payload
                    .action_plan
                    .clone()
                    .ok_or_else(|| HandlerError::new(topics::ACTION_CHOSEN, "payload missing action_plan"))?;

                let execute_topic = topics::execute_topic(&plan.action_type);
                if bus_for_dispatch.subscriber_count(&execute_topic) == 0 {
                    let outcome = ActionOutcomeComponent::new(false, 0.0, 0.0).with_detail("status", "unhandled");
                    return Self::score_and_finalize(
                        &store,
                        &environment,
                        &bus_for_dispatch,
                        reward_calculator.as_ref(),
                        payload.entity_id.clone(),
                        payload.current_tick,
                        plan,
                        outcome,
                    );
                }

                let dispatch_payload =
                    Payload::new(payload.entity_id.clone(), payload.current_tick).with_action_plan(plan);
                bus_for_dispatch.publish(&execute_topic, &dispatch_payload)
            });
        }

        {
            let store = store.clone();
            let environment = environment.clone();
            let bus_for_score = bus.clone();
            let reward_calculator = reward_calculator.clone();
            bus.subscribe(topics::ACTION_OUTCOME_READY, move |payload| {
                let plan = payload.original_action_plan.clone().ok_or_else(|| {
                    HandlerError::new(topics::ACTION_OUTCOME_READY, "payload missing original_action_plan")
                })?;
                let outcome = payload
                    .action_outcome
                    .clone()
                    .ok_or_else(|| HandlerError::new(topics::ACTION_OUTCOME_READY, "payload missing action_outcome"))?;

                Self::score_and_finalize(
                    &store,
                    &environment,
                    &bus_for_score,
                    reward_calculator.as_ref(),
                    payload.entity_id.clone(),
                    payload.current_tick,
                    plan,
                    outcome,
                )
            });
        }

        Self { store, environment, bus }
    }

    /// The component store handle this system was wired to at
    /// construction (test/introspection aid).
    pub fn store_handle(&self) -> Rc<RefCell<ComponentStore>> {
        self.store.clone()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Shared Scored → Terminal logic: clamp rewards, call the reward
    /// calculator, write the `ActionOutcomeComponent`, bump the entity's
    /// action tally, publish `action_executed`.
    fn score_and_finalize(
        store: &Rc<RefCell<ComponentStore>>,
        environment: &Rc<RefCell<Box<dyn Environment>>>,
        bus: &EventBus,
        reward_calculator: &dyn RewardCalculator,
        entity_id: EntityId,
        current_tick: Tick,
        plan: ActionPlanComponent,
        outcome: ActionOutcomeComponent,
    ) -> Result<(), HandlerError> {
        let base_reward = if outcome.base_reward.is_finite() {
            outcome.base_reward
        } else {
            warn!(%entity_id, tick = %current_tick, "non-finite base_reward clamped to 0");
            0.0
        };

        let (final_reward, breakdown) = {
            let store_ref = store.borrow();
            let env_ref = environment.borrow();
            let ctx = SimContext::new(current_tick, &store_ref, env_ref.as_ref());
            reward_calculator.calculate_final_reward(
                &ctx,
                &entity_id,
                base_reward,
                &plan.action_type,
                plan.intent,
                &outcome.details,
            )
        };

        let final_reward = if final_reward.is_finite() {
            final_reward
        } else {
            error!(%entity_id, tick = %current_tick, "non-finite final_reward clamped to 0");
            0.0
        };

        let mut final_outcome = ActionOutcomeComponent::new(outcome.success, base_reward, final_reward);
        final_outcome.details = outcome.details;
        for (key, value) in breakdown {
            final_outcome.details.insert(format!("reward_breakdown.{key}"), value);
        }

        {
            let mut store_mut = store.borrow_mut();
            store_mut
                .add_component(&entity_id, Box::new(final_outcome.clone()))
                .map_err(|e| HandlerError::new(topics::ACTION_EXECUTED, e.to_string()))?;
            if let Some(tb) = store_mut.get_as_mut::<TimeBudgetComponent>(&entity_id, TIME_BUDGET_TAG) {
                tb.record_action(&plan.action_type);
            }
        }

        let executed_payload = Payload::new(entity_id, current_tick)
            .with_action_plan(plan)
            .with_action_outcome(final_outcome);
        bus.publish(topics::ACTION_EXECUTED, &executed_payload)
    }
}

#[async_trait(?Send)]
impl System for ActionSystem {
    fn name(&self) -> &'static str {
        "action_system"
    }

    /// No per-tick bulk work of its own; everything happens reactively
    /// through the handlers registered in `new`.
    async fn update(&mut self, _current_tick: Tick) -> Result<(), SystemError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
