//! The event payload carried by every `publish` call.
//!
//! Every payload carries `entity_id` and `current_tick`; the
//! remaining fields are topic-specific and left `None`/empty when unused
//! rather than split into one struct per topic, since handlers already
//! know which topic they subscribed to and therefore which fields to
//! expect.

use std::collections::HashMap;

use serde_json::Value;
use sim_core::{EntityId, Tick};
use sim_ecs::{ActionOutcomeComponent, ActionPlanComponent};

#[derive(Clone, Debug)]
pub struct Payload {
    pub entity_id: EntityId,
    pub current_tick: Tick,
    pub action_plan: Option<ActionPlanComponent>,
    pub original_action_plan: Option<ActionPlanComponent>,
    pub action_outcome: Option<ActionOutcomeComponent>,
    pub reason: Option<String>,
    pub extra: HashMap<String, Value>,
}

impl Payload {
    pub fn new(entity_id: EntityId, current_tick: Tick) -> Self {
        Self {
            entity_id,
            current_tick,
            action_plan: None,
            original_action_plan: None,
            action_outcome: None,
            reason: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_action_plan(mut self, plan: ActionPlanComponent) -> Self {
        self.action_plan = Some(plan);
        self
    }

    pub fn with_original_action_plan(mut self, plan: ActionPlanComponent) -> Self {
        self.original_action_plan = Some(plan);
        self
    }

    pub fn with_action_outcome(mut self, outcome: ActionOutcomeComponent) -> Self {
        self.action_outcome = Some(outcome);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
