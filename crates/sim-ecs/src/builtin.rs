//! Built-in component types every actable entity needs: a time budget that
//! gates activity, a transient per-tick action plan, and the outcome of
//! the most recently executed action.

use std::any::Any;
use std::collections::HashMap;

use serde_json::{json, Map, Value};
use sim_core::{ComponentTypeTag, EntityId, Intent, SimConfig};

use crate::component::Component;

pub const TIME_BUDGET_TAG: ComponentTypeTag = ComponentTypeTag("time_budget");
pub const ACTION_PLAN_TAG: ComponentTypeTag = ComponentTypeTag("action_plan");
pub const ACTION_OUTCOME_TAG: ComponentTypeTag = ComponentTypeTag("action_outcome");

// ── TimeBudgetComponent ──────────────────────────────────────────────────────

/// Gates whether an entity is eligible for a turn this tick.
///
/// Invariant: `is_active ⇔ current_time_budget > 0`. `max_time_budget` is
/// always `2 × initial_time_budget`.
#[derive(Clone, Debug)]
pub struct TimeBudgetComponent {
    pub initial_time_budget: f64,
    pub max_time_budget: f64,
    pub current_time_budget: f64,
    pub is_active: bool,
    /// Tally of how many times each action type has fired for this
    /// entity, updated by the action lifecycle at its terminal step.
    pub action_counts: HashMap<String, u64>,
}

impl TimeBudgetComponent {
    pub fn new(initial_time_budget: f64) -> Self {
        Self {
            initial_time_budget,
            max_time_budget: initial_time_budget * 2.0,
            current_time_budget: initial_time_budget,
            is_active: initial_time_budget > 0.0,
            action_counts: HashMap::new(),
        }
    }

    pub fn record_action(&mut self, action_type: &str) {
        *self.action_counts.entry(action_type.to_string()).or_insert(0) += 1;
    }
}

impl Component for TimeBudgetComponent {
    fn type_tag(&self) -> ComponentTypeTag {
        TIME_BUDGET_TAG
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("initial_time_budget".into(), json!(self.initial_time_budget));
        m.insert("max_time_budget".into(), json!(self.max_time_budget));
        m.insert("current_time_budget".into(), json!(self.current_time_budget));
        m.insert("is_active".into(), json!(self.is_active));
        m.insert("action_counts".into(), json!(self.action_counts));
        m
    }

    fn validate(&self, entity_id: &EntityId) -> (bool, Vec<String>) {
        let mut errors = Vec::new();
        if self.initial_time_budget <= 0.0 {
            errors.push(format!("{entity_id}: initial_time_budget must be > 0"));
        }
        if (self.max_time_budget - self.initial_time_budget * 2.0).abs() > f64::EPSILON {
            errors.push(format!(
                "{entity_id}: max_time_budget must equal 2x initial_time_budget"
            ));
        }
        if self.current_time_budget < 0.0 {
            errors.push(format!("{entity_id}: current_time_budget must be >= 0"));
        }
        if self.current_time_budget > self.max_time_budget {
            errors.push(format!("{entity_id}: current_time_budget exceeds max_time_budget"));
        }
        if self.is_active != (self.current_time_budget > 0.0) {
            errors.push(format!(
                "{entity_id}: is_active must equal (current_time_budget > 0)"
            ));
        }
        (errors.is_empty(), errors)
    }

    fn auto_fix(&mut self, _entity_id: &EntityId, _config: &SimConfig) -> bool {
        let mut changed = false;

        let expected_max = self.initial_time_budget * 2.0;
        if (self.max_time_budget - expected_max).abs() > f64::EPSILON {
            self.max_time_budget = expected_max;
            changed = true;
        }
        if self.current_time_budget < 0.0 {
            self.current_time_budget = 0.0;
            changed = true;
        }
        if self.current_time_budget > self.max_time_budget {
            self.current_time_budget = self.max_time_budget;
            changed = true;
        }
        let should_be_active = self.current_time_budget > 0.0;
        if self.is_active != should_be_active {
            self.is_active = should_be_active;
            changed = true;
        }

        changed
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── ActionPlanComponent ──────────────────────────────────────────────────────

/// The chosen (action-id, intent, params) triple for the current tick.
/// Overwritten every time a new plan is attached; not meaningful across
/// ticks.
#[derive(Clone, Debug)]
pub struct ActionPlanComponent {
    pub action_type: String,
    pub intent: Intent,
    pub params: HashMap<String, Value>,
}

impl ActionPlanComponent {
    pub fn new(action_type: impl Into<String>, intent: Intent) -> Self {
        Self {
            action_type: action_type.into(),
            intent,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl Component for ActionPlanComponent {
    fn type_tag(&self) -> ComponentTypeTag {
        ACTION_PLAN_TAG
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("action_type".into(), json!(self.action_type));
        m.insert("intent".into(), json!(self.intent.to_string()));
        m.insert("params".into(), json!(self.params));
        m
    }

    fn validate(&self, entity_id: &EntityId) -> (bool, Vec<String>) {
        if self.action_type.is_empty() {
            (false, vec![format!("{entity_id}: action_type must not be empty")])
        } else {
            (true, Vec::new())
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── ActionOutcomeComponent ───────────────────────────────────────────────────

/// The result of the most recently executed action.
#[derive(Clone, Debug)]
pub struct ActionOutcomeComponent {
    pub success: bool,
    pub base_reward: f64,
    pub final_reward: f64,
    pub details: HashMap<String, Value>,
}

impl ActionOutcomeComponent {
    pub fn new(success: bool, base_reward: f64, final_reward: f64) -> Self {
        Self {
            success,
            base_reward,
            final_reward,
            details: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl Component for ActionOutcomeComponent {
    fn type_tag(&self) -> ComponentTypeTag {
        ACTION_OUTCOME_TAG
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("success".into(), json!(self.success));
        m.insert("base_reward".into(), json!(self.base_reward));
        m.insert("final_reward".into(), json!(self.final_reward));
        m.insert("details".into(), json!(self.details));
        m
    }

    fn validate(&self, entity_id: &EntityId) -> (bool, Vec<String>) {
        if !self.final_reward.is_finite() {
            (false, vec![format!("{entity_id}: final_reward must be finite")])
        } else {
            (true, Vec::new())
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
