use std::collections::HashMap;

use serde_json::Value;
use sim_core::{EntityId, Intent};

use crate::context::SimContext;

/// Turns a resolved action's base reward into the reward actually
/// recorded against the entity. Pure: given the same inputs, always
/// returns the same `(final_reward, breakdown)`.
pub trait RewardCalculator {
    fn calculate_final_reward(
        &self,
        ctx: &SimContext,
        entity_id: &EntityId,
        base_reward: f64,
        action_type: &str,
        intent: Intent,
        details: &HashMap<String, Value>,
    ) -> (f64, HashMap<String, Value>);
}
