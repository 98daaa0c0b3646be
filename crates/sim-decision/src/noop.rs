//! Trivial collaborator implementations, for tests and minimal embedders —
//! every pluggable interface in this lineage ships a no-op alongside it.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use sim_core::{EntityId, Intent, Tick};

use crate::cognitive_scaffold::CognitiveScaffold;
use crate::context::SimContext;
use crate::reward_calculator::RewardCalculator;

/// Always returns an empty string without doing any work.
pub struct NoopCognitiveScaffold;

#[async_trait(?Send)]
impl CognitiveScaffold for NoopCognitiveScaffold {
    async fn query(&self, _entity_id: &EntityId, _purpose: &str, _prompt: &str, _current_tick: Tick) -> String {
        String::new()
    }
}

/// Identity reward calculator: `final_reward = base_reward`, empty
/// breakdown.
pub struct NoopRewardCalculator;

impl RewardCalculator for NoopRewardCalculator {
    fn calculate_final_reward(
        &self,
        _ctx: &SimContext,
        _entity_id: &EntityId,
        base_reward: f64,
        _action_type: &str,
        _intent: Intent,
        _details: &HashMap<String, Value>,
    ) -> (f64, HashMap<String, Value>) {
        (base_reward, HashMap::new())
    }
}
