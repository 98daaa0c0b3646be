use super::*;
use sim_core::{EntityId, Tick};
use sim_ecs::{ActionPlanComponent, ComponentStore};

struct FixedGenerator;

impl ActionGenerator for FixedGenerator {
    fn generate(&self, _ctx: &SimContext, _entity_id: &EntityId) -> Vec<ActionPlanComponent> {
        vec![ActionPlanComponent::new("move", Intent::Solitary)]
    }
}

struct FirstCandidateSelector;

impl DecisionSelector for FirstCandidateSelector {
    fn select(
        &self,
        _ctx: &SimContext,
        _entity_id: &EntityId,
        mut candidates: Vec<ActionPlanComponent>,
    ) -> Option<ActionPlanComponent> {
        if candidates.is_empty() {
            None
        } else {
            Some(candidates.remove(0))
        }
    }
}

use sim_core::Intent;

mod action_generator_tests {
    use super::*;

    #[test]
    fn generate_returns_candidates() {
        let store = ComponentStore::new();
        let env = NoopEnvironment;
        let ctx = SimContext::new(Tick(0), &store, &env);
        let gen = FixedGenerator;
        let candidates = gen.generate(&ctx, &EntityId::new("a"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].action_type, "move");
    }
}

mod decision_selector_tests {
    use super::*;

    #[test]
    fn select_none_from_empty_candidates_passes_turn() {
        let store = ComponentStore::new();
        let env = NoopEnvironment;
        let ctx = SimContext::new(Tick(0), &store, &env);
        let selector = FirstCandidateSelector;
        assert!(selector.select(&ctx, &EntityId::new("a"), vec![]).is_none());
    }

    #[test]
    fn select_picks_first_candidate() {
        let store = ComponentStore::new();
        let env = NoopEnvironment;
        let ctx = SimContext::new(Tick(0), &store, &env);
        let selector = FirstCandidateSelector;
        let candidates = vec![ActionPlanComponent::new("move", Intent::Solitary)];
        let chosen = selector.select(&ctx, &EntityId::new("a"), candidates).unwrap();
        assert_eq!(chosen.action_type, "move");
    }
}

mod noop_reward_calculator_tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn final_reward_equals_base_reward() {
        let store = ComponentStore::new();
        let env = NoopEnvironment;
        let ctx = SimContext::new(Tick(0), &store, &env);
        let calc = NoopRewardCalculator;
        let (final_reward, breakdown) = calc.calculate_final_reward(
            &ctx,
            &EntityId::new("a"),
            0.5,
            "move",
            Intent::Solitary,
            &HashMap::new(),
        );
        assert_eq!(final_reward, 0.5);
        assert!(breakdown.is_empty());
    }
}

mod noop_cognitive_scaffold_tests {
    use super::*;

    #[tokio::test]
    async fn query_returns_empty_string() {
        let scaffold = NoopCognitiveScaffold;
        let result = scaffold.query(&EntityId::new("a"), "test", "prompt", Tick(0)).await;
        assert_eq!(result, "");
    }
}

mod noop_environment_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_position_is_ever_valid_or_occupied() {
        let mut env = NoopEnvironment;
        let pos = json!({"x": 1, "y": 2});
        assert!(!env.is_valid_position(&pos));
        assert!(env.get_neighbors(&pos).is_empty());
        assert!(env.get_entities_at_position(&pos).is_empty());
        assert!(env.get_entities_in_radius(&pos, 10.0).is_empty());
        assert!(env.update_entity_position(&EntityId::new("a"), &pos).is_ok());
        env.remove_entity(&EntityId::new("a"));
        assert!(env.to_dict().is_empty());
        assert!(env.restore_from_dict(&serde_json::Map::new()).is_ok());
    }
}
