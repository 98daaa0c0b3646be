use super::*;
use sim_core::{EntityId, Intent, SimConfig};

fn cfg() -> SimConfig {
    SimConfig::new(10, "./snapshots", Some(1))
}

mod store_tests {
    use super::*;

    #[test]
    fn add_entity_then_duplicate_fails() {
        let mut store = ComponentStore::new();
        let a = EntityId::new("a");
        store.add_entity(a.clone()).unwrap();
        let err = store.add_entity(a).unwrap_err();
        assert!(matches!(err, EcsError::DuplicateEntity(_)));
    }

    #[test]
    fn add_component_to_unknown_entity_fails() {
        let mut store = ComponentStore::new();
        let err = store
            .add_component(&EntityId::new("ghost"), Box::new(TimeBudgetComponent::new(10.0)))
            .unwrap_err();
        assert!(matches!(err, EcsError::UnknownEntity(_)));
    }

    #[test]
    fn add_component_replaces_existing_of_same_type() {
        let mut store = ComponentStore::new();
        let a = EntityId::new("a");
        store.add_entity(a.clone()).unwrap();
        store
            .add_component(&a, Box::new(TimeBudgetComponent::new(10.0)))
            .unwrap();
        store
            .add_component(&a, Box::new(TimeBudgetComponent::new(20.0)))
            .unwrap();

        let tb = store.get_as::<TimeBudgetComponent>(&a, TIME_BUDGET_TAG).unwrap();
        assert_eq!(tb.initial_time_budget, 20.0);
    }

    #[test]
    fn remove_entity_drops_all_components() {
        let mut store = ComponentStore::new();
        let a = EntityId::new("a");
        store.add_entity(a.clone()).unwrap();
        store
            .add_component(&a, Box::new(TimeBudgetComponent::new(10.0)))
            .unwrap();
        store.remove_entity(&a);
        assert!(!store.contains_entity(&a));
        assert!(store.entity_ids().is_empty());
    }

    #[test]
    fn remove_entity_is_noop_if_absent() {
        let mut store = ComponentStore::new();
        store.remove_entity(&EntityId::new("ghost"));
        assert!(store.is_empty());
    }

    #[test]
    fn entities_with_returns_insertion_order_subset() {
        let mut store = ComponentStore::new();
        for name in ["c", "a", "b"] {
            let id = EntityId::new(name);
            store.add_entity(id.clone()).unwrap();
            store
                .add_component(&id, Box::new(TimeBudgetComponent::new(5.0)))
                .unwrap();
        }
        // "b" gets no ActionPlan, so the two-tag query excludes it.
        store
            .add_component(
                &EntityId::new("c"),
                Box::new(ActionPlanComponent::new("move", Intent::Solitary)),
            )
            .unwrap();
        store
            .add_component(
                &EntityId::new("a"),
                Box::new(ActionPlanComponent::new("move", Intent::Solitary)),
            )
            .unwrap();

        let matches = store.entities_with(&[TIME_BUDGET_TAG, ACTION_PLAN_TAG]);
        let ids: Vec<_> = matches.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn get_as_mut_allows_in_place_mutation() {
        let mut store = ComponentStore::new();
        let a = EntityId::new("a");
        store.add_entity(a.clone()).unwrap();
        store
            .add_component(&a, Box::new(TimeBudgetComponent::new(10.0)))
            .unwrap();

        {
            let tb = store.get_as_mut::<TimeBudgetComponent>(&a, TIME_BUDGET_TAG).unwrap();
            tb.current_time_budget = 0.0;
            tb.is_active = false;
        }

        let tb = store.get_as::<TimeBudgetComponent>(&a, TIME_BUDGET_TAG).unwrap();
        assert!(!tb.is_active);
    }
}

mod time_budget_tests {
    use super::*;

    #[test]
    fn new_sets_max_to_double_initial() {
        let tb = TimeBudgetComponent::new(50.0);
        assert_eq!(tb.max_time_budget, 100.0);
        assert!(tb.is_active);
    }

    #[test]
    fn validate_flags_inconsistent_is_active() {
        let tb = TimeBudgetComponent {
            initial_time_budget: 10.0,
            max_time_budget: 20.0,
            current_time_budget: 0.0,
            is_active: true,
            action_counts: Default::default(),
        };
        let (ok, errors) = tb.validate(&EntityId::new("a"));
        assert!(!ok);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn auto_fix_reconciles_is_active_and_is_idempotent() {
        let mut tb = TimeBudgetComponent {
            initial_time_budget: 10.0,
            max_time_budget: 20.0,
            current_time_budget: 0.0,
            is_active: true,
            action_counts: Default::default(),
        };
        let id = EntityId::new("a");
        assert!(tb.auto_fix(&id, &cfg()));
        assert!(!tb.is_active);
        assert!(!tb.auto_fix(&id, &cfg()), "second call must be a no-op");
    }

    #[test]
    fn auto_fix_clamps_over_max() {
        let mut tb = TimeBudgetComponent::new(10.0);
        tb.current_time_budget = 999.0;
        let id = EntityId::new("a");
        assert!(tb.auto_fix(&id, &cfg()));
        assert_eq!(tb.current_time_budget, tb.max_time_budget);
    }

    #[test]
    fn record_action_increments_count() {
        let mut tb = TimeBudgetComponent::new(10.0);
        tb.record_action("move");
        tb.record_action("move");
        tb.record_action("wait");
        assert_eq!(tb.action_counts.get("move"), Some(&2));
        assert_eq!(tb.action_counts.get("wait"), Some(&1));
    }

    #[test]
    fn to_dict_round_trips_through_json_shape() {
        let tb = TimeBudgetComponent::new(10.0);
        let dict = tb.to_dict();
        assert_eq!(dict.get("initial_time_budget").unwrap(), &serde_json::json!(10.0));
        assert_eq!(dict.get("is_active").unwrap(), &serde_json::json!(true));
    }
}

mod action_plan_tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_action_type() {
        let plan = ActionPlanComponent::new("", Intent::Cooperative);
        let (ok, _) = plan.validate(&EntityId::new("a"));
        assert!(!ok);
    }

    #[test]
    fn with_param_builder_sets_params() {
        let plan = ActionPlanComponent::new("move", Intent::Solitary).with_param("dir", 0);
        assert_eq!(plan.params.get("dir"), Some(&serde_json::json!(0)));
    }
}

mod action_outcome_tests {
    use super::*;

    #[test]
    fn validate_rejects_non_finite_final_reward() {
        let outcome = ActionOutcomeComponent::new(true, 0.1, f64::NAN);
        let (ok, errors) = outcome.validate(&EntityId::new("a"));
        assert!(!ok);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn validate_accepts_finite_reward() {
        let outcome = ActionOutcomeComponent::new(true, 0.1, 0.1);
        let (ok, _) = outcome.validate(&EntityId::new("a"));
        assert!(ok);
    }
}
