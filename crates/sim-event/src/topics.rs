//! Core action-lifecycle topic names.
//!
//! `execute_<action_id>_action` is parameterized on the action's id and is
//! built with [`execute_topic`] rather than given a constant.

pub const ACTION_CHOSEN: &str = "action_chosen";
pub const ACTION_OUTCOME_READY: &str = "action_outcome_ready";
pub const ACTION_EXECUTED: &str = "action_executed";
pub const ENTITY_INACTIVATED: &str = "entity_inactivated";

/// The fan-out routing topic for a specific action id, e.g.
/// `execute_teleport_action` for `action_id = "teleport"`.
pub fn execute_topic(action_id: &str) -> String {
    format!("execute_{action_id}_action")
}
