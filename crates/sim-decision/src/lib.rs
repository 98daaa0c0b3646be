//! Pluggable decision-pipeline and reward interfaces.
//!
//! | module               | contents                                   |
//! |-----------------------|---------------------------------------------|
//! | `context`             | `SimContext`                               |
//! | `action_generator`    | `ActionGenerator`                          |
//! | `decision_selector`   | `DecisionSelector`                         |
//! | `reward_calculator`   | `RewardCalculator`                         |
//! | `cognitive_scaffold`  | `CognitiveScaffold` (async)                |
//! | `environment`         | `Environment`, `NoopEnvironment`           |
//! | `noop`                | `NoopCognitiveScaffold`, `NoopRewardCalculator` |
//! | `error`               | `DecisionError`                            |

mod action_generator;
mod cognitive_scaffold;
mod context;
mod decision_selector;
mod environment;
mod error;
mod noop;
mod reward_calculator;

pub use action_generator::ActionGenerator;
pub use cognitive_scaffold::CognitiveScaffold;
pub use context::SimContext;
pub use decision_selector::DecisionSelector;
pub use environment::{Environment, EnvironmentError, EnvironmentResult, NoopEnvironment, Position};
pub use error::{DecisionError, DecisionResult};
pub use noop::{NoopCognitiveScaffold, NoopRewardCalculator};
pub use reward_calculator::RewardCalculator;

#[cfg(test)]
mod tests;
