//! System registry and the built-in action dispatcher.
//!
//! | module          | contents                                        |
//! |------------------|---------------------------------------------------|
//! | `state`          | `SimulationState`                               |
//! | `system`         | `System` trait, `SystemManager`                 |
//! | `action_system`  | `ActionSystem` (the Dispatched/Scored steps of the action lifecycle) |
//! | `error`          | `SystemError`                                   |

mod action_system;
mod error;
mod state;
mod system;

pub use action_system::ActionSystem;
pub use error::{SystemError, SystemResult};
pub use state::SimulationState;
pub use system::{System, SystemManager};
