//! Synchronous, in-process, topic-keyed event dispatch.
//!
//! | module    | contents                                          |
//! |-----------|------------------------------------------------------|
//! | `bus`     | `EventBus`                                          |
//! | `payload` | `Payload`                                           |
//! | `topics`  | Action-lifecycle topic constants + `execute_topic`  |
//! | `error`   | `HandlerError`                                      |

mod bus;
mod error;
mod payload;
pub mod topics;

pub use bus::EventBus;
pub use error::HandlerError;
pub use payload::Payload;
