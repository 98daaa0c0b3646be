//! Core types shared across the simulation workspace.
//!
//! | module    | contents                                             |
//! |-----------|-------------------------------------------------------|
//! | `ids`     | `EntityId`, `ComponentTypeTag`                        |
//! | `time`    | `Tick`, `SimConfig`                                    |
//! | `rng`     | `SimRng`, the deterministic master RNG                 |
//! | `intent`  | `Intent`                                               |
//! | `error`   | `CoreError`                                            |
//!
//! Nothing here depends on any other workspace crate; everything else
//! depends on this one. Enable the `serde` feature to derive
//! `Serialize`/`Deserialize` on the public types that need to round-trip
//! through a snapshot.

mod error;
mod ids;
mod intent;
mod rng;
mod time;

pub use error::{CoreError, CoreResult};
pub use ids::{ComponentTypeTag, EntityId};
pub use intent::Intent;
pub use rng::SimRng;
pub use time::{SimConfig, Tick};

#[cfg(test)]
mod tests;
