//! Snapshot serialization, file persistence, and component rehydration.
//!
//! | module      | contents                                    |
//! |-------------|-----------------------------------------------|
//! | `snapshot`  | `Snapshot`, `EntitySnapshot`, `capture`/`restore` |
//! | `factory`   | `ComponentFactory`                          |
//! | `store`     | `SnapshotStore` (file naming and I/O)       |
//! | `error`     | `SnapshotError`                             |

mod error;
mod factory;
mod snapshot;
mod store;

pub use error::{SnapshotError, SnapshotResult};
pub use factory::ComponentFactory;
pub use snapshot::{capture, restore, EntitySnapshot, Snapshot};
pub use store::SnapshotStore;

#[cfg(test)]
mod tests;
