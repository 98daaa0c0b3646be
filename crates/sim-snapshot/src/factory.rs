//! Component rehydration: a registered `ComponentFactory` reconstructs
//! each component from its `type_tag` and dict.
//!
//! The embedder owns the mapping from type tag to concrete component
//! constructor, since the core has no way to name an embedder-defined
//! component type at compile time.

use serde_json::{Map, Value};
use sim_ecs::Component;

use crate::error::SnapshotError;

/// Reconstructs components from their snapshot dict form.
///
/// Implementations typically match on `type_tag` and delegate to each
/// component's own `from_dict`-equivalent constructor; an unrecognized tag
/// should return [`SnapshotError::UnknownComponentType`] rather than
/// silently dropping the component, since a dropped component would make
/// `restore(capture(state)) == state` false.
pub trait ComponentFactory {
    fn create_component(&self, type_tag: &str, data: &Map<String, Value>) -> Result<Box<dyn Component>, SnapshotError>;
}
