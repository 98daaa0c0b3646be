//! The `Component` trait: the vtable every component type plugs into the
//! store's per-tag registry (see the type-tag redesign note this crate
//! follows instead of keying on a class object / `TypeId`).

use std::any::Any;
use std::fmt::Debug;

use sim_core::{ComponentTypeTag, EntityId, SimConfig};

/// A typed record attached to an entity.
///
/// Each entity holds at most one component per [`ComponentTypeTag`].
/// Implementors are boxed as `Box<dyn Component>` in the store, so
/// downcasting via [`Component::as_any`]/[`Component::as_any_mut`] is how
/// callers recover the concrete type.
pub trait Component: Debug + Send {
    /// The canonical, stable name identifying this component's type.
    fn type_tag(&self) -> ComponentTypeTag;

    /// A snapshot-safe representation, keyed by field name.
    fn to_dict(&self) -> serde_json::Map<String, serde_json::Value>;

    /// Check the component's invariants. Returns `(is_valid, errors)`.
    fn validate(&self, entity_id: &EntityId) -> (bool, Vec<String>);

    /// Attempt an in-place repair. Returns whether anything changed.
    ///
    /// Must be idempotent: calling this twice in a row on an
    /// already-fixed component returns `false` the second time.
    /// Components with no fixable invariants can accept the default,
    /// which always reports no change.
    fn auto_fix(&mut self, _entity_id: &EntityId, _config: &SimConfig) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
