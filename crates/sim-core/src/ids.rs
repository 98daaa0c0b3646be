//! Opaque, stable entity identifiers.
//!
//! Entities are identified by a stable string, not by a dense integer
//! index: entities here are created and destroyed over the run's
//! lifetime, so there is no fixed upper bound to index a `Vec` by.
//!
//! `EntityId` wraps an `Arc<str>` so cloning (which happens constantly —
//! every event payload, every component-store lookup) is a refcount bump,
//! not an allocation.

use std::fmt;
use std::sync::Arc;

/// A stable, opaque entity identifier.
///
/// Two `EntityId`s are equal iff their underlying strings are equal;
/// hashing and ordering are likewise string-based so entities can be used
/// as `HashMap`/`BTreeMap` keys directly.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(Arc<str>);

impl EntityId {
    /// Wrap any string-like value as an `EntityId`.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({:?})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(Arc::from(s.as_str()))
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A canonical, stable name for a component type, used as the
/// component-store key instead of a class object or `TypeId` so the store
/// can stay a plain string-keyed map.
///
/// `ComponentTypeTag` wraps a `&'static str` since every component type is
/// registered once, at process startup, by a string literal (e.g.
/// `"time_budget"`, `"action_plan"`) — no runtime allocation is needed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ComponentTypeTag(pub &'static str);

impl ComponentTypeTag {
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ComponentTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for ComponentTypeTag {
    fn from(s: &'static str) -> Self {
        Self(s)
    }
}
