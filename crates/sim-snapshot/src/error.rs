use thiserror::Error;

/// Errors raised while capturing, writing, reading, or restoring a
/// [`crate::Snapshot`].
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown component type in snapshot: {0}")]
    UnknownComponentType(String),

    /// Any other structural problem found while restoring: a duplicate
    /// entity id, a component dict that isn't an object, a factory
    /// rejecting a component's data, an environment that can't rehydrate
    /// its `to_dict` output. Restore is all-or-nothing — the first
    /// `Corrupt` aborts the whole restore; a partial restore is never left
    /// in place.
    #[error("snapshot corrupt: {0}")]
    Corrupt(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
