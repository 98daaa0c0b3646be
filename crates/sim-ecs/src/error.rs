use sim_core::{ComponentTypeTag, EntityId};
use thiserror::Error;

/// Errors raised by [`crate::ComponentStore`] operations.
#[derive(Debug, Error)]
pub enum EcsError {
    #[error("entity already exists: {0}")]
    DuplicateEntity(EntityId),

    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    #[error("unknown component type: {0}")]
    UnknownComponentType(ComponentTypeTag),
}

pub type EcsResult<T> = Result<T, EcsError>;
