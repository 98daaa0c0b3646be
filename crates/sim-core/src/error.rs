//! Core error type.
//!
//! Every other crate in the workspace defines its own narrow error enum
//! and converts into this one — or its own — at the boundary with
//! `#[from]`.

use thiserror::Error;

/// Errors that can arise from `sim-core` primitives themselves.
///
/// This is deliberately small: `Tick`/`EntityId`/`SimRng` are infallible by
/// construction. It exists mainly so downstream crates have a concrete leaf
/// variant to `#[from]`-wrap instead of reaching for `String`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
