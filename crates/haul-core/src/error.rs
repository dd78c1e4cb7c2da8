//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or stay separate.  Expected runtime
//! conditions (no route, rejected assignment, missing building) are **not**
//! errors anywhere in this workspace — they are `Option`/`bool`/outcome
//! values.  Error enums are reserved for contract violations and I/O.

use thiserror::Error;

use crate::EntityId;

/// The top-level error type for `haul-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `haul-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
