//! Registry load-time errors.
//!
//! Resolution never errors; only constructing a registry from records
//! can fail, and a failure means the seed data itself is defective.

use sentra_core::EntityKind;
use thiserror::Error;

/// Error building a [`BreakdownRegistry`](crate::BreakdownRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A record carries an empty lookup key.
    #[error("empty key for {kind} record")]
    EmptyKey { kind: EntityKind },

    /// Two records share the same `(kind, key)` pair.
    #[error("duplicate {kind} record for key \"{key}\"")]
    DuplicateKey { kind: EntityKind, key: String },
}
