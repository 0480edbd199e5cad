//! Domain error types
//!
//! These errors are framework-agnostic and represent persistence-level
//! failures. A missing item is never an error: repositories report absence
//! as `Ok(None)`, and `DomainError` is reserved for "could not reach or
//! parse the store".

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// The store could not be reached or rejected the operation
    Store(String),
    /// A stored document does not decode into the entity model
    Serialization(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Store(msg) => write!(f, "Store error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from driver errors (used in infrastructure layer)
impl From<mongodb::error::Error> for DomainError {
    fn from(e: mongodb::error::Error) -> Self {
        DomainError::Store(e.to_string())
    }
}
