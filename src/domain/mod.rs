//! Domain layer - Pure business abstractions
//!
//! Trait definitions and domain error types only. The storage driver
//! appears in exactly one place: the error conversion in `errors`.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
