//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, aggregation functions, and errors.

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod week;

// Re-exports for convenience
pub use aggregate::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
