//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the pipeline interacts with
//! external systems: the classifier gateway and the persistence facility.
//!
//! Implementations of these traits live in `services/`.

pub mod classifier;
pub mod state_store;

// Re-exports
pub use classifier::*;
pub use state_store::*;
