//! Value Objects
//!
//! Immutable value types shared across the pipeline.

pub mod distribution;
pub mod input_method;
pub mod mood;
pub mod trend;

pub use distribution::MoodDistribution;
pub use input_method::InputMethod;
pub use mood::Mood;
pub use trend::Trend;
