//! Services
//!
//! Concrete adapters behind the ports: the hosted Gemini gateway, the
//! offline keyword classifier, and the persistence implementations.

pub mod file_store;
pub mod gemini;
pub mod keyword;
pub mod memory_store;

pub use file_store::FileStateStore;
pub use gemini::GeminiClassifier;
pub use keyword::KeywordClassifier;
pub use memory_store::MemoryStateStore;
