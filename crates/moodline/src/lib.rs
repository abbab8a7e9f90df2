//! Moodline Domain Library
//!
//! Core types and pipeline for the mood journal.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (MoodEntry, WeeklySummary, PatternInsight)
//!   - `value_objects/`: Immutable value types (Mood, InputMethod, Trend, MoodDistribution)
//!   - `aggregate`: Pure aggregation functions (frequency, dominant mood, trend)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `classifier`: Classifier gateway interface (LLM calls)
//!   - `state_store`: Key-value persistence interface
//!
//! - **Pipeline** (`pipeline/`): The journal orchestrator and its stores
//!
//! - **Services** (`services/`): Concrete adapters (Gemini client,
//!   file-backed store, keyword fallback classifier)

pub mod domain;
pub mod pipeline;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    average_confidence, dominant_mood, frequency_of, trend, InputMethod, Mood, MoodDistribution,
    MoodEntry, PatternInsight, PipelineError, Trend, WeeklySummary,
};
pub use pipeline::{EntryPatch, EntryStore, JournalConfig, MoodJournal, SummaryStore};
pub use ports::{
    Classification, MoodClassifier, PatternContext, PatternEntry, StateStore, SummaryContext,
    SummaryNarrative,
};
pub use services::{FileStateStore, GeminiClassifier, KeywordClassifier, MemoryStateStore};
