//! Pipeline
//!
//! The journal orchestrator and the two capacity-bounded stores it owns.

pub mod entry_store;
pub mod journal;
pub mod summary_store;

pub use entry_store::{EntryPatch, EntryStore};
pub use journal::{JournalConfig, MoodJournal};
pub use summary_store::SummaryStore;
