//! Call history
//!
//! - `LogEntry` - One settled call with its frozen payload tag
//! - `FilterMode` - Outcome filter used by the console
//! - `Storage` - Durable string slots (file or memory backed)
//! - `LogStore` - Bounded newest-first list persisted through `Storage`

pub mod entry;
pub mod filter;
pub mod storage;
pub mod store;

pub use entry::{CallStatus, EntryKind, LogEntry, SettledCall};
pub use filter::FilterMode;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{normalize_base_url, LogStore};
