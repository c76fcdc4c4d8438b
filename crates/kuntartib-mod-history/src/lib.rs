/// Bounded undo/redo history.
///
/// Provides `BoundedHistory<T>`, a linear history of opaque snapshots with
/// a cursor, capacity eviction, and a recording guard that suppresses
/// pushes triggered while a snapshot is being replayed. The stack lives in
/// memory only and is never serialized; history resets with the session.
pub mod config;
pub mod stack;

pub use config::HistoryConfig;
pub use stack::BoundedHistory;
