//! In-process document store with JSON snapshot persistence.

pub mod snapshot;
pub mod store;

pub use snapshot::Snapshot;
pub use store::MemoryDocumentStore;
