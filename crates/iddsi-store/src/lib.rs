//! # iddsi-store
//!
//! Document store implementations and the typed repositories built on top
//! of any [`DocumentStore`](iddsi_core::traits::DocumentStore).

pub mod collections;
pub mod memory;
pub mod repositories;

pub use memory::MemoryDocumentStore;
