//! Core traits defined in `iddsi-core` and implemented by other crates.

pub mod store;

pub use store::DocumentStore;
