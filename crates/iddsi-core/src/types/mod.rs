//! Core type definitions used across the workspace.

pub mod document;
pub mod id;

pub use document::{Document, DocumentWrite, Fields};
pub use id::*;
