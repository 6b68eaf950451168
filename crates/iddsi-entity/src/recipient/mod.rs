//! App user (notification recipient) entities.

pub mod model;

pub use model::Recipient;
