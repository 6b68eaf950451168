//! # iddsi-entity
//!
//! Domain entity models for the IDDSI dashboard. Every struct in this crate
//! maps to a document in one of the store collections (`foods`, `users`,
//! `notifications`, `reported_issues`) or is a domain value object.

pub mod food;
pub mod issue;
pub mod notification;
pub mod recipient;
