//! Dashboard statistics and food library filtering.

pub mod filter;
pub mod service;

pub use filter::FoodFilter;
pub use service::{DashboardService, DashboardStats, GroupCount};
