//! Catalog (food and drink) entities.

pub mod category;
pub mod draft;
pub mod level;
pub mod model;

pub use category::FoodCategory;
pub use draft::FoodDraft;
pub use level::IddsiLevel;
pub use model::{CatalogEntry, Comment};
