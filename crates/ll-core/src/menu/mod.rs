//! Menu domain models
//!
//! The menu is a flat list of items cached locally after a one-time fetch
//! from the remote source. Items are identified by the id the source
//! assigned to them.

mod filter;

pub use filter::{toggle_category, visible_items};

use serde::{Deserialize, Serialize};

/// The category chips offered on the home screen.
pub const CATEGORIES: &[&str] = &["Starters", "Mains", "Desserts", "Drinks"];

/// A single menu entry as stored in the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identity assigned by the remote source.
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Kept as text so the displayed price matches the source exactly.
    pub price: String,
    /// Image URL; empty when the source omitted one.
    pub image: String,
    pub category: String,
}

#[cfg(test)]
pub(crate) fn sample_item(id: i32, title: &str, category: &str) -> MenuItem {
    MenuItem {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        price: "10".to_string(),
        image: String::new(),
        category: category.to_string(),
    }
}
