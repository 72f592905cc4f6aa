//! # ll-core
//!
//! Core domain models and business logic for Little Lemon.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod menu;
pub mod navigation;
pub mod ports;
pub mod profile;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use menu::MenuItem;
pub use navigation::{Destination, Navigation};
pub use profile::{ProfileRecord, RegistrationForm, UserProfile};
