//! Use cases
//!
//! One module per user-visible operation. Each use case owns the ports it
//! needs as `Arc<dyn Port>` and exposes a single `execute` entry point.

pub mod browse_menu;
pub mod get_profile;
pub mod logout;
pub mod seed_menu;
pub mod start_screen;
pub mod submit_onboarding;

#[cfg(test)]
pub(crate) mod support;
