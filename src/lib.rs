//! Little Lemon application core
//!
//! Everything the app does minus the rendering: a menu cache seeded once
//! from the remote document, reactive search/category filtering over it,
//! and the profile-gated onboarding, start-screen, and logout flows. The
//! UI shell embeds [`App`], renders whatever the use cases return, and
//! owns logger installation.

pub mod app;

pub use app::App;

pub use ll_app::{
    AppDeps, ChooseStartScreen, GetProfile, LogoutFlow, MenuView, PendingLogout, SeedError,
    SeedMenu, SeedOutcome, SubmitOnboarding,
};
pub use ll_core::config::AppConfig;
pub use ll_core::menu::{MenuItem, CATEGORIES};
pub use ll_core::navigation::{Destination, Navigation};
pub use ll_core::profile::UserProfile;
