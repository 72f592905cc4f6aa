//! # ll-app
//!
//! Use cases and application orchestration for Little Lemon.
//!
//! Every use case is a small struct over `Arc<dyn Port>` dependencies; the
//! assembly layer groups the ports in [`AppDeps`] and hands them out.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::browse_menu::MenuView;
pub use usecases::get_profile::GetProfile;
pub use usecases::logout::{LogoutFlow, PendingLogout};
pub use usecases::seed_menu::{SeedError, SeedMenu, SeedOutcome};
pub use usecases::start_screen::ChooseStartScreen;
pub use usecases::submit_onboarding::{SubmitError, SubmitOnboarding};
