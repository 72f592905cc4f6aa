//! Start screen decision
//!
//! Evaluated once at application start, before any screen is rendered.

use std::sync::Arc;

use log::warn;

use ll_core::navigation::{start_destination, Destination};
use ll_core::ports::ProfileStorePort;

/// Use case for picking the first screen to render.
pub struct ChooseStartScreen {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl ChooseStartScreen {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        Self { profile_store }
    }

    /// `Home` once all three profile keys exist, `Onboarding` otherwise.
    ///
    /// A store read failure is treated as an absent profile: the user
    /// lands on onboarding instead of a broken home screen.
    pub async fn execute(&self) -> Destination {
        match self.profile_store.load().await {
            Ok(record) => start_destination(&record),
            Err(e) => {
                warn!("Profile read failed, starting at onboarding: {}", e);
                Destination::Onboarding
            }
        }
    }
}
