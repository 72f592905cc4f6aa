//! Two-step logout
//!
//! Logout asks for confirmation before touching anything. The typestate
//! makes the order unrepresentable to get wrong: only a `PendingLogout`
//! can clear the store, and dropping or cancelling it leaves all state
//! untouched.

use std::sync::Arc;

use log::info;

use ll_core::navigation::{Destination, Navigation};
use ll_core::ports::{ProfileStoreError, ProfileStorePort};

/// Entry point for the logout button.
pub struct LogoutFlow {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl LogoutFlow {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        Self { profile_store }
    }

    /// Step one: the user asked to log out. Nothing is touched yet; the
    /// shell shows the confirmation dialog.
    pub fn request(&self) -> PendingLogout {
        PendingLogout {
            profile_store: self.profile_store.clone(),
        }
    }
}

/// A logout awaiting the user's explicit confirmation.
pub struct PendingLogout {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl PendingLogout {
    /// The user backed out; all state stays as it was.
    pub fn cancel(self) {}

    /// The user confirmed: clear the whole profile group and direct the
    /// shell to onboarding with the back stack cleared.
    pub async fn confirm(self) -> Result<Navigation, ProfileStoreError> {
        self.profile_store.clear().await?;
        info!("Profile cleared on logout");

        Ok(Navigation::replacing_history(Destination::Onboarding))
    }
}
