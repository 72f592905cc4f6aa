//! Onboarding submission
//!
//! Validates the registration form and writes the three profile fields as
//! one group. Validation failure leaves the store untouched; the shell
//! shows the error inline and the user resubmits.

use std::sync::Arc;

use log::info;
use thiserror::Error;

use ll_core::navigation::{Destination, Navigation};
use ll_core::ports::{ProfileStoreError, ProfileStorePort};
use ll_core::profile::{ProfileValidationError, RegistrationForm};

/// The inline status line shown after a successful submission.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Use case for the onboarding form's register button.
pub struct SubmitOnboarding {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl SubmitOnboarding {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        Self { profile_store }
    }

    /// Validate and persist the profile, then direct the shell to Home
    /// with the back stack cleared so onboarding cannot be returned to.
    pub async fn execute(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Navigation, SubmitError> {
        let profile = RegistrationForm::new(first_name, last_name, email).validate()?;

        self.profile_store.save(&profile).await?;
        info!("Onboarding complete for {}", profile.email);

        Ok(Navigation::replacing_history(Destination::Home))
    }
}
