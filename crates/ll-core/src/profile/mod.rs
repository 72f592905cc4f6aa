//! User profile domain models
//!
//! The profile is three identity fields entered during onboarding. The
//! store keeps them under the `UserData` namespace with the original
//! preference keys; whether onboarding has happened is decided by key
//! presence, not by the values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presence view of the stored profile.
///
/// Each field is `None` when the corresponding key is absent from the
/// store. The serde names are the on-disk keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(rename = "FirstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "EmailAddress", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileRecord {
    /// Onboarding counts as complete when all three keys exist, whatever
    /// their values are.
    pub fn is_complete(&self) -> bool {
        self.first_name.is_some() && self.last_name.is_some() && self.email.is_some()
    }

    /// Display form: absent fields become empty strings, never errors.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
        }
    }
}

impl From<&UserProfile> for ProfileRecord {
    fn from(profile: &UserProfile) -> Self {
        Self {
            first_name: Some(profile.first_name.clone()),
            last_name: Some(profile.last_name.clone()),
            email: Some(profile.email.clone()),
        }
    }
}

/// A complete profile, written as one group on successful onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Raw onboarding form input, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegistrationForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Check that no field is blank (empty or whitespace-only).
    ///
    /// Values are stored exactly as entered; validation only rejects, it
    /// never rewrites.
    pub fn validate(self) -> Result<UserProfile, ProfileValidationError> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err(ProfileValidationError::Incomplete);
        }

        Ok(UserProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        })
    }
}

/// Why an onboarding submission was rejected.
///
/// The display text is the inline status line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("Registration unsuccessful. Please enter all data.")]
    Incomplete,
}
