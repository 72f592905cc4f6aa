//! Profile store port
//!
//! Key/value persistence of the onboarding-entered identity fields.
//! Writes happen only as a whole group: the complete profile on
//! registration, or a full clear on logout.

use async_trait::async_trait;

use super::errors::ProfileStoreError;
use crate::profile::{ProfileRecord, UserProfile};

#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Current presence view. An absent store reads as an all-`None`
    /// record, not an error.
    async fn load(&self) -> Result<ProfileRecord, ProfileStoreError>;

    /// Write all three fields as one group.
    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError>;

    /// Remove the whole group. Clearing an absent store is a no-op.
    async fn clear(&self) -> Result<(), ProfileStoreError>;
}
