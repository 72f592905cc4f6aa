//! Profile screen read path
//!
//! Absent fields display as empty strings, never as an error.

use std::sync::Arc;

use ll_core::ports::{ProfileStoreError, ProfileStorePort};
use ll_core::profile::UserProfile;

pub struct GetProfile {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl GetProfile {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        Self { profile_store }
    }

    pub async fn execute(&self) -> Result<UserProfile, ProfileStoreError> {
        let record = self.profile_store.load().await?;
        Ok(record.to_profile())
    }
}
