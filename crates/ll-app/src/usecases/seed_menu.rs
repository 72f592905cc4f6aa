//! One-time menu cache seeding
//!
//! Runs once per application start, off the foreground flow. The store's
//! emptiness is the only guard: a non-empty cache short-circuits before
//! any network traffic, and a failed attempt leaves the cache empty so the
//! next launch retries from scratch. No backoff, no retry limit; the retry
//! granularity is one attempt per launch.

use std::sync::Arc;

use log::{info, warn};
use thiserror::Error;
use tokio::task::JoinHandle;

use ll_core::ports::{
    MenuRepositoryError, MenuRepositoryPort, MenuSourceError, MenuSourcePort,
};

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already had records; no network call was made.
    AlreadySeeded,
    /// The store was empty and now holds this many records.
    Seeded(usize),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Source(#[from] MenuSourceError),

    #[error(transparent)]
    Repository(#[from] MenuRepositoryError),
}

/// Use case for populating the local menu cache from the remote source.
pub struct SeedMenu {
    menu_repo: Arc<dyn MenuRepositoryPort>,
    menu_source: Arc<dyn MenuSourcePort>,
}

impl SeedMenu {
    pub fn new(
        menu_repo: Arc<dyn MenuRepositoryPort>,
        menu_source: Arc<dyn MenuSourcePort>,
    ) -> Self {
        Self {
            menu_repo,
            menu_source,
        }
    }

    /// Seed the cache if it is empty.
    ///
    /// The insert is one transaction: on any failure the store keeps the
    /// record count it had before the call.
    pub async fn execute(&self) -> Result<SeedOutcome, SeedError> {
        if !self.menu_repo.is_empty().await? {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let batch = self.menu_source.fetch_menu().await?;
        let count = batch.len();
        self.menu_repo.insert_all(batch).await?;

        Ok(SeedOutcome::Seeded(count))
    }

    /// Fire-and-forget entry used at startup.
    ///
    /// This is the error boundary of the whole seeding flow: every failure
    /// is logged and swallowed so the application keeps running with an
    /// empty menu. The caller must not await the handle on the foreground
    /// flow.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            match self.execute().await {
                Ok(SeedOutcome::AlreadySeeded) => {
                    info!("Menu cache already seeded, skipping fetch");
                }
                Ok(SeedOutcome::Seeded(count)) => {
                    info!("Menu cache seeded with {} items", count);
                }
                Err(e) => {
                    warn!("Menu seeding failed, will retry next launch: {}", e);
                }
            }
        })
    }
}
