//! Menu record store port
//!
//! The local persistent table of menu items. The seed synchronizer is the
//! only writer; any number of display consumers observe it reactively.

use async_trait::async_trait;
use tokio::sync::watch;

use super::errors::MenuRepositoryError;
use crate::menu::MenuItem;

#[async_trait]
pub trait MenuRepositoryPort: Send + Sync {
    /// True iff zero records exist.
    async fn is_empty(&self) -> Result<bool, MenuRepositoryError>;

    /// Write the batch as one atomic unit. Concurrent readers never see a
    /// partial batch; on failure nothing is persisted.
    async fn insert_all(&self, items: Vec<MenuItem>) -> Result<(), MenuRepositoryError>;

    /// The full record set in stable id order.
    async fn all(&self) -> Result<Vec<MenuItem>, MenuRepositoryError>;

    /// Live view of the record set. Every committed write re-publishes the
    /// full current list exactly once to all receivers; a fresh receiver
    /// starts with the current snapshot. Dropping the receiver
    /// unsubscribes.
    fn observe(&self) -> watch::Receiver<Vec<MenuItem>>;

    /// Remove every record, returning how many were deleted.
    async fn clear(&self) -> Result<usize, MenuRepositoryError>;
}
