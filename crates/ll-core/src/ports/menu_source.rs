//! Remote menu source port
//!
//! Fetch contract for the HTTP endpoint serving the menu document. One
//! call is one GET; the adapter normalizes wire entries into `MenuItem`s.

use async_trait::async_trait;

use super::errors::MenuSourceError;
use crate::menu::MenuItem;

#[async_trait]
pub trait MenuSourcePort: Send + Sync {
    /// Fetch and decode the full menu list from the remote endpoint.
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuSourceError>;
}
