//! Home screen menu view
//!
//! Holds the reactive composition the shell renders: the latest store
//! snapshot (via the repository's watch channel) narrowed by the current
//! search phrase and category selection. Criteria start out empty.

use std::sync::Arc;

use tokio::sync::watch;

use ll_core::menu::{self, MenuItem};
use ll_core::ports::MenuRepositoryPort;

pub struct MenuView {
    receiver: watch::Receiver<Vec<MenuItem>>,
    search_phrase: String,
    category: String,
}

impl MenuView {
    pub fn new(menu_repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self {
            receiver: menu_repo.observe(),
            search_phrase: String::new(),
            category: String::new(),
        }
    }

    pub fn set_search_phrase(&mut self, phrase: impl Into<String>) {
        self.search_phrase = phrase.into();
    }

    pub fn search_phrase(&self) -> &str {
        &self.search_phrase
    }

    /// Apply the category chip rule: picking the active category again
    /// clears the selection.
    pub fn toggle_category(&mut self, selection: &str) {
        self.category = menu::toggle_category(&self.category, selection);
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The subset to display, recomputed synchronously from the latest
    /// store snapshot and the current criteria.
    pub fn visible(&self) -> Vec<MenuItem> {
        menu::visible_items(&self.receiver.borrow(), &self.category, &self.search_phrase)
    }

    /// Await the next store emission. Returns an error once the store side
    /// of the channel is gone.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.receiver.changed().await
    }
}
