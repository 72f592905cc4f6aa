//! Application dependency grouping
//!
//! Not a builder: no build steps, no defaults, no hidden logic. Just the
//! struct the assembly layer fills in with one adapter per port.

use std::sync::Arc;

use ll_core::ports::{MenuRepositoryPort, MenuSourcePort, ProfileStorePort};

/// Every port the use cases need, grouped for App construction.
///
/// All fields are required; the constructor signature of the assembly
/// layer is the dependency manifest.
pub struct AppDeps {
    /// Local persistent menu cache.
    pub menu_repo: Arc<dyn MenuRepositoryPort>,

    /// Remote endpoint serving the menu document.
    pub menu_source: Arc<dyn MenuSourcePort>,

    /// Key/value persistence of the onboarding profile.
    pub profile_store: Arc<dyn ProfileStorePort>,
}
