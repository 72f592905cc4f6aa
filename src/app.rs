//! Application assembly
//!
//! Builds the adapters from an [`AppConfig`], wires them into [`AppDeps`],
//! and hands out one use case per user-visible operation. `start` spawns
//! the one-shot background seeding task; the shell never awaits it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::info;
use tokio::task::JoinHandle;

use ll_app::{
    AppDeps, ChooseStartScreen, GetProfile, LogoutFlow, MenuView, SeedMenu, SubmitOnboarding,
};
use ll_core::config::AppConfig;
use ll_infra::app_dirs::{menu_db_path, profile_path, resolve_data_dir};
use ll_infra::db::pool::init_db_pool;
use ll_infra::{DieselMenuRepository, FileProfileRepository, HttpMenuSource};

pub struct App {
    deps: AppDeps,
    seed_started: AtomicBool,
}

impl App {
    /// Build the whole stack: data directory, database pool with
    /// migrations, and the three adapters.
    pub fn init(config: AppConfig) -> Result<Self> {
        let data_dir = resolve_data_dir(config.data_dir.as_deref())?;
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("create data dir failed: {}", data_dir.display()))?;
        info!("Using data directory {}", data_dir.display());

        let db_path = menu_db_path(&data_dir);
        let db_url = db_path
            .to_str()
            .ok_or_else(|| anyhow!("non-UTF-8 database path: {}", db_path.display()))?;
        let pool = init_db_pool(db_url)?;

        let menu_repo = Arc::new(DieselMenuRepository::new(pool)?);
        let menu_source = Arc::new(HttpMenuSource::new(
            config.menu_endpoint.clone(),
            config.fetch_timeout_secs.map(Duration::from_secs),
        )?);
        let profile_store = Arc::new(FileProfileRepository::new(profile_path(&data_dir)));

        Ok(Self::new(AppDeps {
            menu_repo,
            menu_source,
            profile_store,
        }))
    }

    /// Assemble from already-built ports. Tests use this with in-memory
    /// or mock adapters.
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            seed_started: AtomicBool::new(false),
        }
    }

    /// Spawn the background seeding task.
    ///
    /// Runs at most once per `App`; later calls return `None`. All
    /// seeding failures are logged and swallowed inside the task, so the
    /// handle is only useful to tests that want to await completion.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self.seed_started.swap(true, Ordering::SeqCst) {
            return None;
        }

        let seed = Arc::new(SeedMenu::new(
            self.deps.menu_repo.clone(),
            self.deps.menu_source.clone(),
        ));
        Some(seed.spawn())
    }

    pub fn menu_view(&self) -> MenuView {
        MenuView::new(self.deps.menu_repo.clone())
    }

    pub fn choose_start_screen(&self) -> ChooseStartScreen {
        ChooseStartScreen::new(self.deps.profile_store.clone())
    }

    pub fn submit_onboarding(&self) -> SubmitOnboarding {
        SubmitOnboarding::new(self.deps.profile_store.clone())
    }

    pub fn get_profile(&self) -> GetProfile {
        GetProfile::new(self.deps.profile_store.clone())
    }

    pub fn logout(&self) -> LogoutFlow {
        LogoutFlow::new(self.deps.profile_store.clone())
    }
}
