//! In-memory port implementations shared by the use-case tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use ll_core::menu::MenuItem;
use ll_core::ports::{
    MenuRepositoryError, MenuRepositoryPort, MenuSourceError, MenuSourcePort, ProfileStoreError,
    ProfileStorePort,
};
use ll_core::profile::{ProfileRecord, UserProfile};

pub fn item(id: i32, title: &str, category: &str) -> MenuItem {
    MenuItem {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        price: "10.00".to_string(),
        image: String::new(),
        category: category.to_string(),
    }
}

/// Menu repository backed by a `Mutex<Vec<_>>` plus the same watch channel
/// the real adapter uses.
pub struct MemoryMenuRepository {
    items: Mutex<Vec<MenuItem>>,
    sender: watch::Sender<Vec<MenuItem>>,
    pub fail_insert: bool,
}

impl MemoryMenuRepository {
    pub fn new(initial: Vec<MenuItem>) -> Self {
        let (sender, _) = watch::channel(initial.clone());
        Self {
            items: Mutex::new(initial),
            sender,
            fail_insert: false,
        }
    }

    pub fn failing_insert() -> Self {
        let mut repo = Self::new(Vec::new());
        repo.fail_insert = true;
        repo
    }

    pub fn snapshot(&self) -> Vec<MenuItem> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl MenuRepositoryPort for MemoryMenuRepository {
    async fn is_empty(&self) -> Result<bool, MenuRepositoryError> {
        Ok(self.items.lock().unwrap().is_empty())
    }

    async fn insert_all(&self, batch: Vec<MenuItem>) -> Result<(), MenuRepositoryError> {
        if self.fail_insert {
            return Err(MenuRepositoryError::Storage("disk full".to_string()));
        }
        let snapshot = {
            let mut items = self.items.lock().unwrap();
            items.extend(batch);
            items.clone()
        };
        let _ = self.sender.send(snapshot);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        Ok(self.snapshot())
    }

    fn observe(&self) -> watch::Receiver<Vec<MenuItem>> {
        self.sender.subscribe()
    }

    async fn clear(&self) -> Result<usize, MenuRepositoryError> {
        let (removed, snapshot) = {
            let mut items = self.items.lock().unwrap();
            let removed = items.len();
            items.clear();
            (removed, items.clone())
        };
        let _ = self.sender.send(snapshot);
        Ok(removed)
    }
}

/// Menu source returning a canned response and counting calls.
pub struct StubMenuSource {
    response: Result<Vec<MenuItem>, MenuSourceError>,
    calls: AtomicUsize,
}

impl StubMenuSource {
    pub fn serving(menu: Vec<MenuItem>) -> Self {
        Self {
            response: Ok(menu),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: MenuSourceError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSourcePort for StubMenuSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(menu) => Ok(menu.clone()),
            Err(MenuSourceError::Network(message)) => {
                Err(MenuSourceError::Network(message.clone()))
            }
            Err(MenuSourceError::Decode(message)) => Err(MenuSourceError::Decode(message.clone())),
        }
    }
}

/// Profile store backed by a `Mutex<ProfileRecord>`.
pub struct MemoryProfileStore {
    record: Mutex<ProfileRecord>,
    pub fail_save: bool,
}

impl MemoryProfileStore {
    pub fn empty() -> Self {
        Self {
            record: Mutex::new(ProfileRecord::default()),
            fail_save: false,
        }
    }

    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: Mutex::new(record),
            fail_save: false,
        }
    }

    pub fn record(&self) -> ProfileRecord {
        self.record.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileStorePort for MemoryProfileStore {
    async fn load(&self) -> Result<ProfileRecord, ProfileStoreError> {
        Ok(self.record())
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        if self.fail_save {
            return Err(ProfileStoreError::Storage("disk full".to_string()));
        }
        *self.record.lock().unwrap() = ProfileRecord::from(profile);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        *self.record.lock().unwrap() = ProfileRecord::default();
        Ok(())
    }
}
