//! File-based profile repository
//!
//! The `UserData` namespace is one JSON file with the original preference
//! keys (`FirstName`, `LastName`, `EmailAddress`). Saves go through a
//! temp-file-and-rename so the file always holds either the previous
//! group or the complete new one; logout removes the file entirely.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use ll_core::ports::{ProfileStoreError, ProfileStorePort};
use ll_core::profile::{ProfileRecord, UserProfile};

pub struct FileProfileRepository {
    path: PathBuf,
}

impl FileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create profile dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp profile failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp profile to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

fn storage_error<E: std::fmt::Display>(e: E) -> ProfileStoreError {
    ProfileStoreError::Storage(e.to_string())
}

#[async_trait]
impl ProfileStorePort for FileProfileRepository {
    async fn load(&self) -> Result<ProfileRecord, ProfileStoreError> {
        if !self.path.exists() {
            return Ok(ProfileRecord::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(storage_error)?;

        if content.trim().is_empty() {
            return Ok(ProfileRecord::default());
        }

        serde_json::from_str(&content).map_err(storage_error)
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        let record = ProfileRecord::from(profile);
        let json = serde_json::to_string_pretty(&record).map_err(storage_error)?;

        self.atomic_write(&json).await.map_err(storage_error)
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path).await.map_err(storage_error)?;
        }
        Ok(())
    }
}
