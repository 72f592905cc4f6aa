//! Application data directory resolution
//!
//! The menu database and the profile file live in one per-user data
//! directory. Precedence: explicit config override, then the
//! `LITTLELEMON_DATA_DIR` environment variable, then the platform data
//! directory.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub const DATA_DIR_ENV: &str = "LITTLELEMON_DATA_DIR";
pub const APP_DIR_NAME: &str = "littlelemon";
pub const MENU_DB_FILE: &str = "littlelemon.db";
pub const PROFILE_FILE: &str = "user_data.json";

pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let base = dirs::data_dir().ok_or_else(|| anyhow!("no platform data directory available"))?;
    Ok(base.join(APP_DIR_NAME))
}

pub fn menu_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MENU_DB_FILE)
}

pub fn profile_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PROFILE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/custom"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn files_live_under_the_data_dir() {
        let data_dir = PathBuf::from("/tmp/lemon");
        assert_eq!(menu_db_path(&data_dir), PathBuf::from("/tmp/lemon/littlelemon.db"));
        assert_eq!(profile_path(&data_dir), PathBuf::from("/tmp/lemon/user_data.json"));
    }
}
