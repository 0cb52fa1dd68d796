use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};

use crate::error::ProfileResult;
use crate::profile::UserProfile;

/// Key the profile is stored under in the key-value file.
pub const PROFILE_KEY: &str = "userProfile";

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> ProfileResult<Option<UserProfile>>;

    async fn set(&self, profile: &UserProfile) -> ProfileResult<()>;
}

/// Stored profile, or the built-in default when nothing was saved yet.
pub async fn load_or_default(repository: &dyn ProfileRepository) -> ProfileResult<UserProfile> {
    Ok(repository.get().await?.unwrap_or_default())
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self) -> ProfileResult<Option<UserProfile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn set(&self, profile: &UserProfile) -> ProfileResult<()> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}

/// JSON object on disk, one entry per key. Other keys in the file are kept
/// untouched when the profile is written.
pub struct FileProfileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> ProfileResult<Map<String, Value>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Map<String, Value>>(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable profile store");
                Ok(Map::new())
            }
        }
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    async fn get(&self) -> ProfileResult<Option<UserProfile>> {
        let mut map = self.read_map().await?;

        let Some(value) = map.remove(PROFILE_KEY) else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored profile is malformed, using default");
                Ok(None)
            }
        }
    }

    async fn set(&self, profile: &UserProfile) -> ProfileResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut map = self.read_map().await?;
        map.insert(PROFILE_KEY.to_owned(), serde_json::to_value(profile)?);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&map)?).await?;

        tracing::info!(path = %self.path.display(), "Profile saved");

        Ok(())
    }
}
