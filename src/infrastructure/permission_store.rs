//! Permission profiles served to the dashboard
//!
//! Profiles come from a JSON file (`{ "<profile>": { "<key>": { "show": .. } } }`)
//! or from built-in defaults. Loaded maps are cached per profile and the
//! file is re-read once an entry is older than the TTL.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::AdminConfig;
use crate::domain::models::{PermissionEntry, PermissionMap};
use crate::shared::constants::MENU_ITEMS;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_permission_cache_expired, log_permission_store_loaded};

/// Cache TTL: 5 minutes - after that, re-read the permissions file
pub const CACHE_TTL: Duration = Duration::from_secs(300);

/// Global store (initialized once at startup)
static STORE: OnceCell<PermissionStore> = OnceCell::new();

/// Cached permission map with timestamp for TTL
struct CachedProfile {
    permissions: PermissionMap,
    cached_at: Instant,
}

pub struct PermissionStore {
    source: Option<PathBuf>,
    active_profile: String,
    profiles: DashMap<String, CachedProfile>,
}

impl PermissionStore {
    /// Build the store from configuration, loading the file when one is set
    pub fn from_config(config: &AdminConfig) -> Result<Self> {
        let profiles = match &config.permissions_file {
            Some(path) => load_profiles(path)?,
            None => default_profiles(),
        };
        log_permission_store_loaded(config.permissions_file.as_deref(), profiles.len());

        let store = Self::with_profiles(profiles, &config.profile);
        Ok(Self {
            source: config.permissions_file.clone(),
            ..store
        })
    }

    /// In-memory store without a backing file
    pub fn with_profiles(profiles: HashMap<String, PermissionMap>, active_profile: &str) -> Self {
        let now = Instant::now();
        let cache = DashMap::new();
        for (name, permissions) in profiles {
            cache.insert(name, CachedProfile { permissions, cached_at: now });
        }

        Self {
            source: None,
            active_profile: active_profile.to_string(),
            profiles: cache,
        }
    }

    pub fn active_profile(&self) -> &str {
        &self.active_profile
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Permission map of `profile`, refreshing expired entries from disk
    pub fn permissions_for(&self, profile: &str) -> Result<PermissionMap> {
        if let Some(entry) = self.profiles.get(profile) {
            if self.source.is_none() || entry.cached_at.elapsed() < CACHE_TTL {
                return Ok(entry.permissions.clone());
            }
            // Expired, release the read guard before reloading
            drop(entry);
            log_permission_cache_expired(profile);
            self.reload()?;
        }

        self.profiles
            .get(profile)
            .map(|entry| entry.permissions.clone())
            .ok_or_else(|| AppError::UnknownProfile(profile.to_string()))
    }

    /// Permission map of the configured profile
    pub fn active_permissions(&self) -> Result<PermissionMap> {
        self.permissions_for(&self.active_profile)
    }

    /// Re-read the backing file, replacing every cached profile.
    /// Returns the number of profiles now available.
    pub fn reload(&self) -> Result<usize> {
        let Some(path) = &self.source else {
            return Ok(self.profiles.len());
        };

        let profiles = load_profiles(path)?;
        let now = Instant::now();
        // Overwrite in place, then drop stale names: readers never see a gap
        let names: HashSet<String> = profiles.keys().cloned().collect();
        for (name, permissions) in profiles {
            self.profiles.insert(name, CachedProfile { permissions, cached_at: now });
        }
        self.profiles.retain(|name, _| names.contains(name));

        log_permission_store_loaded(Some(path), self.profiles.len());
        Ok(self.profiles.len())
    }
}

/// Initialize the global store. Must be called once at startup;
/// later calls return the existing store.
pub fn init_permission_store(config: &AdminConfig) -> Result<&'static PermissionStore> {
    STORE.get_or_try_init(|| PermissionStore::from_config(config))
}

/// Global store, falling back to environment configuration when
/// [`init_permission_store`] was never called
pub fn permission_store() -> Result<&'static PermissionStore> {
    STORE.get_or_try_init(|| PermissionStore::from_config(&AdminConfig::from_env()?))
}

fn load_profiles(path: &Path) -> Result<HashMap<String, PermissionMap>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::PermissionFile(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let profiles: HashMap<String, PermissionMap> = serde_json::from_str(&content)?;
    Ok(profiles)
}

/// Built-in profiles: `admin` sees and creates everything, `viewer`
/// only sees management screens
pub fn default_profiles() -> HashMap<String, PermissionMap> {
    let keys: Vec<String> = MENU_ITEMS
        .iter()
        .filter(|item| !item.is_landing())
        .map(|item| item.permission_key())
        .collect();

    let admin: PermissionMap = keys
        .iter()
        .map(|key| (key.clone(), PermissionEntry::full()))
        .collect();
    let viewer: PermissionMap = keys
        .iter()
        .map(|key| (key.clone(), PermissionEntry::show_only()))
        .collect();

    HashMap::from([
        ("admin".to_string(), admin),
        ("viewer".to_string(), viewer),
    ])
}
