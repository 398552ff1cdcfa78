use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Identifies a favorited catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FavoriteKey {
    pub category: String,
    pub key: String,
}

impl FavoriteKey {
    pub fn new(category: &str, key: &str) -> Self {
        Self {
            category: category.to_string(),
            key: key.to_string(),
        }
    }
}

/// The persisted shape of a user's store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    pub user: String,
    #[serde(default)]
    pub favorites: BTreeSet<FavoriteKey>,
    /// Map of alias name -> command
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

impl StoreData {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            favorites: BTreeSet::new(),
            aliases: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }
}

/// In-memory cache of a user's favorites and aliases, optionally backed by
/// a JSON file.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    data: StoreData,
    path: Option<PathBuf>,
}

impl FavoriteStore {
    /// Load the store for `user` from the platform data directory.
    ///
    /// Never fails: a missing data directory yields an in-memory store, and a
    /// missing or corrupt file yields an empty one.
    pub fn load(user: &str) -> Self {
        match get_storage_dir() {
            Some(dir) => Self::load_from(&get_store_file_path(&dir, user), user),
            None => {
                warn!("could not determine data directory, favorites will not persist");
                Self::in_memory(user)
            }
        }
    }

    /// Load the store from a specific file.
    pub fn load_from(path: &Path, user: &str) -> Self {
        let data = if path.exists() {
            load_store(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), "ignoring unreadable favorites file: {}", e);
                StoreData::new(user)
            })
        } else {
            StoreData::new(user)
        };

        Self {
            data,
            path: Some(path.to_path_buf()),
        }
    }

    /// A store that is never written to disk.
    pub fn in_memory(user: &str) -> Self {
        Self {
            data: StoreData::new(user),
            path: None,
        }
    }

    pub fn user(&self) -> &str {
        &self.data.user
    }

    pub fn is_favorite(&self, category: &str, key: &str) -> bool {
        self.data
            .favorites
            .contains(&FavoriteKey::new(category, key))
    }

    /// Flip favorite membership. Returns whether the entry is now a favorite.
    pub fn toggle_favorite(&mut self, category: &str, key: &str) -> bool {
        let fav = FavoriteKey::new(category, key);
        let now_favorite = if self.data.favorites.remove(&fav) {
            false
        } else {
            self.data.favorites.insert(fav);
            true
        };
        self.touch();
        now_favorite
    }

    pub fn favorite_count(&self) -> usize {
        self.data.favorites.len()
    }

    /// Insert or replace an alias.
    pub fn set_alias(&mut self, name: &str, command: &str) {
        self.data
            .aliases
            .insert(name.to_string(), command.to_string());
        self.touch();
    }

    /// Remove every alias whose command equals `command`. Returns how many
    /// were removed.
    pub fn remove_aliases_for(&mut self, command: &str) -> usize {
        let before = self.data.aliases.len();
        self.data.aliases.retain(|_, c| c != command);
        let removed = before - self.data.aliases.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Aliases pointing at `command`, sorted by name.
    pub fn aliases_for(&self, command: &str) -> Vec<(&str, &str)> {
        self.data
            .aliases
            .iter()
            .filter(|(_, c)| c.as_str() == command)
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect()
    }

    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.data.aliases
    }

    /// Write the store to its backing file.
    pub fn save(&self) -> Result<(), StoreError> {
        let path = self.path.as_ref().ok_or(StoreError::NoBackingFile)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn touch(&mut self) {
        self.data.updated_at = Utc::now();
    }
}

/// Get the XDG-compliant storage directory for favorites
fn get_storage_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dotwiz").map(|d| d.data_dir().join("favorites"))
}

/// File name for a user identity. Anything outside `[A-Za-z0-9_-]` becomes `_`.
fn get_store_file_path(storage_dir: &Path, user: &str) -> PathBuf {
    let safe: String = user
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let name = if safe.is_empty() { "default" } else { &safe };
    storage_dir.join(format!("{}.json", name))
}

fn load_store(path: &Path) -> Result<StoreData, StoreError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
