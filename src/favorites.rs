//! Saved colors.
//!
//! The favorites list lives behind a small store trait with a JSON file
//! implementation under the user config directory, so the operations stay
//! testable against any backing store.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;

/// A named saved color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub color: Color,
}

/// Backing storage for the favorites list.
pub trait FavoriteStore {
    fn load(&self) -> Result<Vec<Favorite>>;
    fn save(&self, favorites: &[Favorite]) -> Result<()>;
}

/// Favorites persisted as pretty-printed JSON in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default store location: `$XDG_CONFIG_HOME/tinct/favorites.json`,
    /// with `~/.config` as the fallback config home.
    pub fn default_location() -> Self {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
                PathBuf::from(home).join(".config")
            });
        Self::new(config_home.join("tinct").join("favorites.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoriteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Favorite>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read favorites from {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("favorites file {} is not valid JSON", self.path.display()))
    }

    fn save(&self, favorites: &[Favorite]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(favorites)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write favorites to {}", self.path.display()))?;
        debug!(
            "saved {} favorite(s) to {}",
            favorites.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// The favorites operations, over any store.
pub struct Favorites<S> {
    store: S,
}

impl<S: FavoriteStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Save a color under a name. Names are unique; re-adding is an error.
    pub fn add(&self, name: &str, color: Color) -> Result<()> {
        let mut favorites = self.store.load()?;
        if favorites.iter().any(|f| f.name == name) {
            bail!("a favorite named {name:?} already exists");
        }
        favorites.push(Favorite {
            name: name.to_string(),
            color,
        });
        self.store.save(&favorites)
    }

    /// Remove a favorite by name, returning it.
    pub fn remove(&self, name: &str) -> Result<Favorite> {
        let mut favorites = self.store.load()?;
        let Some(index) = favorites.iter().position(|f| f.name == name) else {
            bail!("no favorite named {name:?}");
        };
        let removed = favorites.remove(index);
        self.store.save(&favorites)?;
        Ok(removed)
    }

    /// All favorites, in the order they were added.
    pub fn list(&self) -> Result<Vec<Favorite>> {
        self.store.load()
    }

    /// Drop every favorite.
    pub fn clear(&self) -> Result<()> {
        self.store.save(&[])
    }
}
