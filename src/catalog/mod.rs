//! # Catalog Module
//!
//! Read-only reference data shown by the dual-pane browsers.
//!
//! ## Overview
//!
//! A catalog is an ordered list of [`Category`] values, each holding an
//! ordered list of [`Item`] entries. Two catalogs exist:
//!
//! - **Hotkeys** - key bindings per tool. The bindings depend on the
//!   navigation style chosen in the wizard ([`NavStyle`]).
//! - **Packages** - installable packages grouped by purpose.
//!
//! The browsers never mutate catalog data. Per-entry annotations (favorites,
//! aliases) live in [`crate::favorites`], keyed by `(category id, item key)`.
//!
//! ## Sources
//!
//! The built-in tables come first, followed by any user catalog files found
//! under `<config_dir>/catalog/` (see [`loader`]).

mod builtin;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keybinding style selected in the wizard. Used as a hint when building the
/// hotkeys catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavStyle {
    #[default]
    Vim,
    Emacs,
    Arrows,
}

impl NavStyle {
    pub const ALL: [NavStyle; 3] = [NavStyle::Vim, NavStyle::Emacs, NavStyle::Arrows];

    pub fn label(self) -> &'static str {
        match self {
            NavStyle::Vim => "Vim (hjkl, modal editing)",
            NavStyle::Emacs => "Emacs (Ctrl/Alt chords)",
            NavStyle::Arrows => "Standard (arrow keys)",
        }
    }

    /// Short identifier passed to the setup script.
    pub fn id(self) -> &'static str {
        match self {
            NavStyle::Vim => "vim",
            NavStyle::Emacs => "emacs",
            NavStyle::Arrows => "arrows",
        }
    }
}

/// Which catalog a browser is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Hotkeys,
    Packages,
}

/// A single catalog entry (a key binding or a package).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub description: String,
}

impl Item {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against key and description.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.key.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The catalog collaborator.
pub trait Catalog {
    fn categories(&self, style: NavStyle) -> Vec<Category>;
}

/// Built-in tables plus user catalog files.
#[derive(Debug, Clone)]
pub struct DefaultCatalog {
    kind: CatalogKind,
    user_dir: Option<PathBuf>,
}

impl DefaultCatalog {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            user_dir: loader::user_catalog_dir(),
        }
    }

    /// Use a specific directory for user catalog files (or none at all).
    pub fn with_user_dir(kind: CatalogKind, user_dir: Option<PathBuf>) -> Self {
        Self { kind, user_dir }
    }
}

impl Catalog for DefaultCatalog {
    fn categories(&self, style: NavStyle) -> Vec<Category> {
        let mut categories = match self.kind {
            CatalogKind::Hotkeys => builtin::hotkeys(style),
            CatalogKind::Packages => builtin::packages(),
        };
        if let Some(dir) = &self.user_dir {
            categories.extend(loader::load_user_categories(dir, self.kind, style));
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_matches_is_case_insensitive() {
        let item = Item::new("prefix + c", "Create a new Window");
        assert!(item.matches("window"));
        assert!(item.matches("PREFIX"));
        assert!(item.matches(""));
        assert!(!item.matches("pane"));
    }

    #[test]
    fn test_hotkeys_depend_on_style() {
        let catalog = DefaultCatalog::with_user_dir(CatalogKind::Hotkeys, None);
        let vim = catalog.categories(NavStyle::Vim);
        let emacs = catalog.categories(NavStyle::Emacs);
        assert!(!vim.is_empty());
        assert_eq!(vim.len(), emacs.len());
        assert_ne!(vim, emacs);
    }

    #[test]
    fn test_packages_ignore_style() {
        let catalog = DefaultCatalog::with_user_dir(CatalogKind::Packages, None);
        assert_eq!(
            catalog.categories(NavStyle::Vim),
            catalog.categories(NavStyle::Arrows)
        );
    }

    #[test]
    fn test_category_ids_are_unique() {
        for kind in [CatalogKind::Hotkeys, CatalogKind::Packages] {
            let catalog = DefaultCatalog::with_user_dir(kind, None);
            let categories = catalog.categories(NavStyle::Vim);
            let mut ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate category ids in {:?}", kind);
        }
    }

    #[test]
    fn test_nav_style_deserializes_lowercase() {
        let style: NavStyle = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(style, NavStyle::Emacs);
    }
}
