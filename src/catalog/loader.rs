//! # User Catalog Files
//!
//! Extra catalog categories can be dropped into the config directory:
//!
//! ```text
//! ~/.config/dotwiz/catalog/
//! ├── my-hotkeys.json
//! └── work/packages.json
//! ```
//!
//! Each file looks like:
//!
//! ```json
//! {
//!   "kind": "hotkeys",
//!   "style": "vim",
//!   "categories": [
//!     { "id": "k9s", "name": "k9s", "icon": "☸", "items": [
//!       { "key": ":pods", "description": "List pods" }
//!     ]}
//!   ]
//! }
//! ```
//!
//! Files that cannot be read or parsed are skipped with a warning; the
//! browsers simply show the built-in categories.

use super::{CatalogKind, Category, NavStyle};
use crate::error::CatalogError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Maximum depth searched below the catalog directory.
const MAX_DEPTH: usize = 2;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    kind: CatalogKind,
    #[serde(default)]
    style: Option<NavStyle>,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Default location of user catalog files.
pub fn user_catalog_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dotwiz").map(|d| d.config_dir().join("catalog"))
}

/// Load every matching category from the user catalog directory.
pub fn load_user_categories(dir: &Path, kind: CatalogKind, style: NavStyle) -> Vec<Category> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(MAX_DEPTH)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut categories = Vec::new();
    for path in files {
        match parse_catalog_file(&path) {
            Ok(file) => {
                if file.kind != kind {
                    continue;
                }
                if file.style.is_some_and(|s| s != style) {
                    continue;
                }
                debug!(
                    path = %path.display(),
                    count = file.categories.len(),
                    "loaded user catalog"
                );
                categories.extend(file.categories);
            }
            Err(e) => warn!("skipping user catalog: {}", e),
        }
    }
    categories
}

fn parse_catalog_file(path: &Path) -> Result<CatalogFile, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const K9S_VIM: &str = r#"{
        "kind": "hotkeys",
        "style": "vim",
        "categories": [
            {"id": "k9s", "name": "k9s", "items": [{"key": ":pods", "description": "List pods"}]}
        ]
    }"#;

    #[test]
    fn test_missing_dir_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nope");
        let found = load_user_categories(&dir, CatalogKind::Hotkeys, NavStyle::Vim);
        assert!(found.is_empty());
    }

    #[test]
    fn test_loads_matching_kind_and_style() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("k9s.json"), K9S_VIM).unwrap();

        let vim = load_user_categories(temp_dir.path(), CatalogKind::Hotkeys, NavStyle::Vim);
        assert_eq!(vim.len(), 1);
        assert_eq!(vim[0].id, "k9s");
        assert_eq!(vim[0].items[0].key, ":pods");

        let emacs = load_user_categories(temp_dir.path(), CatalogKind::Hotkeys, NavStyle::Emacs);
        assert!(emacs.is_empty());

        let packages = load_user_categories(temp_dir.path(), CatalogKind::Packages, NavStyle::Vim);
        assert!(packages.is_empty());
    }

    #[test]
    fn test_style_less_file_matches_every_style() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("work");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            nested.join("packages.json"),
            r#"{"kind": "packages", "categories": [{"id": "k8s", "name": "Kubernetes"}]}"#,
        )
        .unwrap();

        for style in NavStyle::ALL {
            let found = load_user_categories(temp_dir.path(), CatalogKind::Packages, style);
            assert_eq!(found.len(), 1);
            assert!(found[0].items.is_empty());
        }
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(temp_dir.path().join("k9s.json"), K9S_VIM).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let found = load_user_categories(temp_dir.path(), CatalogKind::Hotkeys, NavStyle::Vim);
        assert_eq!(found.len(), 1);
    }
}
