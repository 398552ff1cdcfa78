//! # Favorites & Aliases
//!
//! Per-user annotations on catalog entries.
//!
//! ## Overview
//!
//! The store keeps a set of favorited `(category id, item key)` pairs and a
//! map of alias name to command string. The browsers read it on every frame,
//! mutate it in memory, and ask for it to be saved after each change. Saving
//! is fire-and-forget: a failed write leaves the change in memory only.
//!
//! ## Storage
//!
//! One JSON file per user identity, in the platform data directory:
//! - Linux: `~/.local/share/dotwiz/favorites/<user>.json`
//! - macOS: `~/Library/Application Support/dotwiz/favorites/<user>.json`
//! - Windows: `%APPDATA%\dotwiz\favorites\<user>.json`
//!
//! ```json
//! {
//!   "user": "default",
//!   "favorites": [{ "category": "tmux", "key": "prefix + c" }],
//!   "aliases": { "tn": "tmux new -s" },
//!   "updated_at": "2026-02-05T10:30:00Z"
//! }
//! ```

mod storage;

pub use storage::{FavoriteKey, FavoriteStore};
