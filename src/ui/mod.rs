//! # UI Module
//!
//! The wizard's model, routing and drawing.
//!
//! ## Components
//!
//! - [`App`] - the root model and its single dispatcher
//! - [`screen`] - the [`Screen`] enum and its `(handler, renderer)` table
//! - [`browser`] - dual-pane category/item browser with filters and favorites
//! - [`editor`] - char-indexed text fields for the inline alias editor
//! - [`layout`] / [`scroll`] - pane geometry and cursor/scroll math
//! - [`event`] - [`Msg`]/[`Effect`] and the input and tick producers
//! - [`mod@render`] - shared drawing helpers; per-screen code in `screens`
//!
//! ## Browser layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                       │
//! ├─────────────────────┬───────────────────────────┤
//! │                     │                           │
//! │   Categories        │      Items                │
//! │                     │   (filtered, ★ favorites) │
//! │                     ├───────────────────────────┤
//! │                     │      Details / aliases    │
//! ├─────────────────────┴───────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod browser;
pub mod deep_dive;
pub mod editor;
pub mod event;
pub mod layout;
pub mod render;
pub mod screen;
mod screens;
pub mod scroll;
pub mod theme;

pub use app::App;
pub use event::{Effect, Msg};
pub use render::render;
pub use screen::Screen;
