//! dotwiz - an interactive terminal wizard for installing a dotfiles setup
//!
//! This library provides the navigation and state engine behind the wizard:
//! screens, dual-pane browsers, the layout calculator, and the bridge that
//! streams the setup script's output into the TUI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod install;
pub mod logging;
pub mod ui;
