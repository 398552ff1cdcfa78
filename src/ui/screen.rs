//! # Screen Routing
//!
//! [`Screen`] is the single routing key for input handling and rendering.
//! [`Screen::route`] maps every variant to its `(handler, renderer)` pair
//! through one exhaustive `match`, so adding a screen without wiring it up
//! fails to compile.
//!
//! Transient per-screen state (menu cursors, form field cursors) lives in
//! [`ScreenLocal`], which is rebuilt on every transition.

use super::app::App;
use super::deep_dive::Tool;
use super::event::Effect;
use super::screens;
use crossterm::event::KeyEvent;
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Intro,
    Welcome,
    MainMenu,
    ThemeSelect,
    NavStyleSelect,
    DeepDivePrompt,
    DeepDiveMenu,
    ToolShell,
    ToolPrompt,
    ToolEditor,
    ToolTerminal,
    ToolMultiplexer,
    ToolGit,
    ToolFileManager,
    ToolFonts,
    ToolCliTools,
    ToolRuntimes,
    ToolContainers,
    ToolSsh,
    Summary,
    ConfirmInstall,
    Installing,
    InstallComplete,
    InstallError,
    PostInstallMenu,
    Hotkeys,
    Manage,
    Help,
    About,
    QuitConfirm,
}

/// Handles a key press on the active screen.
pub type KeyHandler = fn(&mut App, KeyEvent) -> Option<Effect>;
/// Draws the active screen.
pub type Renderer = fn(&mut Frame, &App);

#[derive(Clone, Copy)]
pub struct ScreenRoute {
    pub handle: KeyHandler,
    pub render: Renderer,
}

impl ScreenRoute {
    const fn new(handle: KeyHandler, render: Renderer) -> Self {
        Self { handle, render }
    }
}

impl Screen {
    pub fn route(self) -> ScreenRoute {
        use screens::{browser, deep_dive, install, intro, menu, wizard};
        match self {
            Screen::Intro => ScreenRoute::new(intro::handle_intro, intro::render_intro),
            Screen::Welcome => ScreenRoute::new(intro::handle_welcome, intro::render_welcome),
            Screen::MainMenu => ScreenRoute::new(menu::handle_main_menu, menu::render_main_menu),
            Screen::ThemeSelect => {
                ScreenRoute::new(wizard::handle_theme_select, wizard::render_theme_select)
            }
            Screen::NavStyleSelect => {
                ScreenRoute::new(wizard::handle_nav_style, wizard::render_nav_style)
            }
            Screen::DeepDivePrompt => ScreenRoute::new(
                wizard::handle_deep_dive_prompt,
                wizard::render_deep_dive_prompt,
            ),
            Screen::DeepDiveMenu => {
                ScreenRoute::new(deep_dive::handle_menu, deep_dive::render_menu)
            }
            Screen::ToolShell
            | Screen::ToolPrompt
            | Screen::ToolEditor
            | Screen::ToolTerminal
            | Screen::ToolMultiplexer
            | Screen::ToolGit
            | Screen::ToolFileManager
            | Screen::ToolFonts
            | Screen::ToolCliTools
            | Screen::ToolRuntimes
            | Screen::ToolContainers
            | Screen::ToolSsh => ScreenRoute::new(deep_dive::handle_tool, deep_dive::render_tool),
            Screen::Summary => ScreenRoute::new(wizard::handle_summary, wizard::render_summary),
            Screen::ConfirmInstall => {
                ScreenRoute::new(install::handle_confirm, install::render_confirm)
            }
            Screen::Installing => {
                ScreenRoute::new(install::handle_installing, install::render_installing)
            }
            Screen::InstallComplete => {
                ScreenRoute::new(install::handle_complete, install::render_complete)
            }
            Screen::InstallError => ScreenRoute::new(install::handle_error, install::render_error),
            Screen::PostInstallMenu => {
                ScreenRoute::new(menu::handle_post_install, menu::render_post_install)
            }
            Screen::Hotkeys | Screen::Manage => {
                ScreenRoute::new(browser::handle_browser, browser::render_browser)
            }
            Screen::Help => ScreenRoute::new(menu::handle_info, menu::render_help),
            Screen::About => ScreenRoute::new(menu::handle_info, menu::render_about),
            Screen::QuitConfirm => {
                ScreenRoute::new(menu::handle_quit_confirm, menu::render_quit_confirm)
            }
        }
    }

    /// Title shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Intro | Screen::Welcome => "Welcome",
            Screen::MainMenu => "Main menu",
            Screen::ThemeSelect => "Theme",
            Screen::NavStyleSelect => "Navigation style",
            Screen::DeepDivePrompt => "Deep dive",
            Screen::DeepDiveMenu => "Deep dive: tools",
            Screen::Summary => "Summary",
            Screen::ConfirmInstall => "Confirm installation",
            Screen::Installing => "Installing",
            Screen::InstallComplete => "Installation complete",
            Screen::InstallError => "Installation failed",
            Screen::PostInstallMenu => "What next?",
            Screen::Hotkeys => "Hotkeys",
            Screen::Manage => "Manage packages",
            Screen::Help => "Help",
            Screen::About => "About",
            Screen::QuitConfirm => "Quit",
            tool_screen => tool_screen.tool().map_or("Deep dive", Tool::label),
        }
    }

    pub fn for_tool(tool: Tool) -> Screen {
        match tool {
            Tool::Shell => Screen::ToolShell,
            Tool::Prompt => Screen::ToolPrompt,
            Tool::Editor => Screen::ToolEditor,
            Tool::Terminal => Screen::ToolTerminal,
            Tool::Multiplexer => Screen::ToolMultiplexer,
            Tool::Git => Screen::ToolGit,
            Tool::FileManager => Screen::ToolFileManager,
            Tool::Fonts => Screen::ToolFonts,
            Tool::CliTools => Screen::ToolCliTools,
            Tool::Runtimes => Screen::ToolRuntimes,
            Tool::Containers => Screen::ToolContainers,
            Tool::Ssh => Screen::ToolSsh,
        }
    }

    /// The tool edited on this screen, if it is a deep-dive tool screen.
    pub fn tool(self) -> Option<Tool> {
        Tool::ALL
            .into_iter()
            .find(|&tool| Screen::for_tool(tool) == self)
    }

    /// Screens that open over another screen and return to it.
    pub fn is_overlay(self) -> bool {
        matches!(self, Screen::Help | Screen::About | Screen::QuitConfirm)
    }
}

/// State owned by the active screen only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenLocal {
    None,
    /// Frame counter value when the intro started.
    Intro { started_at: u64 },
    /// Cursor over a vertical list of entries.
    Menu { cursor: usize },
    /// Field cursor on a deep-dive tool form.
    ToolForm { tool: Tool, field: usize },
}

impl ScreenLocal {
    /// Fresh local state for `screen`, seeded from the current selections.
    pub fn for_screen(screen: Screen, app: &App) -> Self {
        match screen {
            Screen::Intro => ScreenLocal::Intro {
                started_at: app.frame,
            },
            Screen::ThemeSelect => ScreenLocal::Menu {
                cursor: app.theme_index,
            },
            Screen::NavStyleSelect => ScreenLocal::Menu {
                cursor: crate::catalog::NavStyle::ALL
                    .iter()
                    .position(|&s| s == app.nav_style)
                    .unwrap_or(0),
            },
            Screen::DeepDivePrompt => ScreenLocal::Menu {
                cursor: usize::from(!app.deep_dive),
            },
            Screen::MainMenu
            | Screen::DeepDiveMenu
            | Screen::PostInstallMenu
            | Screen::QuitConfirm => ScreenLocal::Menu { cursor: 0 },
            other => match other.tool() {
                Some(tool) => ScreenLocal::ToolForm { tool, field: 0 },
                None => ScreenLocal::None,
            },
        }
    }

    pub fn cursor(&self) -> usize {
        match *self {
            ScreenLocal::Menu { cursor } => cursor,
            ScreenLocal::ToolForm { field, .. } => field,
            _ => 0,
        }
    }

    /// Move the cursor by `delta` within `count` entries, without wrapping.
    pub fn move_cursor(&mut self, delta: isize, count: usize) {
        match self {
            ScreenLocal::Menu { cursor } | ScreenLocal::ToolForm { field: cursor, .. } => {
                *cursor = super::scroll::step(*cursor, delta, count);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_screens_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Screen::for_tool(tool).tool(), Some(tool));
        }
        assert_eq!(Screen::Summary.tool(), None);
    }

    #[test]
    fn test_tool_screen_titles_use_tool_label() {
        assert_eq!(Screen::ToolGit.title(), "Git");
        assert_eq!(Screen::ToolSsh.title(), "SSH");
    }

    #[test]
    fn test_move_cursor_ignores_non_list_state() {
        let mut local = ScreenLocal::None;
        local.move_cursor(3, 10);
        assert_eq!(local, ScreenLocal::None);

        let mut local = ScreenLocal::Menu { cursor: 0 };
        local.move_cursor(3, 2);
        assert_eq!(local.cursor(), 1);
    }
}
