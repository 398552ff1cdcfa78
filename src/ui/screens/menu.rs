//! Main menu, post-install menu and the overlay screens (Help, About,
//! `QuitConfirm`).

use super::{is_confirm, vertical_delta};
use crate::catalog::CatalogKind;
use crate::ui::app::App;
use crate::ui::event::Effect;
use crate::ui::render::{centered, chrome, dialog, menu};
use crate::ui::screen::Screen;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainEntry {
    StartSetup,
    BrowseHotkeys,
    ManagePackages,
    Help,
    About,
    Quit,
}

const MAIN_ENTRIES: [(MainEntry, &str); 6] = [
    (MainEntry::StartSetup, "Start setup"),
    (MainEntry::BrowseHotkeys, "Browse hotkeys"),
    (MainEntry::ManagePackages, "Manage packages"),
    (MainEntry::Help, "Help"),
    (MainEntry::About, "About"),
    (MainEntry::Quit, "Quit"),
];

const MAIN_HINTS: [(&str, &str); 4] = [
    ("↑↓", "move"),
    ("Enter", "select"),
    ("?", "help"),
    ("q", "quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostEntry {
    BrowseHotkeys,
    ManagePackages,
    RerunSetup,
    Quit,
}

const POST_ENTRIES: [(PostEntry, &str); 4] = [
    (PostEntry::BrowseHotkeys, "Browse hotkeys"),
    (PostEntry::ManagePackages, "Manage packages"),
    (PostEntry::RerunSetup, "Re-run setup"),
    (PostEntry::Quit, "Quit"),
];

fn labels<T>(entries: &[(T, &str)]) -> Vec<String> {
    entries.iter().map(|(_, label)| label.to_string()).collect()
}

pub fn handle_main_menu(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, MAIN_ENTRIES.len());
        return None;
    }
    match key.code {
        _ if is_confirm(&key) => {
            let (entry, _) = MAIN_ENTRIES[app.local.cursor().min(MAIN_ENTRIES.len() - 1)];
            match entry {
                MainEntry::StartSetup => app.goto(Screen::ThemeSelect),
                MainEntry::BrowseHotkeys => {
                    app.open_browser(CatalogKind::Hotkeys, Screen::MainMenu);
                }
                MainEntry::ManagePackages => {
                    app.open_browser(CatalogKind::Packages, Screen::MainMenu);
                }
                MainEntry::Help => app.open_overlay(Screen::Help),
                MainEntry::About => app.open_overlay(Screen::About),
                MainEntry::Quit => app.open_overlay(Screen::QuitConfirm),
            }
        }
        KeyCode::Char('?') => app.open_overlay(Screen::Help),
        KeyCode::Char('q') | KeyCode::Esc => app.open_overlay(Screen::QuitConfirm),
        _ => {}
    }
    None
}

pub fn render_main_menu(frame: &mut Frame, app: &App) {
    let body = chrome(frame, app, &MAIN_HINTS);
    let rect = centered(body, 40, MAIN_ENTRIES.len() as u16 + 2);
    let entries = labels(&MAIN_ENTRIES);
    let cursor = app.local.cursor();
    menu(frame, app.theme(), rect, "Main menu", &entries, cursor);
}

pub fn handle_post_install(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, POST_ENTRIES.len());
        return None;
    }
    match key.code {
        _ if is_confirm(&key) => {
            let (entry, _) = POST_ENTRIES[app.local.cursor().min(POST_ENTRIES.len() - 1)];
            match entry {
                PostEntry::BrowseHotkeys => {
                    app.open_browser(CatalogKind::Hotkeys, Screen::PostInstallMenu);
                }
                PostEntry::ManagePackages => {
                    app.open_browser(CatalogKind::Packages, Screen::PostInstallMenu);
                }
                PostEntry::RerunSetup => app.goto(Screen::Summary),
                PostEntry::Quit => app.open_overlay(Screen::QuitConfirm),
            }
        }
        KeyCode::Char('?') => app.open_overlay(Screen::Help),
        KeyCode::Char('q') | KeyCode::Esc => app.open_overlay(Screen::QuitConfirm),
        _ => {}
    }
    None
}

pub fn render_post_install(frame: &mut Frame, app: &App) {
    let body = chrome(
        frame,
        app,
        &[("↑↓", "move"), ("Enter", "select"), ("q", "quit")],
    );
    let rect = centered(body, 40, POST_ENTRIES.len() as u16 + 2);
    let entries = labels(&POST_ENTRIES);
    let cursor = app.local.cursor();
    menu(frame, app.theme(), rect, "What next?", &entries, cursor);
}

/// Shared by Help and About: any dismiss key returns to the opener.
pub fn handle_info(app: &mut App, key: KeyEvent) -> Option<Effect> {
    let dismiss = matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')
    );
    if dismiss {
        app.close_overlay();
    }
    None
}

pub fn render_help(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(frame, app, &[("Esc", "back")]);
    let key = |k: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("{:<12}", k),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(text),
        ])
    };
    let lines = vec![
        key("↑↓ / j k", "move (j/k in Vim, C-n/C-p in Emacs)"),
        key("Enter", "select / continue"),
        key("Esc", "go back one step"),
        key("Tab ← →", "switch pane (h/l in Vim, C-b/C-f in Emacs)"),
        key("f / F", "favorite item / favorites only"),
        key("/", "filter items (Enter keeps, Esc clears)"),
        key("a / d", "add alias / delete aliases for item"),
        key("Ctrl+C", "quit immediately"),
    ];
    dialog(frame, theme, body, "Help", lines);
}

pub fn render_about(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(frame, app, &[("Esc", "back")]);
    let favorites = app.store.favorite_count();
    let aliases = app.store.aliases().len();
    let lines = vec![
        Line::styled(
            format!("dotwiz {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(env!("CARGO_PKG_DESCRIPTION")),
        Line::raw(""),
        Line::styled(
            format!("favorites: {}   aliases: {}", favorites, aliases),
            Style::default().fg(theme.muted),
        ),
    ];
    dialog(frame, theme, body, "About", lines);
}

pub fn handle_quit_confirm(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, 2);
        return None;
    }
    match key.code {
        KeyCode::Char('y') => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Esc => app.close_overlay(),
        _ if is_confirm(&key) => {
            if app.local.cursor() == 0 {
                app.should_quit = true;
            } else {
                app.close_overlay();
            }
        }
        _ => {}
    }
    None
}

pub fn render_quit_confirm(frame: &mut Frame, app: &App) {
    let body = chrome(frame, app, &[("y", "quit"), ("n", "stay")]);
    let rect = centered(body, 30, 4);
    menu(
        frame,
        app.theme(),
        rect,
        "Quit dotwiz?",
        &["Yes, quit".to_string(), "No, go back".to_string()],
        app.local.cursor(),
    );
}
