//! Hotkeys and Manage screens: key handling and drawing of the dual-pane
//! browser, including the filter prompt and the alias editor popup.
//!
//! Key handling has three modes, checked in order:
//!
//! 1. alias editor open: every key edits the focused field
//! 2. filter typing: printable keys extend the filter
//! 3. normal navigation

use super::{horizontal_delta, vertical_delta};
use crate::catalog::CatalogKind;
use crate::favorites::FavoriteStore;
use crate::ui::app::App;
use crate::ui::browser::{Browser, Pane};
use crate::ui::editor::{EditorField, TextField};
use crate::ui::event::Effect;
use crate::ui::render::{centered, chrome, panel};
use crate::ui::screen::Screen;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

/// Width of the label column in the alias editor.
const EDITOR_LABEL_WIDTH: u16 = 9;

pub fn handle_browser(app: &mut App, key: KeyEvent) -> Option<Effect> {
    let kind = app.browser_kind()?;
    let style = app.nav_style;
    let (browser, store) = app.browser_parts(kind);

    if browser.editor.is_some() {
        return handle_editor_key(browser, store, key);
    }
    if browser.filter_editing {
        handle_filter_key(browser, store, key);
        return None;
    }

    if let Some(delta) = vertical_delta(style, &key) {
        browser.move_selection(delta, store);
        return None;
    }
    if let Some(delta) = horizontal_delta(style, &key) {
        let pane = if delta < 0 {
            Pane::Categories
        } else {
            Pane::Items
        };
        browser.focus(pane, store);
        return None;
    }

    let page = match browser.pane {
        Pane::Categories => browser.layout().category_rows(),
        Pane::Items => browser.layout().item_rows(),
    } as isize;
    let plain = !key.modifiers.contains(KeyModifiers::CONTROL);
    // Item actions only apply while the item list has focus
    let on_items = browser.pane == Pane::Items;

    match key.code {
        KeyCode::Esc => {
            let back = browser.return_screen;
            app.goto(back);
        }
        KeyCode::Char('q') => app.open_overlay(Screen::QuitConfirm),
        KeyCode::Char('?') => app.open_overlay(Screen::Help),
        KeyCode::PageUp => browser.move_selection(-page, store),
        KeyCode::PageDown => browser.move_selection(page, store),
        KeyCode::Enter => browser.focus(Pane::Items, store),
        KeyCode::Tab | KeyCode::BackTab => browser.switch_pane(store),
        KeyCode::Char('f') if plain && on_items => {
            if let Some(now) = browser.toggle_selected_favorite(store) {
                debug!(favorite = now, "toggled favorite");
                return Some(Effect::PersistStore);
            }
        }
        KeyCode::Char('F') => browser.toggle_favorites_only(store),
        KeyCode::Char('/') => {
            browser.begin_filter();
            browser.focus(Pane::Items, store);
        }
        KeyCode::Char('a') if on_items => {
            browser.open_editor(store);
        }
        KeyCode::Char('d') if on_items => {
            let command = browser.selected_item(store).map(|item| item.key.clone());
            if let Some(command) = command {
                if store.remove_aliases_for(&command) > 0 {
                    return Some(Effect::PersistStore);
                }
            }
        }
        _ => {}
    }
    None
}

fn handle_filter_key(browser: &mut Browser, store: &FavoriteStore, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => browser.end_filter(false, store),
        KeyCode::Enter => browser.end_filter(true, store),
        KeyCode::Backspace => browser.filter_pop(store),
        KeyCode::Up => browser.move_item(-1, store),
        KeyCode::Down => browser.move_item(1, store),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            browser.filter_push(c, store);
        }
        _ => {}
    }
}

fn handle_editor_key(
    browser: &mut Browser,
    store: &mut FavoriteStore,
    key: KeyEvent,
) -> Option<Effect> {
    match key.code {
        KeyCode::Esc => browser.cancel_editor(),
        KeyCode::Enter => {
            let draft = browser.commit_editor()?;
            store.set_alias(&draft.name, &draft.command);
            debug!(alias = %draft.name, "alias saved");
            return Some(Effect::PersistStore);
        }
        _ => {
            let editor = browser.editor.as_mut()?;
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => editor.switch_field(),
                KeyCode::Backspace => editor.focused_mut().delete_backward(),
                KeyCode::Delete => editor.focused_mut().delete_forward(),
                KeyCode::Left => editor.focused_mut().move_left(),
                KeyCode::Right => editor.focused_mut().move_right(),
                KeyCode::Home => editor.focused_mut().move_home(),
                KeyCode::End => editor.focused_mut().move_end(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    editor.focused_mut().insert_char(c);
                }
                _ => {}
            }
        }
    }
    None
}

pub fn render_browser(frame: &mut Frame, app: &App) {
    let Some(kind) = app.browser_kind() else {
        return;
    };
    let browser = app.browser(kind);
    let store = &app.store;
    let theme = app.theme();

    let hints: &[(&str, &str)] = if browser.editor.is_some() {
        &[("Tab", "field"), ("Enter", "save"), ("Esc", "cancel")]
    } else if browser.filter_editing {
        &[("type", "filter"), ("Enter", "keep"), ("Esc", "clear")]
    } else {
        &[
            ("↑↓", "move"),
            ("Tab", "pane"),
            ("f", "favorite"),
            ("F", "favorites only"),
            ("/", "filter"),
            ("a", "alias"),
            ("Esc", "back"),
        ]
    };
    chrome(frame, app, hints);

    // The layout follows the last Resize; clip in case the frame is smaller
    let area = frame.area();
    let layout = *browser.layout();
    let left = layout.left.intersection(area);
    let right = layout.right.intersection(area);
    render_categories(frame, theme, browser, left);
    render_items(frame, theme, browser, store, kind, right);
    if let Some(widget) = layout.widget {
        render_details(frame, theme, browser, store, widget.intersection(area));
    }
    if browser.editor.is_some() {
        render_editor(frame, theme, browser, area);
    }
}

/// A bordered panel with one column of horizontal padding.
fn padded<'a>(theme: &Theme, title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    panel(theme, title, focused).padding(Padding::horizontal(1))
}

fn render_categories(frame: &mut Frame, theme: &Theme, browser: &Browser, area: Rect) {
    let items: Vec<ListItem> = browser
        .categories()
        .iter()
        .map(|c| {
            let icon = c.icon.as_str();
            let icon = if icon.is_empty() { "•" } else { icon };
            ListItem::new(format!("{} {}", icon, c.name))
        })
        .collect();
    let focused = browser.pane == Pane::Categories;
    let list = List::new(items)
        .block(padded(theme, " Categories ", focused))
        .style(Style::default().fg(theme.fg))
        .highlight_style(selection_style(theme, focused));
    let selected = (!browser.categories().is_empty()).then_some(browser.category_index);
    let mut state = ListState::default()
        .with_offset(browser.category_scroll)
        .with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_items(
    frame: &mut Frame,
    theme: &Theme,
    browser: &Browser,
    store: &FavoriteStore,
    kind: CatalogKind,
    area: Rect,
) {
    let category_id = browser.current_category().map_or("", |c| c.id.as_str());
    let visible = browser.visible_items(store);
    let key_width = visible
        .iter()
        .map(|i| i.key.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);
    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let star = if store.is_favorite(category_id, &item.key) {
                Span::styled("★ ", Style::default().fg(theme.highlight))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                star,
                Span::styled(
                    format!("{:<width$}", item.key, width = key_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(item.description.clone()),
            ]))
        })
        .collect();

    let noun = match kind {
        CatalogKind::Hotkeys => "Bindings",
        CatalogKind::Packages => "Packages",
    };
    let highlight = Style::default().fg(theme.highlight);
    let mut title = vec![Span::raw(format!(" {} ", noun))];
    if browser.favorites_only {
        title.push(Span::styled("★ only ", highlight));
    }
    if browser.filter_editing || !browser.filter.is_empty() {
        let cursor = if browser.filter_editing { "▏" } else { "" };
        let filter = format!("/{}{} ", browser.filter, cursor);
        title.push(Span::styled(filter, highlight));
    }

    let focused = browser.pane == Pane::Items;
    let block = padded(theme, Line::from(title), focused);

    if items.is_empty() {
        let message = if browser.filter_engaged() {
            "Nothing matches. Press F or / then Esc to clear the filter."
        } else {
            "This category is empty."
        };
        let line = Line::styled(message, Style::default().fg(theme.muted));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.fg))
        .highlight_style(selection_style(theme, focused));
    let mut state = ListState::default()
        .with_offset(browser.item_scroll)
        .with_selected(Some(browser.item_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(
    frame: &mut Frame,
    theme: &Theme,
    browser: &Browser,
    store: &FavoriteStore,
    area: Rect,
) {
    let muted = Style::default().fg(theme.muted);
    let mut lines = Vec::new();
    if let Some(item) = browser.selected_item(store) {
        lines.push(Line::styled(
            item.description.clone(),
            Style::default().fg(theme.fg),
        ));
        let aliases = store.aliases_for(&item.key);
        if aliases.is_empty() {
            lines.push(Line::styled("no aliases (press a to add one)", muted));
        } else {
            let name_style = Style::default().fg(theme.highlight);
            for (name, command) in aliases {
                lines.push(Line::from(vec![
                    Span::styled(format!("alias {}", name), name_style),
                    Span::styled(format!(" = {}", command), muted),
                ]));
            }
        }
    }
    let paragraph = Paragraph::new(lines)
        .block(padded(theme, " Details ", false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_editor(frame: &mut Frame, theme: &Theme, browser: &Browser, area: Rect) {
    let Some(editor) = browser.editor.as_ref() else {
        return;
    };
    let rect = centered(area, 60, 6);
    frame.render_widget(Clear, rect);

    let field_line = |label: &'static str, field: &TextField, focused: bool| {
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        Line::from(vec![
            Span::styled(
                format!("{:<width$}", label, width = EDITOR_LABEL_WIDTH as usize),
                label_style,
            ),
            Span::styled(field.value().to_string(), Style::default().fg(theme.fg)),
        ])
    };
    let on_name = editor.focus == EditorField::Name;
    let hint = if editor.can_commit() {
        "Enter saves the alias"
    } else {
        "both fields are required"
    };
    let lines = vec![
        field_line("name", &editor.name, on_name),
        field_line("command", &editor.command, !on_name),
        Line::raw(""),
        Line::styled(hint, Style::default().fg(theme.muted)),
    ];
    let block = padded(theme, " New alias ", true);
    let inner = block.inner(rect);
    let popup = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(popup, rect);

    if let Some(position) = editor_cursor(inner, on_name, editor.focused().visual_cursor()) {
        frame.set_cursor_position(position);
    }
}

/// Terminal position of the editor's text cursor, or `None` when it falls
/// outside the popup.
fn editor_cursor(inner: Rect, on_name: bool, visual_cursor: usize) -> Option<Position> {
    let row = if on_name { 0 } else { 1 };
    let offset = u16::try_from(visual_cursor).unwrap_or(u16::MAX);
    let label_end = inner.x.saturating_add(EDITOR_LABEL_WIDTH);
    let column = label_end.saturating_add(offset);
    if column >= inner.right() {
        return None;
    }
    Some(Position::new(column, inner.y.saturating_add(row)))
}

fn selection_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg).bg(theme.surface)
    }
}
