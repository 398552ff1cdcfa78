//! The linear wizard steps: theme, navigation style, deep-dive prompt and
//! the summary. Esc always walks back one step.

use super::{is_confirm, vertical_delta};
use crate::catalog::NavStyle;
use crate::ui::app::App;
use crate::ui::deep_dive::Tool;
use crate::ui::event::Effect;
use crate::ui::render::{centered, chrome, menu, panel};
use crate::ui::screen::Screen;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const WIZARD_HINTS: [(&str, &str); 3] = [("↑↓", "move"), ("Enter", "choose"), ("Esc", "back")];

pub fn handle_theme_select(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, Theme::all().len());
        return None;
    }
    match key.code {
        _ if is_confirm(&key) => {
            app.theme_index = app.local.cursor();
            app.goto(Screen::NavStyleSelect);
        }
        KeyCode::Esc => app.goto(Screen::MainMenu),
        _ => {}
    }
    None
}

pub fn render_theme_select(frame: &mut Frame, app: &App) {
    let body = chrome(frame, app, &WIZARD_HINTS);
    let cursor = app.local.cursor();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);

    let names: Vec<String> = Theme::all()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            if i == app.theme_index {
                format!("{} (current)", t.name)
            } else {
                t.name.to_string()
            }
        })
        .collect();
    let title = "Choose a theme";
    menu(frame, app.theme(), chunks[0], title, &names, cursor);

    // Swatch preview of the theme under the cursor
    let preview = Theme::at(cursor);
    let swatch = |label: &'static str, color| {
        Line::from(vec![
            Span::styled("  ████  ", Style::default().fg(color)),
            Span::styled(label, Style::default().fg(preview.fg)),
        ])
    };
    let lines = vec![
        Line::styled(
            preview.name,
            Style::default()
                .fg(preview.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        swatch("accent", preview.accent),
        swatch("highlight", preview.highlight),
        swatch("success", preview.success),
        swatch("error", preview.error),
        swatch("muted", preview.muted),
    ];
    let paragraph = Paragraph::new(lines)
        .block(panel(app.theme(), " Preview ", false))
        .style(Style::default().bg(preview.bg));
    frame.render_widget(paragraph, chunks[1]);
}

pub fn handle_nav_style(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, NavStyle::ALL.len());
        return None;
    }
    match key.code {
        _ if is_confirm(&key) => {
            let style = NavStyle::ALL[app.local.cursor().min(NavStyle::ALL.len() - 1)];
            app.set_nav_style(style);
            app.goto(Screen::DeepDivePrompt);
        }
        KeyCode::Esc => app.goto(Screen::ThemeSelect),
        _ => {}
    }
    None
}

pub fn render_nav_style(frame: &mut Frame, app: &App) {
    let body = chrome(frame, app, &WIZARD_HINTS);
    let entries: Vec<String> = NavStyle::ALL
        .iter()
        .map(|s| s.label().to_string())
        .collect();
    let rect = centered(body, 44, entries.len() as u16 + 2);
    let title = "Editor & keybinding style";
    let cursor = app.local.cursor();
    menu(frame, app.theme(), rect, title, &entries, cursor);
}

pub fn handle_deep_dive_prompt(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, 2);
        return None;
    }
    let choice = match key.code {
        KeyCode::Char('y') => Some(true),
        KeyCode::Char('n') => Some(false),
        KeyCode::Esc => {
            app.goto(Screen::NavStyleSelect);
            None
        }
        _ if is_confirm(&key) => Some(app.local.cursor() == 0),
        _ => None,
    };
    if let Some(deep_dive) = choice {
        app.deep_dive = deep_dive;
        app.goto(if deep_dive {
            Screen::DeepDiveMenu
        } else {
            Screen::Summary
        });
    }
    None
}

pub fn render_deep_dive_prompt(frame: &mut Frame, app: &App) {
    let body = chrome(frame, app, &[("y", "yes"), ("n", "no"), ("Esc", "back")]);
    let rect = centered(body, 52, 4);
    menu(
        frame,
        app.theme(),
        rect,
        "Configure each tool individually?",
        &[
            "Yes, take the deep dive".to_string(),
            "No, use sensible defaults".to_string(),
        ],
        app.local.cursor(),
    );
}

pub fn handle_summary(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        _ if is_confirm(&key) => app.goto(Screen::ConfirmInstall),
        KeyCode::Esc => app.goto(if app.deep_dive {
            Screen::DeepDiveMenu
        } else {
            Screen::DeepDivePrompt
        }),
        KeyCode::Char('?') => app.open_overlay(Screen::Help),
        _ => {}
    }
    None
}

/// Lines describing the selections, shared with the confirm screen.
pub fn summary_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme();
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(theme.muted)),
            Span::styled(
                value,
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let mut lines = vec![
        row("Theme", theme.name.to_string()),
        row("Navigation style", app.nav_style.label().to_string()),
        row(
            "Deep dive",
            if app.deep_dive { "yes" } else { "no" }.to_string(),
        ),
    ];
    if app.deep_dive {
        lines.push(Line::raw(""));
        for tool in Tool::ALL {
            let values: Vec<&str> = (0..tool.fields().len())
                .filter_map(|i| app.deep_dive_config.value(tool, i))
                .collect();
            lines.push(row(tool.label(), values.join(", ")));
        }
    }
    lines
}

pub fn render_summary(frame: &mut Frame, app: &App) {
    let body = chrome(frame, app, &[("Enter", "install"), ("Esc", "back")]);
    let lines = summary_lines(app);
    let rect = centered(body, 70, lines.len() as u16 + 2);
    let block = panel(app.theme(), " Your setup ", true);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, rect);
}
