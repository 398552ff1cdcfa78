//! Deep-dive tool menu and the per-tool option forms.

use super::{horizontal_delta, is_confirm, vertical_delta};
use crate::ui::app::App;
use crate::ui::deep_dive::Tool;
use crate::ui::event::Effect;
use crate::ui::render::{centered, chrome, menu, panel};
use crate::ui::screen::{Screen, ScreenLocal};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tools plus the trailing "Done" entry.
const MENU_LEN: usize = Tool::ALL.len() + 1;

pub fn handle_menu(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, MENU_LEN);
        return None;
    }
    match key.code {
        _ if is_confirm(&key) => match Tool::ALL.get(app.local.cursor()) {
            Some(&tool) => app.goto(Screen::for_tool(tool)),
            None => app.goto(Screen::Summary),
        },
        KeyCode::Esc => app.goto(Screen::DeepDivePrompt),
        _ => {}
    }
    None
}

pub fn render_menu(frame: &mut Frame, app: &App) {
    let body = chrome(
        frame,
        app,
        &[("↑↓", "move"), ("Enter", "configure"), ("Esc", "back")],
    );
    let mut entries: Vec<String> = Tool::ALL
        .iter()
        .map(|&tool| {
            let mark = if app.deep_dive_config.is_customized(tool) {
                "●"
            } else {
                "○"
            };
            format!("{} {}", mark, tool.label())
        })
        .collect();
    entries.push("Done, review summary".to_string());
    let rect = centered(body, 44, MENU_LEN as u16 + 2);
    let cursor = app.local.cursor();
    menu(frame, app.theme(), rect, "Tools", &entries, cursor);
}

fn return_to_menu(app: &mut App, tool: Tool) {
    app.goto(Screen::DeepDiveMenu);
    let index = Tool::ALL.iter().position(|&t| t == tool).unwrap_or(0);
    app.local = ScreenLocal::Menu { cursor: index };
}

pub fn handle_tool(app: &mut App, key: KeyEvent) -> Option<Effect> {
    let ScreenLocal::ToolForm { tool, field } = app.local else {
        return None;
    };
    if let Some(delta) = vertical_delta(app.nav_style, &key) {
        app.local.move_cursor(delta, tool.fields().len());
        return None;
    }
    if let Some(delta) = horizontal_delta(app.nav_style, &key) {
        app.deep_dive_config.cycle(tool, field, delta);
        return None;
    }
    match key.code {
        KeyCode::Tab => app.deep_dive_config.cycle(tool, field, 1),
        KeyCode::Enter | KeyCode::Esc => return_to_menu(app, tool),
        _ => {}
    }
    None
}

pub fn render_tool(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(
        frame,
        app,
        &[("↑↓", "field"), ("←→", "change"), ("Enter", "done")],
    );
    let ScreenLocal::ToolForm { tool, field } = app.local else {
        return;
    };

    let label_width = tool
        .fields()
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);
    let lines: Vec<Line> = tool
        .fields()
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let selected = i == field;
            let marker = if selected { "▶" } else { " " };
            let label = format!("{} {:<width$}  ", marker, def.label, width = label_width);
            let value = app.deep_dive_config.value(tool, i).unwrap_or("");
            let position = app.deep_dive_config.choice(tool, i) + 1;
            let muted = Style::default().fg(theme.muted);
            let value_style = if selected {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            Line::from(vec![
                Span::styled(label, muted),
                Span::styled(format!("◀ {} ▶", value), value_style),
                Span::styled(format!("  ({}/{})", position, def.choices.len()), muted),
            ])
        })
        .collect();

    let rect = centered(body, 64, lines.len() as u16 + 2);
    let title = format!(" {} ", tool.label());
    let paragraph = Paragraph::new(lines).block(panel(theme, title, true));
    frame.render_widget(paragraph, rect);
}
