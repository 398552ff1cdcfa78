//! Confirmation, live progress and result screens of the install step.

use super::is_confirm;
use super::wizard::summary_lines;
use crate::install::LineKind;
use crate::ui::app::App;
use crate::ui::event::Effect;
use crate::ui::render::{centered, chrome, dialog, panel};
use crate::ui::screen::Screen;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn handle_confirm(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Char('y') => app.request_install(),
        _ if is_confirm(&key) => app.request_install(),
        KeyCode::Char('n') | KeyCode::Esc => {
            app.goto(Screen::Summary);
            None
        }
        _ => None,
    }
}

pub fn render_confirm(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(frame, app, &[("y", "install"), ("n", "back")]);
    let mut lines = summary_lines(app);
    lines.truncate(3);
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "The setup script will now run and may modify your dotfiles.",
        Style::default().fg(theme.highlight),
    ));
    lines.push(Line::raw("Proceed? [y/n]"));
    dialog(frame, theme, body, "Confirm installation", lines);
}

/// Navigation is ignored while the installer runs.
pub fn handle_installing(_app: &mut App, _key: KeyEvent) -> Option<Effect> {
    None
}

pub fn render_installing(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(frame, app, &[("Ctrl+C", "abort dotwiz")]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(body);

    let spinner = SPINNER[(app.frame % SPINNER.len() as u64) as usize];
    let step = app.install.current_step().unwrap_or("starting…");
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(theme.accent)),
        Span::styled(
            step.to_string(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}s", app.install.elapsed().as_secs()),
            Style::default().fg(theme.muted),
        ),
    ]);
    let status = Paragraph::new(line).block(panel(theme, " Status ", true));
    frame.render_widget(status, chunks[0]);

    let done = app.install.steps_done();
    let (ratio, label) = match (app.install.progress_ratio(), app.install.total_steps()) {
        (Some(ratio), Some(total)) => (ratio, format!("step {}/{}", done, total)),
        _ => (0.0, format!("{} steps done", done)),
    };
    let gauge = Gauge::default()
        .block(panel(theme, " Progress ", false))
        .gauge_style(Style::default().fg(theme.accent).bg(theme.surface))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[1]);

    let lines: Vec<Line> = app
        .install
        .lines()
        .map(|line| match line.kind {
            LineKind::Step => Line::styled(
                line.text.clone(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            LineKind::Plain => Line::styled(line.text.clone(), Style::default().fg(theme.fg)),
        })
        .collect();
    // Keep the newest lines in view
    let visible = usize::from(chunks[2].height.saturating_sub(2));
    let skip = lines.len().saturating_sub(visible);
    let recent: Vec<Line> = lines.into_iter().skip(skip).collect();
    let output = Paragraph::new(recent).block(panel(theme, " Output ", false));
    frame.render_widget(output, chunks[2]);
}

pub fn handle_complete(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if is_confirm(&key) || key.code == KeyCode::Esc {
        app.goto(Screen::PostInstallMenu);
    }
    None
}

pub fn render_complete(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(frame, app, &[("Enter", "continue")]);
    let lines = vec![
        Line::styled(
            "✔ Your dotfiles are installed.",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(format!(
            "{} steps in {}s",
            app.install.steps_done(),
            app.install.elapsed().as_secs()
        )),
        Line::raw("Restart your shell to pick up the changes."),
    ];
    let rect = centered(body, 56, lines.len() as u16 + 2);
    let paragraph = Paragraph::new(lines).block(panel(theme, " Done ", true));
    frame.render_widget(paragraph, rect);
}

pub fn handle_error(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Char('r') => app.request_install(),
        KeyCode::Char('s') => {
            app.goto(Screen::PostInstallMenu);
            None
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        _ => None,
    }
}

pub fn render_error(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(frame, app, &[("r", "retry"), ("s", "skip"), ("q", "quit")]);
    let message = app
        .install
        .last_error()
        .map_or_else(|| "unknown error".to_string(), ToString::to_string);
    let mut lines = vec![
        Line::styled(
            "✘ Installation failed",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(message),
        Line::raw(""),
    ];
    let tail: Vec<_> = app.install.lines().collect();
    let muted = Style::default().fg(theme.muted);
    for line in tail.iter().skip(tail.len().saturating_sub(5)) {
        lines.push(Line::styled(line.text.clone(), muted));
    }
    dialog(frame, theme, body, "Error", lines);
}
