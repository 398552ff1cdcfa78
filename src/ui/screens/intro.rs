//! Intro animation and welcome screen.

use crate::ui::app::{App, INTRO_TICKS};
use crate::ui::event::Effect;
use crate::ui::render::{centered, chrome, hint_line};
use crate::ui::screen::{Screen, ScreenLocal};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

const LOGO: [&str; 5] = [
    "     _       _          _     ",
    "  __| | ___ | |___ __ _(_)____",
    " / _` |/ _ \\| __\\ V  V / |_  /",
    "| (_| | (_) | |_ \\_/\\_/| |/ / ",
    " \\__,_|\\___/ \\__|      |_/___|",
];

const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub fn handle_intro(app: &mut App, _key: KeyEvent) -> Option<Effect> {
    app.goto(Screen::Welcome);
    None
}

pub fn render_intro(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let elapsed = match app.local {
        ScreenLocal::Intro { started_at } => app.frame.saturating_sub(started_at),
        _ => INTRO_TICKS,
    };
    let area = frame.area();
    let background = Block::default().style(Style::default().bg(theme.bg));
    frame.render_widget(background, area);

    // Reveal the logo column by column over the first half of the intro
    let logo_width = LOGO[0].chars().count();
    let revealed = elapsed as usize * 2 * logo_width / INTRO_TICKS as usize;
    let visible = revealed.min(logo_width);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| {
            let shown: String = row.chars().take(visible).collect();
            Line::from(Span::styled(
                format!("{:<width$}", shown, width = logo_width),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::raw(""));
    let spinner = SPINNER[(app.frame % SPINNER.len() as u64) as usize];
    lines.push(Line::from(Span::styled(
        format!("{} preparing your dotfiles", spinner),
        Style::default().fg(theme.muted),
    )));

    let rect = centered(area, logo_width as u16 + 4, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

pub fn handle_welcome(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.goto(Screen::MainMenu),
        KeyCode::Char('?') => app.open_overlay(Screen::Help),
        KeyCode::Char('q') | KeyCode::Esc => app.open_overlay(Screen::QuitConfirm),
        _ => {}
    }
    None
}

pub fn render_welcome(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let body = chrome(
        frame,
        app,
        &[("Enter", "continue"), ("?", "help"), ("q", "quit")],
    );
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::styled(*row, Style::default().fg(theme.accent)))
        .collect();
    lines.extend([
        Line::raw(""),
        Line::raw("This wizard sets up your terminal environment:"),
        Line::raw("a theme, a keybinding style, and optionally a"),
        Line::raw("per-tool deep dive, then runs the installer."),
        Line::raw(""),
        hint_line(theme, &[("Enter", "to begin")]),
    ]);
    let rect = centered(body, 60, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
