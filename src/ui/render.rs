//! Frame drawing entry point and the pieces shared by every screen.
//!
//! Each screen's renderer draws the whole frame: it calls [`chrome`] for
//! the header and footer, then fills the returned body area.

use crate::ui::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap,
    },
    Frame,
};

/// Draw the active screen.
pub fn render(frame: &mut Frame, app: &App) {
    (app.screen.route().render)(frame, app);
}

/// Paint the background, header and footer. Returns the body area.
pub fn chrome(frame: &mut Frame, app: &App, hints: &[(&str, &str)]) -> Rect {
    let theme = app.theme();
    let area = frame.area();
    let background = Style::default().bg(theme.bg).fg(theme.fg);
    frame.render_widget(Block::default().style(background), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(crate::ui::layout::HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(crate::ui::layout::FOOTER_HEIGHT),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            " dotwiz ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.screen.title(), Style::default().fg(theme.fg)),
    ]);
    let border = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(title).block(border), chunks[0]);

    frame.render_widget(Paragraph::new(hint_line(theme, hints)), chunks[2]);
    chunks[1]
}

/// `key description` pairs for the footer.
pub fn hint_line<'a>(theme: &Theme, hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(theme.muted),
        ));
    }
    Line::from(spans)
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bordered block in the theme's colors.
pub fn panel<'a>(theme: &Theme, title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    let color = if focused { theme.accent } else { theme.muted };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// A vertical selectable list of entries.
pub fn menu(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    entries: &[String],
    cursor: usize,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format!("  {}", entry)))
        .collect();
    let list = List::new(items)
        .block(panel(theme, format!(" {} ", title), true))
        .style(Style::default().fg(theme.fg))
        .highlight_style(
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶");
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// A centered dialog box with wrapped text, drawn over whatever is below.
pub fn dialog(frame: &mut Frame, theme: &Theme, area: Rect, title: &str, lines: Vec<Line>) {
    let height = (lines.len() as u16).saturating_add(4);
    let rect = centered(area, 64, height);
    frame.render_widget(Clear, rect);
    let block = panel(theme, format!(" {} ", title), true);
    let paragraph = Paragraph::new(lines)
        .block(block.padding(Padding::horizontal(1)))
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
