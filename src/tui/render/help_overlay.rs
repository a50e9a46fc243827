use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("enter / space", "open item / count"),
    ("n", "new item"),
    ("e", "edit item"),
    ("a", "archive / restore"),
    ("d", "delete"),
    ("J / K", "move item down / up"),
    ("tab", "toggle archive list"),
    ("r", "reset count (while counting)"),
    ("esc", "back"),
    ("mouse", "click opens, drag reorders, swipe archives/deletes"),
    ("q", "quit"),
];

pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 64, (KEYS.len() + 2) as u16);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .border_style(Style::default().fg(app.theme.dim))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", key),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.to_string(), Style::default().fg(app.theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
