use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};

use crate::tui::app::{App, Screen};

use super::centered_rect;

/// Render the full-screen counting view: display text, the live count,
/// progress toward the target, and the completion overlay.
pub fn render_counter_view(frame: &mut Frame, app: &App, area: Rect) {
    let Screen::Counting(session) = &app.screen else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top bar
            Constraint::Min(1),    // dial
            Constraint::Length(1), // hints
        ])
        .split(area);

    render_top_bar(frame, app, chunks[0]);
    render_dial(frame, app, chunks[1]);

    let hints = if session.is_complete() {
        "r again   n next   esc back"
    } else {
        "space count   r reset   n next   esc back"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(app.theme.dim),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    if session.is_complete() {
        render_complete_overlay(frame, app, area);
    }
}

fn render_top_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " esc back",
        Style::default().fg(app.theme.dim),
    )];
    if let Some((position, total)) = app.counting_position() {
        let right = format!("{}/{} ", position, total);
        let used = 9 + right.len();
        if used < area.width as usize {
            spans.push(Span::raw(" ".repeat(area.width as usize - used)));
        }
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dial(frame: &mut Frame, app: &App, area: Rect) {
    let Screen::Counting(session) = &app.screen else {
        return;
    };

    // The near-end pulse briefly recolors the count, the terminal's
    // stand-in for a vibration motor.
    let count_color = if app.flash_active() {
        app.theme.pulse
    } else {
        app.theme.accent
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            session.display_text().to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            session.title().to_string(),
            Style::default().fg(app.theme.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            session.current_value().to_string(),
            Style::default()
                .fg(count_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match (session.remaining(), session.target()) {
        (Some(remaining), Some(_)) if !session.is_complete() => {
            lines.push(Line::from(Span::styled(
                format!("{} to go", remaining),
                Style::default().fg(app.theme.dim),
            )));
        }
        (_, None) => {
            lines.push(Line::from(Span::styled(
                "no target",
                Style::default().fg(app.theme.dim),
            )));
        }
        _ => lines.push(Line::from("")),
    }

    let text_height = lines.len() as u16;
    let gauge_height: u16 = 2;
    let block_height = text_height + gauge_height;
    let top = area.y + area.height.saturating_sub(block_height) / 2;

    let text_area = Rect {
        x: area.x,
        y: top.min(area.y + area.height.saturating_sub(1)),
        width: area.width,
        height: text_height.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    // Progress gauge under the count, only when there is a target.
    if session.target().is_some() && area.height > block_height {
        let gauge_width = area.width.min(40);
        let gauge_area = Rect {
            x: area.x + (area.width - gauge_width) / 2,
            y: text_area.y + text_height + 1,
            width: gauge_width,
            height: 1,
        };
        let ratio = (session.progress_percent() / 100.0).clamp(0.0, 1.0);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(app.theme.accent).bg(app.theme.selection_bg))
                .ratio(ratio)
                .label(format!("{:.0}%", session.progress_percent())),
            gauge_area,
        );
    }
}

fn render_complete_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 30, 5);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "complete",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "r again   n next   esc back",
            Style::default().fg(app.theme.text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
