use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the bottom hint row for the list screen.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.show_archive {
        " enter restore   tab items   ? help   q quit"
    } else {
        " enter count   n new   a archive   d delete   tab archive   ? help"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    #[test]
    fn hints_follow_the_visible_list() {
        let mut app = test_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            super::render_status_row(frame, &mut app, area);
        });
        assert!(output.contains("a archive"));

        app.show_archive = true;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            super::render_status_row(frame, &mut app, area);
        });
        assert!(output.contains("enter restore"));
    }
}
