use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::model::{Item, ResetPeriod};
use crate::tui::app::App;

/// Rows each item occupies: display text line, detail line, separator.
const ROWS_PER_ITEM: u16 = 3;

/// Render the two-line header: app name on the left, which list is
/// showing (and how long it is) on the right.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = " zikr";
    let right = if app.show_archive {
        format!("archive ({}) ", app.archived.len())
    } else {
        format!("items ({}) ", app.items.len())
    };

    let mut spans = vec![Span::styled(
        left.to_string(),
        Style::default()
            .fg(app.theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = left.width() + right.width();
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(
        right,
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the item list (active or archive), maintaining the scroll
/// offset and the row hit map used by mouse input.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        app.item_rows.clear();
        return;
    }

    let visible_count = (area.height / ROWS_PER_ITEM).max(1) as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_count {
        app.scroll_offset = app.cursor + 1 - visible_count;
    }

    let mut rows: Vec<(u16, u16, u64)> = Vec::new();
    let mut lines: Vec<Line> = Vec::new();
    {
        let items = app.visible_items();
        if items.is_empty() {
            let message = if app.show_archive {
                "no archived items"
            } else {
                "nothing here yet, press n to add"
            };
            let empty = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(app.theme.dim),
            )))
            .alignment(ratatui::layout::Alignment::Center);
            let target = Rect {
                y: area.y + area.height / 2,
                height: 1,
                ..area
            };
            frame.render_widget(empty, target);
            app.item_rows.clear();
            return;
        }

        for (slot, (index, item)) in items
            .iter()
            .enumerate()
            .skip(app.scroll_offset)
            .take(visible_count)
            .enumerate()
        {
            let top = area.y + (slot as u16) * ROWS_PER_ITEM;
            rows.push((top, top + ROWS_PER_ITEM, item.id));

            let selected = index == app.cursor;
            let held = app.drag.held() == Some(item.id);
            lines.push(item_main_line(app, item, selected, held, area.width));
            lines.push(item_detail_line(app, item, selected, area.width));
            lines.push(Line::from(""));
        }
    }

    app.item_rows = rows;
    frame.render_widget(Paragraph::new(lines), area);
}

fn item_main_line(app: &App, item: &Item, selected: bool, held: bool, width: u16) -> Line<'static> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let marker_style = Style::default()
        .fg(if held { app.theme.accent } else { app.theme.dim })
        .bg(bg);
    let text_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let badge_style = Style::default().fg(app.theme.accent).bg(bg);

    let marker = " \u{2261} ";
    let badge = match (item.target, item.reset_period) {
        (Some(target), ResetPeriod::Daily) => format!("{} / day ", target),
        (Some(target), ResetPeriod::Weekly) => format!("{} / week ", target),
        (None, _) => String::from("open count "),
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), marker_style),
        Span::styled(item.display_text.clone(), text_style),
    ];
    let used = marker.width() + item.display_text.width() + badge.width();
    let width = width as usize;
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(badge, badge_style));
    Line::from(spans)
}

fn item_detail_line(app: &App, item: &Item, selected: bool, width: u16) -> Line<'static> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let detail = format!("   {} \u{b7} {}", item.title, item.meaning);
    let mut spans = vec![Span::styled(
        detail.clone(),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let width = width as usize;
    if detail.width() < width {
        spans.push(Span::styled(
            " ".repeat(width - detail.width()),
            Style::default().bg(bg),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use crate::tui::app::App;

    fn render_list(app: &mut App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_list_view(frame, app, area);
        })
    }

    #[test]
    fn list_shows_seed_items() {
        let mut app = test_app();
        let output = render_list(&mut app);
        assert!(output.contains("Sübhanallah"));
        assert!(output.contains("La ilahe illallah"));
        assert!(output.contains("33 / day"));
        assert!(output.contains("100 / day"));
        assert!(output.contains("Glory be to Allah"));
    }

    #[test]
    fn hit_map_covers_each_item_in_order() {
        let mut app = test_app();
        render_list(&mut app);
        assert_eq!(app.item_rows.len(), 4);
        assert_eq!(app.item_rows[0].2, 1);
        assert_eq!(app.item_rows[3].2, 4);
        // Rows tile without gaps, three per item.
        for window in app.item_rows.windows(2) {
            assert_eq!(window[0].1, window[1].0);
        }
        // The hit map drives mouse targeting.
        assert_eq!(app.item_at_row(app.item_rows[2].0), Some(3));
    }

    #[test]
    fn empty_archive_shows_placeholder() {
        let mut app = test_app();
        app.show_archive = true;
        let output = render_list(&mut app);
        assert!(output.contains("no archived items"));
        assert!(app.item_rows.is_empty());
    }

    #[test]
    fn header_names_the_visible_list() {
        let mut app = test_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            super::render_header(frame, &app, area);
        });
        assert!(output.contains("zikr"));
        assert!(output.contains("items (4)"));

        app.show_archive = true;
        let output = render_to_string(TERM_W, 2, |frame, area| {
            super::render_header(frame, &app, area);
        });
        assert!(output.contains("archive (0)"));
    }
}