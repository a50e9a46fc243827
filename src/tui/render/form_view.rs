use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::{Direction, ResetPeriod};
use crate::tui::app::{App, FORM_FIELDS, FormField, FormState};

use super::centered_rect;

/// Render the add/edit popup over the list screen.
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let popup = centered_rect(area, 46, (FORM_FIELDS.len() + 4) as u16);
    frame.render_widget(Clear, popup);

    let title = if form.editing.is_some() {
        " edit dhikr "
    } else {
        " new dhikr "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(app.theme.accent))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in FORM_FIELDS.iter().enumerate() {
        lines.push(field_line(app, form, *field, index == form.focus));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "tab field  space toggle  enter save  esc cancel",
        Style::default().fg(app.theme.dim),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(app: &App, form: &FormState, field: FormField, focused: bool) -> Line<'static> {
    let label = match field {
        FormField::Title => "title",
        FormField::DisplayText => "display text",
        FormField::Meaning => "meaning",
        FormField::Target => "target",
        FormField::Direction => "direction",
        FormField::Threshold => "vibrate within",
        FormField::Vibrate => "vibrate near end",
        FormField::Sound => "sound on complete",
        FormField::Period => "reset",
    };

    let value = match field {
        FormField::Title => text_value(&form.title, form, field, focused),
        FormField::DisplayText => text_value(&form.display_text, form, field, focused),
        FormField::Meaning => text_value(&form.meaning, form, field, focused),
        FormField::Target => text_value(&form.target, form, field, focused),
        FormField::Threshold => text_value(&form.threshold, form, field, focused),
        FormField::Direction => match form.direction {
            Direction::Up => "counting up".to_string(),
            Direction::Down => "counting down".to_string(),
        },
        FormField::Vibrate => checkbox(form.vibrate_near_end),
        FormField::Sound => checkbox(form.sound_on_complete),
        FormField::Period => match form.reset_period {
            ResetPeriod::Daily => "daily".to_string(),
            ResetPeriod::Weekly => "weekly".to_string(),
        },
    };

    let marker = if focused { "\u{25b8} " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text)
    };

    Line::from(vec![
        Span::styled(
            format!("{}{:<18}", marker, label),
            label_style,
        ),
        Span::styled(value, Style::default().fg(app.theme.accent)),
    ])
}

/// A text value with the cursor bar spliced in when the field is focused.
fn text_value(buffer: &str, form: &FormState, field: FormField, focused: bool) -> String {
    if !focused || form.field() != field {
        return buffer.to_string();
    }
    let graphemes: Vec<&str> = buffer.graphemes(true).collect();
    let at = form.cursor.min(graphemes.len());
    let mut out = String::new();
    out.extend(graphemes[..at].iter().copied());
    out.push('\u{258c}');
    out.extend(graphemes[at..].iter().copied());
    out
}

fn checkbox(on: bool) -> String {
    if on { "[x]".to_string() } else { "[ ]".to_string() }
}
