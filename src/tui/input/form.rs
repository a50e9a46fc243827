use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::reset;
use crate::tui::app::App;

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.form = None;
            return;
        }
        KeyCode::Enter => {
            let today = reset::today_string(Local::now().date_naive());
            app.submit_form(&today);
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => {
            if form.text_buffer().is_some() {
                form.cursor_left();
            } else {
                form.toggle();
            }
        }
        KeyCode::Right => {
            if form.text_buffer().is_some() {
                form.cursor_right();
            } else {
                form.toggle();
            }
        }
        KeyCode::Char(' ') if form.text_buffer().is_none() => form.toggle(),
        KeyCode::Char(c) => form.insert(c),
        KeyCode::Backspace => form.backspace(),
        _ => {}
    }
}
