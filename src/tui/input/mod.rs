mod counting;
mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::{App, Screen};

/// Route a key press to the active screen (or the overlay that owns it).
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }
    if app.form.is_some() {
        form::handle_form_key(app, key);
        return;
    }
    match app.screen {
        Screen::Counting(_) => counting::handle_counting_key(app, key),
        Screen::List => list::handle_list_key(app, key),
    }
}

/// Route a mouse event. Overlays are keyboard-driven, so pointer input is
/// ignored while one is up.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.form.is_some() || app.show_help {
        return;
    }
    match app.screen {
        Screen::Counting(_) => counting::handle_counting_mouse(app, mouse),
        Screen::List => list::handle_list_mouse(app, mouse),
    }
}
