use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;

pub(super) fn handle_counting_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.counting_increment(),
        KeyCode::Char('r') => app.counting_reset(),
        KeyCode::Char('n') => app.counting_next(),
        KeyCode::Esc | KeyCode::Char('b') => app.close_counter(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

/// The whole screen is the tap surface. A completed session ignores the
/// taps on its own.
pub(super) fn handle_counting_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.counting_increment();
    }
}
