use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;

pub(super) fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.visible_items().len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => {
            app.cursor = app.visible_items().len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.show_archive {
                app.archive_or_restore_selected();
            } else {
                app.open_selected();
            }
        }
        KeyCode::Char('n') => app.start_add_form(),
        KeyCode::Char('e') => app.start_edit_form(),
        KeyCode::Char('a') => app.archive_or_restore_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Tab => app.toggle_archive_view(),
        KeyCode::Char('J') => app.move_selected(1),
        KeyCode::Char('K') => app.move_selected(-1),
        _ => {}
    }
}

/// Mouse input feeds both gesture channels at once, since both live on
/// the same rows. The press anchors a swipe and picks the row up.
/// Horizontal travel counts toward a swipe intent while vertical travel
/// reorders live; release resolves whichever actually happened, and a
/// plain click opens the item.
pub(super) fn handle_list_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(id) = app.item_at_row(mouse.row) else {
                app.pressed = None;
                return;
            };
            if let Some(index) = app.visible_items().iter().position(|i| i.id == id) {
                app.cursor = index;
            }
            app.pressed = Some(id);
            app.swipe.start(mouse.column as i32);
            if !app.show_archive {
                app.drag.drag_start(id);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.swipe.move_to(mouse.column as i32);
            if app.show_archive {
                return;
            }
            if let Some(target) = app.item_at_row(mouse.row)
                && let Some(reordered) = app.drag.drag_over(&app.items, target)
            {
                app.items = reordered;
                if let Some(held) = app.drag.held()
                    && let Some(index) = app.items.iter().position(|i| i.id == held)
                {
                    app.cursor = index;
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let moved = app.drag.moved();
            app.drag.drag_end();
            let intent = app.swipe.end();
            let Some(pressed) = app.pressed.take() else {
                return;
            };
            // Archive rows only select; restore stays on the keyboard.
            if app.show_archive {
                return;
            }
            match intent {
                Some(intent) => app.apply_swipe(intent, pressed),
                None if !moved && app.item_at_row(mouse.row) == Some(pressed) => {
                    app.open_item(pressed);
                }
                None => {}
            }
        }
        _ => {}
    }
}
