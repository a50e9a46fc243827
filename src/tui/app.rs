use std::io;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use unicode_segmentation::UnicodeSegmentation;

use crate::cli::Cli;
use crate::model::{Config, Direction, Item, ItemDraft, ItemId, ResetPeriod, seed_items};
use crate::ops::counter::CounterSession;
use crate::ops::gesture::{DragState, SwipeIntent, SwipeTracker};
use crate::ops::{list_ops, reset};

use super::feedback::Feedback;
use super::input;
use super::render;
use super::theme::Theme;

/// Which full screen is showing. The two are mutually exclusive by
/// construction: there is no way to be counting and listing at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Counting(CounterSession),
}

/// Fields of the add/edit form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    DisplayText,
    Meaning,
    Target,
    Direction,
    Threshold,
    Vibrate,
    Sound,
    Period,
}

pub const FORM_FIELDS: [FormField; 9] = [
    FormField::Title,
    FormField::DisplayText,
    FormField::Meaning,
    FormField::Target,
    FormField::Direction,
    FormField::Threshold,
    FormField::Vibrate,
    FormField::Sound,
    FormField::Period,
];

/// State of the add/edit form popup.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Some(id) while editing an existing item; None while adding.
    pub editing: Option<ItemId>,
    /// Index into `FORM_FIELDS`.
    pub focus: usize,
    /// Grapheme offset of the cursor within the focused text field.
    pub cursor: usize,
    pub title: String,
    pub display_text: String,
    pub meaning: String,
    pub target: String,
    pub threshold: String,
    pub direction: Direction,
    pub vibrate_near_end: bool,
    pub sound_on_complete: bool,
    pub reset_period: ResetPeriod,
}

impl FormState {
    pub fn for_add() -> Self {
        FormState {
            editing: None,
            focus: 0,
            cursor: 0,
            title: String::new(),
            display_text: String::new(),
            meaning: String::new(),
            target: "33".into(),
            threshold: "3".into(),
            direction: Direction::Up,
            vibrate_near_end: true,
            sound_on_complete: true,
            reset_period: ResetPeriod::Daily,
        }
    }

    pub fn for_edit(item: &Item) -> Self {
        let draft = ItemDraft::from_item(item);
        let cursor = draft.title.graphemes(true).count();
        FormState {
            editing: Some(item.id),
            focus: 0,
            cursor,
            title: draft.title,
            display_text: draft.display_text,
            meaning: draft.meaning,
            target: draft.target.map(|t| t.to_string()).unwrap_or_default(),
            threshold: draft
                .vibrate_threshold
                .map(|t| t.to_string())
                .unwrap_or_default(),
            direction: draft.direction,
            vibrate_near_end: draft.vibrate_near_end,
            sound_on_complete: draft.sound_on_complete,
            reset_period: draft.reset_period,
        }
    }

    pub fn field(&self) -> FormField {
        FORM_FIELDS[self.focus]
    }

    /// The focused field's text buffer, if it is a text field.
    pub fn text_buffer(&self) -> Option<&String> {
        match self.field() {
            FormField::Title => Some(&self.title),
            FormField::DisplayText => Some(&self.display_text),
            FormField::Meaning => Some(&self.meaning),
            FormField::Target => Some(&self.target),
            FormField::Threshold => Some(&self.threshold),
            _ => None,
        }
    }

    fn text_buffer_mut(&mut self) -> Option<&mut String> {
        match self.field() {
            FormField::Title => Some(&mut self.title),
            FormField::DisplayText => Some(&mut self.display_text),
            FormField::Meaning => Some(&mut self.meaning),
            FormField::Target => Some(&mut self.target),
            FormField::Threshold => Some(&mut self.threshold),
            _ => None,
        }
    }

    fn grapheme_count(&self) -> usize {
        self.text_buffer()
            .map(|buf| buf.graphemes(true).count())
            .unwrap_or(0)
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FORM_FIELDS.len();
        self.cursor = self.grapheme_count();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FORM_FIELDS.len() - 1) % FORM_FIELDS.len();
        self.cursor = self.grapheme_count();
    }

    /// Type a character into the focused text field. Numeric fields only
    /// accept digits.
    pub fn insert(&mut self, c: char) {
        let numeric = matches!(self.field(), FormField::Target | FormField::Threshold);
        if numeric && !c.is_ascii_digit() {
            return;
        }
        let cursor = self.cursor;
        let Some(buf) = self.text_buffer_mut() else {
            return;
        };
        let at = byte_index(buf, cursor);
        buf.insert(at, c);
        self.cursor = (cursor + 1).min(self.grapheme_count());
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let Some(buf) = self.text_buffer_mut() else {
            return;
        };
        let start = byte_index(buf, cursor - 1);
        let end = byte_index(buf, cursor);
        buf.replace_range(start..end, "");
        self.cursor = cursor - 1;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    /// Flip the focused toggle/choice field. No-op on text fields.
    pub fn toggle(&mut self) {
        match self.field() {
            FormField::Direction => {
                self.direction = match self.direction {
                    Direction::Up => Direction::Down,
                    Direction::Down => Direction::Up,
                };
            }
            FormField::Vibrate => self.vibrate_near_end = !self.vibrate_near_end,
            FormField::Sound => self.sound_on_complete = !self.sound_on_complete,
            FormField::Period => {
                self.reset_period = match self.reset_period {
                    ResetPeriod::Daily => ResetPeriod::Weekly,
                    ResetPeriod::Weekly => ResetPeriod::Daily,
                };
            }
            _ => {}
        }
    }

    /// The draft this form describes, or None while the form is not
    /// submittable (empty title).
    pub fn to_draft(&self) -> Option<ItemDraft> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(
            ItemDraft {
                title: self.title.trim().to_string(),
                display_text: self.display_text.trim().to_string(),
                meaning: self.meaning.trim().to_string(),
                target: self.target.trim().parse().ok(),
                direction: self.direction,
                vibrate_near_end: self.vibrate_near_end,
                sound_on_complete: self.sound_on_complete,
                reset_period: self.reset_period,
                vibrate_threshold: self.threshold.trim().parse().ok(),
            }
            .sanitized(),
        )
    }
}

/// Byte offset of the given grapheme index.
fn byte_index(s: &str, grapheme_index: usize) -> usize {
    s.grapheme_indices(true)
        .nth(grapheme_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Main application state.
pub struct App {
    /// The active, ordered item list.
    pub items: Vec<Item>,
    /// Archived items, in archive order.
    pub archived: Vec<Item>,
    pub screen: Screen,
    /// List screen shows the archive instead of the active list.
    pub show_archive: bool,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub form: Option<FormState>,
    pub show_help: bool,
    pub swipe: SwipeTracker,
    pub drag: DragState,
    /// Item under the initial mouse press, target of a resolved swipe.
    pub pressed: Option<ItemId>,
    /// Hit map filled during render: (first row, last row exclusive, id).
    pub item_rows: Vec<(u16, u16, ItemId)>,
    /// The single outstanding midnight check.
    pub next_check: DateTime<Local>,
    /// Near-end pulse expiry.
    pub flash_until: Option<Instant>,
    pub feedback: Feedback,
    pub should_quit: bool,
    pub theme: Theme,
    pub config: Config,
}

impl App {
    /// Build the app state: seed items swept for today, the midnight check
    /// armed exactly once.
    pub fn new(config: Config, muted: bool, show_archive: bool, now: DateTime<Local>) -> Self {
        let today = reset::today_string(now.date_naive());
        let items = reset::sweep(&seed_items(), &today);
        let theme = Theme::from_config(&config.ui);
        let feedback = Feedback::new(&config, muted);
        let swipe = SwipeTracker::new(config.swipe_distance);

        App {
            items,
            archived: Vec::new(),
            screen: Screen::List,
            show_archive,
            cursor: 0,
            scroll_offset: 0,
            form: None,
            show_help: false,
            swipe,
            drag: DragState::default(),
            pressed: None,
            item_rows: Vec::new(),
            next_check: now + reset::until_next_midnight(now),
            flash_until: None,
            feedback,
            should_quit: false,
            theme,
            config,
        }
    }

    // ── List screen queries ──────────────────────────────────────────

    /// The list the list screen is currently showing.
    pub fn visible_items(&self) -> &[Item] {
        if self.show_archive {
            &self.archived
        } else {
            &self.items
        }
    }

    pub fn selected(&self) -> Option<&Item> {
        self.visible_items().get(self.cursor)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Which item a terminal row falls on, per the last rendered frame.
    pub fn item_at_row(&self, row: u16) -> Option<ItemId> {
        self.item_rows
            .iter()
            .find(|(top, bottom, _)| row >= *top && row < *bottom)
            .map(|(_, _, id)| *id)
    }

    pub fn flash_active(&self) -> bool {
        self.flash_until.is_some_and(|until| Instant::now() < until)
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Advance time-driven state: expire the near-end pulse and, once the
    /// armed midnight passes, sweep the active list and re-arm for the
    /// following midnight.
    pub fn tick(&mut self, now: DateTime<Local>) {
        if self.flash_until.is_some_and(|until| Instant::now() >= until) {
            self.flash_until = None;
        }
        if now >= self.next_check {
            let today = reset::today_string(now.date_naive());
            self.items = reset::sweep(&self.items, &today);
            self.next_check = now + reset::until_next_midnight(now);
        }
    }

    // ── Screen transitions ───────────────────────────────────────────

    pub fn open_item(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter().find(|item| item.id == id) {
            self.screen = Screen::Counting(CounterSession::open(item));
        }
    }

    pub fn open_selected(&mut self) {
        if self.show_archive {
            return;
        }
        if let Some(id) = self.selected().map(|item| item.id) {
            self.open_item(id);
        }
    }

    pub fn close_counter(&mut self) {
        self.screen = Screen::List;
    }

    // ── Counting screen commands ─────────────────────────────────────

    /// One tap: step the live count and route the signals to the feedback
    /// sinks (each one gated per-item and per-config, all best-effort).
    pub fn counting_increment(&mut self) {
        let Screen::Counting(session) = &mut self.screen else {
            return;
        };
        let sound = session.sound_on_complete();
        let signals = session.increment();
        if signals.near_end {
            self.flash_until = self.feedback.pulse_deadline();
        }
        if signals.completed && sound {
            self.feedback.chime();
        }
    }

    pub fn counting_reset(&mut self) {
        if let Screen::Counting(session) = &mut self.screen {
            session.reset();
        }
    }

    /// Advance to the next item in list order, wrapping. Falls back to
    /// the list screen when the open item no longer resolves.
    pub fn counting_next(&mut self) {
        let Screen::Counting(session) = &self.screen else {
            return;
        };
        let next = list_ops::next_item(&self.items, session.item_id()).cloned();
        match next {
            Some(item) => self.screen = Screen::Counting(CounterSession::open(&item)),
            None => self.screen = Screen::List,
        }
    }

    /// Position of the open item within the active list, for the header.
    pub fn counting_position(&self) -> Option<(usize, usize)> {
        let Screen::Counting(session) = &self.screen else {
            return None;
        };
        let index = self
            .items
            .iter()
            .position(|item| item.id == session.item_id())?;
        Some((index + 1, self.items.len()))
    }

    // ── List screen commands ─────────────────────────────────────────

    pub fn start_add_form(&mut self) {
        if !self.show_archive {
            self.form = Some(FormState::for_add());
        }
    }

    pub fn start_edit_form(&mut self) {
        if self.show_archive {
            return;
        }
        if let Some(item) = self.selected() {
            self.form = Some(FormState::for_edit(item));
        }
    }

    /// Submit the open form. An unsubmittable form stays open.
    pub fn submit_form(&mut self, today: &str) {
        let Some(form) = self.form.take() else {
            return;
        };
        let Some(draft) = form.to_draft() else {
            self.form = Some(form);
            return;
        };
        match form.editing {
            None => {
                self.items = list_ops::add(&self.items, draft, today);
                self.cursor = self.items.len() - 1;
            }
            Some(id) => {
                let updated = self
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| draft.apply_to(item));
                if let Some(updated) = updated {
                    self.items = list_ops::update(&self.items, updated);
                }
            }
        }
    }

    /// Archive the selection (active view) or restore it (archive view).
    pub fn archive_or_restore_selected(&mut self) {
        let Some(id) = self.selected().map(|item| item.id) else {
            return;
        };
        if self.show_archive {
            let (active, archived) = list_ops::restore(&self.items, &self.archived, id);
            self.items = active;
            self.archived = archived;
        } else {
            let (active, archived) = list_ops::archive(&self.items, &self.archived, id);
            self.items = active;
            self.archived = archived;
        }
        self.clamp_cursor();
    }

    /// Delete the selection permanently (active view only).
    pub fn delete_selected(&mut self) {
        if self.show_archive {
            return;
        }
        if let Some(id) = self.selected().map(|item| item.id) {
            self.items = list_ops::delete(&self.items, id);
            self.clamp_cursor();
        }
    }

    /// Apply a resolved swipe to the item it started on.
    pub fn apply_swipe(&mut self, intent: SwipeIntent, id: ItemId) {
        match intent {
            SwipeIntent::Delete => {
                self.items = list_ops::delete(&self.items, id);
            }
            SwipeIntent::Archive => {
                let (active, archived) = list_ops::archive(&self.items, &self.archived, id);
                self.items = active;
                self.archived = archived;
            }
        }
        self.clamp_cursor();
    }

    /// Keyboard reorder: move the selected item one slot up or down.
    pub fn move_selected(&mut self, delta: isize) {
        if self.show_archive {
            return;
        }
        let Some(current) = self.items.get(self.cursor) else {
            return;
        };
        let current_id = current.id;
        let target = self.cursor as isize + delta;
        if target < 0 || target as usize >= self.items.len() {
            return;
        }
        let target_id = self.items[target as usize].id;
        self.items = list_ops::reorder(&self.items, current_id, target_id);
        self.cursor = target as usize;
    }

    pub fn toggle_archive_view(&mut self) {
        self.show_archive = !self.show_archive;
        self.cursor = 0;
        self.scroll_offset = 0;
    }
}

/// Run the TUI application.
pub fn run(config: Config, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, cli.muted, cli.archive, Local::now());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Local::now());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_app() -> App {
        let now = Local.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap();
        App::new(Config::default(), true, false, now)
    }

    #[test]
    fn new_app_sweeps_seed_items_for_today() {
        let app = test_app();
        assert!(
            app.items
                .iter()
                .all(|item| item.last_reset.as_deref() == Some("2026-08-06"))
        );
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn midnight_tick_sweeps_and_rearms_once() {
        let mut app = test_app();
        let before = app.next_check;

        // Not midnight yet: nothing moves.
        app.tick(Local.with_ymd_and_hms(2026, 8, 6, 23, 0, 0).unwrap());
        assert_eq!(app.next_check, before);
        assert!(
            app.items
                .iter()
                .all(|item| item.last_reset.as_deref() == Some("2026-08-06"))
        );

        // Past midnight: stamps roll to the new day and the check re-arms
        // for the following midnight.
        let after_midnight = Local.with_ymd_and_hms(2026, 8, 7, 0, 0, 30).unwrap();
        app.tick(after_midnight);
        assert!(
            app.items
                .iter()
                .all(|item| item.last_reset.as_deref() == Some("2026-08-07"))
        );
        assert!(app.next_check > after_midnight);
        assert_eq!(
            app.next_check,
            after_midnight + reset::until_next_midnight(after_midnight)
        );
    }

    #[test]
    fn open_count_and_navigate_back() {
        let mut app = test_app();
        app.cursor = 1;
        app.open_selected();
        let Screen::Counting(session) = &app.screen else {
            panic!("expected counting screen");
        };
        assert_eq!(session.item_id(), 2);

        app.counting_increment();
        let Screen::Counting(session) = &app.screen else {
            unreachable!();
        };
        assert_eq!(session.current_value(), 1);

        app.close_counter();
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn counting_next_wraps_in_list_order() {
        let mut app = test_app();
        app.cursor = 3;
        app.open_selected();
        app.counting_next();
        let Screen::Counting(session) = &app.screen else {
            panic!("expected counting screen");
        };
        assert_eq!(session.item_id(), 1, "wraps past the end");
        assert_eq!(session.current_value(), 0, "fresh session");
    }

    #[test]
    fn submit_add_form_appends_item() {
        let mut app = test_app();
        app.start_add_form();
        {
            let form = app.form.as_mut().unwrap();
            for c in "Estagfirullah".chars() {
                form.insert(c);
            }
        }
        app.submit_form("2026-08-06");
        assert!(app.form.is_none());
        assert_eq!(app.items.len(), 5);
        let added = app.items.last().unwrap();
        assert_eq!(added.id, 5);
        assert_eq!(added.title, "Estagfirullah");
        assert_eq!(added.target, Some(33));
        assert_eq!(added.last_reset.as_deref(), Some("2026-08-06"));
    }

    #[test]
    fn empty_title_keeps_form_open() {
        let mut app = test_app();
        app.start_add_form();
        app.submit_form("2026-08-06");
        assert!(app.form.is_some());
        assert_eq!(app.items.len(), 4);
    }

    #[test]
    fn edit_form_preserves_id_and_stamp() {
        let mut app = test_app();
        app.cursor = 0;
        app.start_edit_form();
        {
            let form = app.form.as_mut().unwrap();
            assert_eq!(form.editing, Some(1));
            // Retype the target as 11.
            form.focus = 3;
            form.target.clear();
            form.cursor = 0;
            form.insert('1');
            form.insert('1');
        }
        app.submit_form("2026-08-07");
        let edited = &app.items[0];
        assert_eq!(edited.id, 1);
        assert_eq!(edited.target, Some(11));
        assert_eq!(edited.last_reset.as_deref(), Some("2026-08-06"));
    }

    #[test]
    fn archive_restore_cycle_via_commands() {
        let mut app = test_app();
        app.cursor = 1;
        app.archive_or_restore_selected();
        assert_eq!(app.items.len(), 3);
        assert_eq!(app.archived.len(), 1);
        assert_eq!(app.archived[0].id, 2);

        app.toggle_archive_view();
        app.archive_or_restore_selected();
        assert_eq!(app.items.len(), 4);
        assert!(app.archived.is_empty());
        // Restore appends at the end.
        assert_eq!(app.items.last().unwrap().id, 2);
    }

    #[test]
    fn swipe_intents_mutate_the_active_list() {
        let mut app = test_app();
        app.apply_swipe(SwipeIntent::Archive, 1);
        assert_eq!(app.archived.len(), 1);
        app.apply_swipe(SwipeIntent::Delete, 3);
        assert_eq!(
            app.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(app.archived.len(), 1);
    }

    #[test]
    fn keyboard_reorder_moves_one_slot() {
        let mut app = test_app();
        app.cursor = 0;
        app.move_selected(1);
        assert_eq!(
            app.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 1, 3, 4]
        );
        assert_eq!(app.cursor, 1);

        app.move_selected(-1);
        assert_eq!(
            app.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn form_grapheme_editing() {
        let mut form = FormState::for_add();
        for c in "سُبْح".chars() {
            form.insert(c);
        }
        let typed = form.title.clone();
        form.backspace();
        assert!(typed.starts_with(&form.title));
        assert!(form.title.len() < typed.len());
    }
}
