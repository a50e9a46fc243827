use serde::{Deserialize, Serialize};

/// Identifier for an item, unique within each list it lives in.
pub type ItemId = u64;

/// Which way the live count moves while counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Count from the start value up toward the target.
    Up,
    /// Count from the target down toward zero.
    Down,
}

/// How often the item's reset marker rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetPeriod {
    Daily,
    Weekly,
}

/// A repeatable counting task.
///
/// Items live in exactly one of two ordered lists at a time: the active
/// list or the archive. The live count itself is not stored here; it
/// exists only inside a `CounterSession` while the item is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Latin name, e.g. "Sübhanallah".
    pub title: String,
    /// Text rendered large on the counting screen (usually Arabic).
    pub display_text: String,
    /// One-line translation shown under the title.
    pub meaning: String,
    /// Completion target; positive when present.
    #[serde(default)]
    pub target: Option<i64>,
    /// Where an up-counting session starts (down-counting starts at target).
    #[serde(default)]
    pub start_value: i64,
    pub direction: Direction,
    pub vibrate_near_end: bool,
    pub sound_on_complete: bool,
    pub reset_period: ResetPeriod,
    /// Remaining-count distance at which near-end feedback starts; >= 0
    /// when present, treated as 3 when absent.
    #[serde(default)]
    pub vibrate_threshold: Option<i64>,
    /// Calendar date ("YYYY-MM-DD") of the last reset stamp.
    #[serde(default)]
    pub last_reset: Option<String>,
}

/// Form output for creating or editing an item. Has no id; the list op
/// assigns one on add, and edit keeps the id of the item being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub display_text: String,
    pub meaning: String,
    pub target: Option<i64>,
    pub direction: Direction,
    pub vibrate_near_end: bool,
    pub sound_on_complete: bool,
    pub reset_period: ResetPeriod,
    pub vibrate_threshold: Option<i64>,
}

impl ItemDraft {
    /// Sanitize raw form values: a non-positive target and a negative
    /// threshold are treated as absent, and empty display/meaning fields
    /// fall back to the title.
    pub fn sanitized(mut self) -> Self {
        self.target = self.target.filter(|t| *t > 0);
        self.vibrate_threshold = self.vibrate_threshold.filter(|t| *t >= 0);
        if self.display_text.trim().is_empty() {
            self.display_text = self.title.clone();
        }
        if self.meaning.trim().is_empty() {
            self.meaning = self.title.clone();
        }
        self
    }

    /// Build the item this draft describes. Down-counting items start at
    /// their target; up-counting items start at zero.
    pub fn into_item(self, id: ItemId, today: &str) -> Item {
        let draft = self.sanitized();
        let start_value = match draft.direction {
            Direction::Up => 0,
            Direction::Down => draft.target.unwrap_or(0),
        };
        Item {
            id,
            title: draft.title,
            display_text: draft.display_text,
            meaning: draft.meaning,
            target: draft.target,
            start_value,
            direction: draft.direction,
            vibrate_near_end: draft.vibrate_near_end,
            sound_on_complete: draft.sound_on_complete,
            reset_period: draft.reset_period,
            vibrate_threshold: draft.vibrate_threshold,
            last_reset: Some(today.to_string()),
        }
    }

    /// Apply this draft to an existing item: the edit path. Keeps the id
    /// and the reset stamp, recomputes the start value.
    pub fn apply_to(self, item: &Item) -> Item {
        let draft = self.sanitized();
        let start_value = match draft.direction {
            Direction::Up => 0,
            Direction::Down => draft.target.unwrap_or(0),
        };
        Item {
            id: item.id,
            title: draft.title,
            display_text: draft.display_text,
            meaning: draft.meaning,
            target: draft.target,
            start_value,
            direction: draft.direction,
            vibrate_near_end: draft.vibrate_near_end,
            sound_on_complete: draft.sound_on_complete,
            reset_period: draft.reset_period,
            vibrate_threshold: draft.vibrate_threshold,
            last_reset: item.last_reset.clone(),
        }
    }

    /// A draft prefilled from an existing item, for the edit form.
    pub fn from_item(item: &Item) -> Self {
        ItemDraft {
            title: item.title.clone(),
            display_text: item.display_text.clone(),
            meaning: item.meaning.clone(),
            target: item.target,
            direction: item.direction,
            vibrate_near_end: item.vibrate_near_end,
            sound_on_complete: item.sound_on_complete,
            reset_period: item.reset_period,
            vibrate_threshold: item.vibrate_threshold,
        }
    }
}

impl Default for ItemDraft {
    fn default() -> Self {
        ItemDraft {
            title: String::new(),
            display_text: String::new(),
            meaning: String::new(),
            target: Some(33),
            direction: Direction::Up,
            vibrate_near_end: true,
            sound_on_complete: true,
            reset_period: ResetPeriod::Daily,
            vibrate_threshold: Some(3),
        }
    }
}
