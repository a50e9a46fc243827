//! Daily reset boundary.
//!
//! Items carry a `last_reset` calendar-date stamp. Once per local midnight
//! (and once at startup) the active list is swept: any item whose stamp is
//! not today's date gets restamped. Live counts are not stored on items
//! (they are re-initialized every time an item is opened), so the stamp is
//! the only durable effect of a reset.

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::model::item::Item;

/// The calendar-date key items are stamped with ("YYYY-MM-DD").
pub fn today_string(date: NaiveDate) -> String {
    date.to_string()
}

/// Whether the item's stamp is stale for `today`.
///
/// The check is daily for every item regardless of its declared
/// `reset_period`, so weekly items are restamped by the same daily sweep.
// TODO: weekly items need a week-start comparison here once the intended
// weekly behavior is confirmed.
pub fn needs_reset(item: &Item, today: &str) -> bool {
    item.last_reset.as_deref() != Some(today)
}

/// Copy of the item with its stamp set to `today`; every other field is
/// left as-is.
pub fn apply_reset(item: &Item, today: &str) -> Item {
    let mut reset = item.clone();
    reset.last_reset = Some(today.to_string());
    reset
}

/// Restamp every stale item in the list.
pub fn sweep(items: &[Item], today: &str) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if needs_reset(item, today) {
                apply_reset(item, today)
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Time remaining until the next local midnight. Falls back to a flat day
/// if the local timestamp cannot be mapped (DST fold at midnight).
pub fn until_next_midnight(now: DateTime<Local>) -> Duration {
    let next = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|ndt| ndt.and_local_timezone(Local).earliest());
    match next {
        Some(midnight) => midnight - now,
        None => Duration::hours(24),
    }
}
