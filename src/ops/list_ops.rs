//! Structural operations on the two item lists.
//!
//! Every operation is a pure function from the input list(s) to fresh
//! owned list(s); the caller swaps the result in atomically. Order is
//! significant: it is the display and iteration order. An id that does
//! not resolve is a silent no-op, the input comes back unchanged.

use crate::model::item::{Item, ItemDraft, ItemId};

// ---------------------------------------------------------------------------
// Creation and editing
// ---------------------------------------------------------------------------

/// The id the next added item receives: one past the highest id in the
/// list, or 1 for an empty list.
pub fn next_id(list: &[Item]) -> ItemId {
    list.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

/// Append a new item built from the draft, with a fresh id and today's
/// reset stamp.
pub fn add(list: &[Item], draft: ItemDraft, today: &str) -> Vec<Item> {
    let item = draft.into_item(next_id(list), today);
    let mut out = list.to_vec();
    out.push(item);
    out
}

/// Replace the element whose id matches `updated`. Other elements are
/// untouched; an unknown id leaves the list as it was.
pub fn update(list: &[Item], updated: Item) -> Vec<Item> {
    list.iter()
        .map(|item| {
            if item.id == updated.id {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Moving between lists
// ---------------------------------------------------------------------------

/// Move an item from the active list to the end of the archive.
pub fn archive(active: &[Item], archived: &[Item], id: ItemId) -> (Vec<Item>, Vec<Item>) {
    transfer(active, archived, id)
}

/// Move an item from the archive back to the end of the active list.
/// Restore appends; the item's old position is not recovered.
pub fn restore(active: &[Item], archived: &[Item], id: ItemId) -> (Vec<Item>, Vec<Item>) {
    let (archived, active) = transfer(archived, active, id);
    (active, archived)
}

fn transfer(from: &[Item], to: &[Item], id: ItemId) -> (Vec<Item>, Vec<Item>) {
    let Some(index) = from.iter().position(|item| item.id == id) else {
        return (from.to_vec(), to.to_vec());
    };
    let mut from_out = from.to_vec();
    let item = from_out.remove(index);
    let mut to_out = to.to_vec();
    to_out.push(item);
    (from_out, to_out)
}

/// Remove the item permanently. No tombstone is kept.
pub fn delete(list: &[Item], id: ItemId) -> Vec<Item> {
    list.iter().filter(|item| item.id != id).cloned().collect()
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Move the dragged item to the target item's current position: a true
/// move that shifts the in-between elements by one, not a swap. The
/// insertion index is the target's position before the dragged item is
/// taken out, so dragging downward lands just after the target and
/// dragging upward lands just before it.
pub fn reorder(list: &[Item], dragged_id: ItemId, target_id: ItemId) -> Vec<Item> {
    if dragged_id == target_id {
        return list.to_vec();
    }
    let dragged_index = list.iter().position(|item| item.id == dragged_id);
    let target_index = list.iter().position(|item| item.id == target_id);
    let (Some(dragged_index), Some(target_index)) = (dragged_index, target_index) else {
        return list.to_vec();
    };

    let mut out = list.to_vec();
    let dragged = out.remove(dragged_index);
    out.insert(target_index, dragged);
    out
}

/// The item after `current_id` in display order, wrapping past the end.
/// None when the list is empty or the id is unknown.
pub fn next_item(list: &[Item], current_id: ItemId) -> Option<&Item> {
    let index = list.iter().position(|item| item.id == current_id)?;
    list.get((index + 1) % list.len())
}
