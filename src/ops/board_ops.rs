//! Pure edits on a single board.
//!
//! Every function takes the current board by reference and returns the
//! replacement board, or `None` when the edit would change nothing (missing
//! ID, rename to the same name, a move onto itself). The input board is never
//! touched. Groups and items off the edited path keep their `Arc`, so callers
//! holding an older board still see exactly what they saw before.

use std::sync::Arc;

use tracing::debug;

use crate::model::board::{Board, Group};
use crate::model::config::Labels;
use crate::model::id::{IdGen, IdKind};
use crate::model::item::{Item, ItemDraft};
use crate::model::status::ItemStatus;

/// Error type for store operations. Only malformed input is an error;
/// references to missing boards, groups or items are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("invalid status: {0} (expected pending, in-progress or done)")]
    InvalidStatus(String),
    #[error("invalid priority: {0} (expected low, medium or high)")]
    InvalidPriority(String),
}

/// Trim a user-entered name, falling back to `default` when nothing is left.
pub fn normalize_name(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Board level
// ---------------------------------------------------------------------------

pub fn rename_board(board: &Board, name: &str, labels: &Labels) -> Option<Board> {
    let name = normalize_name(name, &labels.board);
    if name == board.name {
        return None;
    }
    Some(Board {
        id: board.id.clone(),
        name,
        groups: board.groups.clone(),
    })
}

// ---------------------------------------------------------------------------
// Group CRUD
// ---------------------------------------------------------------------------

/// Append an empty group carrying the default group label.
pub fn add_group(board: &Board, labels: &Labels, ids: &IdGen) -> Board {
    let group = Group::new(ids.next(IdKind::Group), labels.group.clone());
    debug!(board = %board.id, group = %group.id, "add group");
    let mut groups = board.groups.clone();
    groups.push(Arc::new(group));
    board.with_groups(groups)
}

/// Append an empty group with a user-supplied name. A blank name adds nothing.
pub fn add_group_named(board: &Board, name: &str, ids: &IdGen) -> Option<Board> {
    let name = name.trim();
    if name.is_empty() {
        debug!(board = %board.id, "add group: blank name ignored");
        return None;
    }
    let group = Group::new(ids.next(IdKind::Group), name.to_string());
    let mut groups = board.groups.clone();
    groups.push(Arc::new(group));
    Some(board.with_groups(groups))
}

pub fn rename_group(board: &Board, group_id: &str, name: &str, labels: &Labels) -> Option<Board> {
    let name = normalize_name(name, &labels.group);
    update_group(board, group_id, |group| {
        if group.name == name {
            return None;
        }
        Some(Group {
            id: group.id.clone(),
            name,
            items: group.items.clone(),
        })
    })
}

/// Remove a group together with every item it holds.
pub fn delete_group(board: &Board, group_id: &str) -> Option<Board> {
    let Some(idx) = board.group_index(group_id) else {
        debug!(board = %board.id, group = group_id, "delete group: not found");
        return None;
    };
    let mut groups = board.groups.clone();
    let removed = groups.remove(idx);
    debug!(board = %board.id, group = group_id, items = removed.items.len(), "delete group");
    Some(board.with_groups(groups))
}

// ---------------------------------------------------------------------------
// Item CRUD
// ---------------------------------------------------------------------------

/// Append a pending item carrying the default item label.
pub fn add_item(board: &Board, group_id: &str, labels: &Labels, ids: &IdGen) -> Option<Board> {
    update_group(board, group_id, |group| {
        let item = Item::new(ids.next(IdKind::Item), labels.item.clone());
        debug!(board = %board.id, group = group_id, item = %item.id, "add item");
        let mut items = group.items.clone();
        items.push(Arc::new(item));
        Some(group.with_items(items))
    })
}

/// Append a pending item built from a form. A blank name adds nothing.
pub fn add_item_with(
    board: &Board,
    group_id: &str,
    draft: &ItemDraft,
    ids: &IdGen,
) -> Option<Board> {
    let name = draft.name.trim();
    if name.is_empty() {
        debug!(board = %board.id, group = group_id, "add item: blank name ignored");
        return None;
    }
    update_group(board, group_id, |group| {
        let mut item = Item::new(ids.next(IdKind::Item), name.to_string());
        item.assignee = draft
            .assignee
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        item.priority = draft.priority;
        item.tags = draft
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let mut items = group.items.clone();
        items.push(Arc::new(item));
        Some(group.with_items(items))
    })
}

pub fn rename_item(
    board: &Board,
    group_id: &str,
    item_id: &str,
    name: &str,
    labels: &Labels,
) -> Option<Board> {
    let name = normalize_name(name, &labels.item);
    update_item(board, group_id, item_id, |item| {
        if item.name == name {
            return None;
        }
        Some(Item {
            name,
            ..item.clone()
        })
    })
}

pub fn set_item_status(
    board: &Board,
    group_id: &str,
    item_id: &str,
    status: ItemStatus,
) -> Option<Board> {
    update_item(board, group_id, item_id, |item| {
        if item.status == status {
            return None;
        }
        Some(Item {
            status,
            ..item.clone()
        })
    })
}

/// Checkbox toggle: done becomes pending, anything else becomes done.
pub fn toggle_item_done(board: &Board, group_id: &str, item_id: &str) -> Option<Board> {
    update_item(board, group_id, item_id, |item| {
        let status = match item.status {
            ItemStatus::Done => ItemStatus::Pending,
            ItemStatus::Pending | ItemStatus::InProgress => ItemStatus::Done,
        };
        Some(Item {
            status,
            ..item.clone()
        })
    })
}

pub fn delete_item(board: &Board, group_id: &str, item_id: &str) -> Option<Board> {
    update_group(board, group_id, |group| {
        let idx = group.item_index(item_id)?;
        let mut items = group.items.clone();
        items.remove(idx);
        Some(group.with_items(items))
    })
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// Take the item at `from_index` in `from_group` and insert it at `to_index`
/// in `to_group`. The destination index is clamped to the destination's
/// length (measured after the item left, for a move within one group).
/// The moved item keeps its `Arc`.
pub fn move_item(
    board: &Board,
    from_group: &str,
    from_index: usize,
    to_group: &str,
    to_index: usize,
) -> Option<Board> {
    if from_group == to_group && from_index == to_index {
        return None;
    }
    let (Some(src), Some(dst)) = (board.group_index(from_group), board.group_index(to_group)) else {
        debug!(board = %board.id, from_group, to_group, "move item: group not found");
        return None;
    };
    let source = &board.groups[src];
    if from_index >= source.items.len() {
        debug!(board = %board.id, from_group, from_index, "move item: no item at index");
        return None;
    }

    let mut groups = board.groups.clone();
    let mut source_items = source.items.clone();
    let moved = source_items.remove(from_index);

    if src == dst {
        let at = to_index.min(source_items.len());
        if at == from_index {
            return None;
        }
        source_items.insert(at, moved);
        groups[src] = Arc::new(source.with_items(source_items));
    } else {
        let dest = &board.groups[dst];
        let mut dest_items = dest.items.clone();
        let at = to_index.min(dest_items.len());
        dest_items.insert(at, moved);
        groups[src] = Arc::new(source.with_items(source_items));
        groups[dst] = Arc::new(dest.with_items(dest_items));
    }
    Some(board.with_groups(groups))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Rebuild `board` with one group replaced by `f`'s result. `None` from `f`
/// (or a missing group) means no change.
fn update_group(
    board: &Board,
    group_id: &str,
    f: impl FnOnce(&Group) -> Option<Group>,
) -> Option<Board> {
    let Some(idx) = board.group_index(group_id) else {
        debug!(board = %board.id, group = group_id, "group not found");
        return None;
    };
    let updated = f(&board.groups[idx])?;
    let mut groups = board.groups.clone();
    groups[idx] = Arc::new(updated);
    Some(board.with_groups(groups))
}

fn update_item(
    board: &Board,
    group_id: &str,
    item_id: &str,
    f: impl FnOnce(&Item) -> Option<Item>,
) -> Option<Board> {
    update_group(board, group_id, |group| {
        let Some(idx) = group.item_index(item_id) else {
            debug!(group = group_id, item = item_id, "item not found");
            return None;
        };
        let updated = f(&group.items[idx])?;
        let mut items = group.items.clone();
        items[idx] = Arc::new(updated);
        Some(group.with_items(items))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
