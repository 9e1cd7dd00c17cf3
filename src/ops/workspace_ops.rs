//! Board-addressed edits on a whole workspace.
//!
//! These wrap [`board_ops`](super::board_ops) with a board lookup. Each returns
//! the next workspace; when nothing changed (unknown board or a no-op edit) the
//! returned workspace shares every board with the input, which
//! [`Workspace::same_boards`] detects.

use tracing::debug;

use crate::model::board::Board;
use crate::model::item::ItemDraft;
use crate::model::status::ItemStatus;
use crate::model::workspace::Workspace;
use crate::ops::board_ops::{self, StoreError};

pub fn rename_board(ws: &Workspace, board_id: &str, name: &str) -> Workspace {
    edit(ws, board_id, |b| board_ops::rename_board(b, name, &ws.labels))
}

pub fn add_group(ws: &Workspace, board_id: &str) -> Workspace {
    edit(ws, board_id, |b| Some(board_ops::add_group(b, &ws.labels, &ws.ids)))
}

pub fn add_group_named(ws: &Workspace, board_id: &str, name: &str) -> Workspace {
    edit(ws, board_id, |b| board_ops::add_group_named(b, name, &ws.ids))
}

pub fn rename_group(ws: &Workspace, board_id: &str, group_id: &str, name: &str) -> Workspace {
    edit(ws, board_id, |b| {
        board_ops::rename_group(b, group_id, name, &ws.labels)
    })
}

pub fn delete_group(ws: &Workspace, board_id: &str, group_id: &str) -> Workspace {
    edit(ws, board_id, |b| board_ops::delete_group(b, group_id))
}

pub fn add_item(ws: &Workspace, board_id: &str, group_id: &str) -> Workspace {
    edit(ws, board_id, |b| {
        board_ops::add_item(b, group_id, &ws.labels, &ws.ids)
    })
}

pub fn add_item_with(
    ws: &Workspace,
    board_id: &str,
    group_id: &str,
    draft: &ItemDraft,
) -> Workspace {
    edit(ws, board_id, |b| {
        board_ops::add_item_with(b, group_id, draft, &ws.ids)
    })
}

pub fn rename_item(
    ws: &Workspace,
    board_id: &str,
    group_id: &str,
    item_id: &str,
    name: &str,
) -> Workspace {
    edit(ws, board_id, |b| {
        board_ops::rename_item(b, group_id, item_id, name, &ws.labels)
    })
}

/// Set an item's status from its wire name. Anything other than `pending`,
/// `in-progress` or `done` is rejected and the workspace is left as it was.
pub fn set_item_status(
    ws: &Workspace,
    board_id: &str,
    group_id: &str,
    item_id: &str,
    status: &str,
) -> Result<Workspace, StoreError> {
    let status =
        ItemStatus::parse(status).ok_or_else(|| StoreError::InvalidStatus(status.to_string()))?;
    Ok(edit(ws, board_id, |b| {
        board_ops::set_item_status(b, group_id, item_id, status)
    }))
}

pub fn toggle_item_done(ws: &Workspace, board_id: &str, group_id: &str, item_id: &str) -> Workspace {
    edit(ws, board_id, |b| board_ops::toggle_item_done(b, group_id, item_id))
}

pub fn delete_item(ws: &Workspace, board_id: &str, group_id: &str, item_id: &str) -> Workspace {
    edit(ws, board_id, |b| board_ops::delete_item(b, group_id, item_id))
}

pub fn move_item(
    ws: &Workspace,
    board_id: &str,
    from_group: &str,
    from_index: usize,
    to_group: &str,
    to_index: usize,
) -> Workspace {
    edit(ws, board_id, |b| {
        board_ops::move_item(b, from_group, from_index, to_group, to_index)
    })
}

/// Look up a board and swap in `f`'s replacement. Missing board or `None`
/// from `f` yields a workspace sharing all boards with `ws`.
fn edit(ws: &Workspace, board_id: &str, f: impl FnOnce(&Board) -> Option<Board>) -> Workspace {
    let Some(board) = ws.board(board_id) else {
        debug!(board = board_id, "board not found");
        return ws.clone();
    };
    match f(board) {
        Some(next) => ws.with_board(next),
        None => ws.clone(),
    }
}
