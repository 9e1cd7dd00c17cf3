use serde::{Deserialize, Serialize};

use crate::model::item::ItemDraft;
use crate::model::status::Priority;
use crate::model::workspace::Workspace;
use crate::ops::board_ops::StoreError;
use crate::ops::workspace_ops;

/// One user intent against the store. Deserializes from JSON such as
/// `{"op": "move_item", "board": "kanban", "from_group": "todo", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    RenameBoard {
        board: String,
        name: String,
    },
    /// Without a name the group gets the default label; with a blank name
    /// nothing is added.
    AddGroup {
        board: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    RenameGroup {
        board: String,
        group: String,
        name: String,
    },
    DeleteGroup {
        board: String,
        group: String,
    },
    /// Without a name the item gets the default label; with a blank name
    /// nothing is added.
    AddItem {
        board: String,
        group: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assignee: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        priority: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
    },
    RenameItem {
        board: String,
        group: String,
        item: String,
        name: String,
    },
    /// `status` is kept as text so unknown values reach the store and are
    /// rejected there with [`StoreError::InvalidStatus`].
    SetItemStatus {
        board: String,
        group: String,
        item: String,
        status: String,
    },
    ToggleItemDone {
        board: String,
        group: String,
        item: String,
    },
    DeleteItem {
        board: String,
        group: String,
        item: String,
    },
    MoveItem {
        board: String,
        from_group: String,
        from_index: usize,
        to_group: String,
        to_index: usize,
    },
}

impl Action {
    /// The board this action targets
    pub fn board(&self) -> &str {
        match self {
            Action::RenameBoard { board, .. }
            | Action::AddGroup { board, .. }
            | Action::RenameGroup { board, .. }
            | Action::DeleteGroup { board, .. }
            | Action::AddItem { board, .. }
            | Action::RenameItem { board, .. }
            | Action::SetItemStatus { board, .. }
            | Action::ToggleItemDone { board, .. }
            | Action::DeleteItem { board, .. }
            | Action::MoveItem { board, .. } => board,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::RenameBoard { .. } => "rename_board",
            Action::AddGroup { .. } => "add_group",
            Action::RenameGroup { .. } => "rename_group",
            Action::DeleteGroup { .. } => "delete_group",
            Action::AddItem { .. } => "add_item",
            Action::RenameItem { .. } => "rename_item",
            Action::SetItemStatus { .. } => "set_item_status",
            Action::ToggleItemDone { .. } => "toggle_item_done",
            Action::DeleteItem { .. } => "delete_item",
            Action::MoveItem { .. } => "move_item",
        }
    }
}

/// Compute the workspace that results from `action`. Pure: `ws` is left as is.
pub fn apply(ws: &Workspace, action: &Action) -> Result<Workspace, StoreError> {
    let next = match action {
        Action::RenameBoard { board, name } => workspace_ops::rename_board(ws, board, name),
        Action::AddGroup { board, name: None } => workspace_ops::add_group(ws, board),
        Action::AddGroup {
            board,
            name: Some(name),
        } => workspace_ops::add_group_named(ws, board, name),
        Action::RenameGroup { board, group, name } => {
            workspace_ops::rename_group(ws, board, group, name)
        }
        Action::DeleteGroup { board, group } => workspace_ops::delete_group(ws, board, group),
        Action::AddItem {
            board,
            group,
            name,
            assignee,
            priority,
            tags,
        } => {
            let priority = priority
                .as_deref()
                .map(|p| Priority::parse(p).ok_or_else(|| StoreError::InvalidPriority(p.to_string())))
                .transpose()?;
            match name {
                None if assignee.is_none() && priority.is_none() && tags.is_empty() => {
                    workspace_ops::add_item(ws, board, group)
                }
                _ => {
                    let draft = ItemDraft {
                        name: name.clone().unwrap_or_else(|| ws.labels.item.clone()),
                        assignee: assignee.clone(),
                        priority,
                        tags: tags.clone(),
                    };
                    workspace_ops::add_item_with(ws, board, group, &draft)
                }
            }
        }
        Action::RenameItem {
            board,
            group,
            item,
            name,
        } => workspace_ops::rename_item(ws, board, group, item, name),
        Action::SetItemStatus {
            board,
            group,
            item,
            status,
        } => workspace_ops::set_item_status(ws, board, group, item, status)?,
        Action::ToggleItemDone { board, group, item } => {
            workspace_ops::toggle_item_done(ws, board, group, item)
        }
        Action::DeleteItem { board, group, item } => {
            workspace_ops::delete_item(ws, board, group, item)
        }
        Action::MoveItem {
            board,
            from_group,
            from_index,
            to_group,
            to_index,
        } => workspace_ops::move_item(ws, board, from_group, *from_index, to_group, *to_index),
    };
    Ok(next)
}
