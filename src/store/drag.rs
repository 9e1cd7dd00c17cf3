//! Turn a finished drag gesture into a store action.
//!
//! The gesture layer reports where a card was picked up and where (if
//! anywhere) it was dropped. Whether that amounts to a move is decided here;
//! the move itself is the pure `move_item` edit.

use serde::{Deserialize, Serialize};

use super::action::Action;

/// A slot in a group: which group, and the index within it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub group: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(group: impl Into<String>, index: usize) -> Self {
        DropLocation {
            group: group.into(),
            index,
        }
    }
}

/// Result of a drag gesture. `destination` is `None` when the card was
/// released outside every group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

impl DragEnd {
    /// The move this drop asks for, if any.
    pub fn to_action(&self, board: &str) -> Option<Action> {
        let dest = self.destination.as_ref()?;
        if *dest == self.source {
            return None;
        }
        Some(Action::MoveItem {
            board: board.to_string(),
            from_group: self.source.group.clone(),
            from_index: self.source.index,
            to_group: dest.group.clone(),
            to_index: dest.index,
        })
    }
}
