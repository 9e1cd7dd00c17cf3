use serde::Serialize;
use std::sync::Arc;

use super::id::EntityId;
use super::item::Item;

/// A second-level container: a task group inside a phase, a milestone, or a
/// kanban column. Item order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: EntityId,
    pub name: String,
    pub items: Vec<Arc<Item>>,
}

impl Group {
    pub fn new(id: EntityId, name: String) -> Self {
        Group {
            id,
            name,
            items: Vec::new(),
        }
    }

    /// Position of an item in this group
    pub fn item_index(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&Arc<Item>> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Same group with a replacement item sequence
    pub fn with_items(&self, items: Vec<Arc<Item>>) -> Group {
        Group {
            id: self.id.clone(),
            name: self.name.clone(),
            items,
        }
    }
}

/// Root of a hierarchy: a phase or a kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub id: EntityId,
    pub name: String,
    pub groups: Vec<Arc<Group>>,
}

impl Board {
    pub fn new(id: EntityId, name: String) -> Self {
        Board {
            id,
            name,
            groups: Vec::new(),
        }
    }

    pub fn group_index(&self, group_id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id == group_id)
    }

    pub fn group(&self, group_id: &str) -> Option<&Arc<Group>> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Same board with a replacement group sequence
    pub fn with_groups(&self, groups: Vec<Arc<Group>>) -> Board {
        Board {
            id: self.id.clone(),
            name: self.name.clone(),
            groups,
        }
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Every item on the board with the group it lives in, in display order
    pub fn items(&self) -> impl Iterator<Item = (&Arc<Group>, &Arc<Item>)> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().map(move |i| (g, i)))
    }
}
