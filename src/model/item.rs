use serde::Serialize;

use super::id::EntityId;
use super::status::{ItemStatus, Priority};

/// A leaf entry: a phase task, a milestone task or a kanban card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub status: ItemStatus,
    /// Who the card is assigned to (kanban only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Free-form labels, in the order they were entered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Item {
    /// Create a pending item with no card details
    pub fn new(id: EntityId, name: String) -> Self {
        Item {
            id,
            name,
            status: ItemStatus::Pending,
            assignee: None,
            priority: None,
            tags: Vec::new(),
        }
    }
}

/// Fields collected by an "add task" form before the item exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub assignee: Option<String>,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        ItemDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set tags from a comma-separated string such as `"UI, Frontend,"`.
    pub fn with_tag_list(mut self, csv: &str) -> Self {
        self.tags = parse_tag_list(csv);
        self
    }
}

/// Split a comma-separated tag list, trimming each entry and dropping blanks.
pub fn parse_tag_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_list_trims_and_drops_blanks() {
        assert_eq!(parse_tag_list(" UI, Frontend ,, "), vec!["UI", "Frontend"]);
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ,").is_empty());
    }

    #[test]
    fn new_item_is_pending_without_details() {
        let item = Item::new(EntityId::new("T-001"), "Design login page".into());
        assert_eq!(item.status, ItemStatus::Pending);
        assert!(item.assignee.is_none());
        assert!(item.tags.is_empty());
    }
}
