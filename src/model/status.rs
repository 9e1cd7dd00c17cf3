use serde::{Deserialize, Serialize};

/// Workflow status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Pending,
    InProgress,
    Done,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Pending, ItemStatus::InProgress, ItemStatus::Done];

    /// The wire name (`pending`, `in-progress`, `done`)
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Done => "done",
        }
    }

    /// Human-facing label, as shown in status pickers
    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Pending => "Pending",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Done => "Done",
        }
    }

    /// The character shown inside the checkbox `[ ]` in text output
    pub fn marker(self) -> char {
        match self {
            ItemStatus::Pending => ' ',
            ItemStatus::InProgress => '>',
            ItemStatus::Done => 'x',
        }
    }

    /// Parse a wire name. Anything outside the three known values is `None`.
    pub fn parse(s: &str) -> Option<ItemStatus> {
        ItemStatus::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kanban card priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a priority name, ignoring case (`High` and `high` are the same)
    pub fn parse(s: &str) -> Option<Priority> {
        [Priority::Low, Priority::Medium, Priority::High]
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_wire_names() {
        assert_eq!(ItemStatus::parse("pending"), Some(ItemStatus::Pending));
        assert_eq!(ItemStatus::parse("in-progress"), Some(ItemStatus::InProgress));
        assert_eq!(ItemStatus::parse("done"), Some(ItemStatus::Done));
        assert_eq!(ItemStatus::parse("archived"), None);
        assert_eq!(ItemStatus::parse("Done"), None);
        assert_eq!(ItemStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ItemStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn priority_parse_ignores_case() {
        assert_eq!(Priority::parse("High"), Some(Priority::High));
        assert_eq!(Priority::parse(" low "), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }
}
