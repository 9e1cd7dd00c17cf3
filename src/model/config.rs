use serde::{Deserialize, Serialize};

use super::status::{ItemStatus, Priority};
use super::team::{Presence, TeamRole};

/// Configuration from phaseboard.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub boards: Vec<BoardSeed>,
    #[serde(default)]
    pub team: Vec<MemberSeed>,
    #[serde(default)]
    pub notifications: Vec<NotificationSeed>,
    #[serde(default)]
    pub messages: Vec<MessageSeed>,
}

/// Names given to entities when a rename is blank or an add carries no name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Default: see src/templates/phaseboard.toml
    #[serde(default = "default_board_label")]
    pub board: String,
    /// Default: see src/templates/phaseboard.toml
    #[serde(default = "default_group_label")]
    pub group: String,
    /// Default: see src/templates/phaseboard.toml
    #[serde(default = "default_item_label")]
    pub item: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            board: default_board_label(),
            group: default_group_label(),
            item: default_item_label(),
        }
    }
}

fn default_board_label() -> String {
    "Untitled Phase".to_string()
}

fn default_group_label() -> String {
    "Untitled Group".to_string()
}

fn default_item_label() -> String {
    "Untitled Task".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// A `tracing` filter directive such as `info` or `phaseboard=debug`.
    /// Overridden by `-v` and by the PHASEBOARD_LOG environment variable.
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<GroupSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSeed {
    /// Generated when absent
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_status")]
    pub status: ItemStatus,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_status() -> ItemStatus {
    ItemStatus::Pending
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub role: TeamRole,
    #[serde(default)]
    pub presence: Presence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSeed {
    pub id: String,
    pub text: String,
    /// How long before load time the notification arrived
    #[serde(default)]
    pub minutes_ago: i64,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSeed {
    pub id: String,
    pub from: String,
    pub body: String,
    #[serde(default)]
    pub minutes_ago: i64,
    #[serde(default)]
    pub read: bool,
}
