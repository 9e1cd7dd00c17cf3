use serde::{Deserialize, Serialize};

use super::id::EntityId;

/// Job role shown on the team roster. Unrelated to the access role of a
/// logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    Admin,
    Developer,
    Designer,
    #[serde(rename = "Product Manager")]
    ProductManager,
}

impl TeamRole {
    pub fn label(self) -> &'static str {
        match self {
            TeamRole::Admin => "Admin",
            TeamRole::Developer => "Developer",
            TeamRole::Designer => "Designer",
            TeamRole::ProductManager => "Product Manager",
        }
    }

    /// Parse a role as typed on the command line: the label in any case, with
    /// `_` or `-` accepted in place of the space (`product-manager`).
    pub fn parse(s: &str) -> Option<TeamRole> {
        let wanted = s.trim().replace(['_', '-'], " ");
        [
            TeamRole::Admin,
            TeamRole::Developer,
            TeamRole::Designer,
            TeamRole::ProductManager,
        ]
        .into_iter()
        .find(|r| r.label().eq_ignore_ascii_case(&wanted))
    }
}

/// Availability shown next to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    #[default]
    Active,
    Offline,
    Away,
}

impl Presence {
    pub fn label(self) -> &'static str {
        match self {
            Presence::Active => "Active",
            Presence::Offline => "Offline",
            Presence::Away => "Away",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    pub role: TeamRole,
    pub presence: Presence,
}
