use serde::{Deserialize, Serialize};

/// Access role carried by a logged-in session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectManager,
    TeamMember,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProjectManager => "project_manager",
            Role::TeamMember => "team_member",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        [Role::Admin, Role::ProjectManager, Role::TeamMember]
            .into_iter()
            .find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

/// Who is using the dashboard. A value, not a global: login and logout
/// produce a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(u) => Some(u),
        }
    }
}

/// A page of the dashboard, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Dashboard,
    Milestones,
    Kanban,
    Team,
    Profile,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Login,
        View::Dashboard,
        View::Milestones,
        View::Kanban,
        View::Team,
        View::Profile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Login => "login",
            View::Dashboard => "dashboard",
            View::Milestones => "milestones",
            View::Kanban => "kanban",
            View::Team => "team",
            View::Profile => "profile",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Dashboard => "/",
            View::Milestones => "/milestones",
            View::Kanban => "/kanban",
            View::Team => "/team",
            View::Profile => "/profile",
        }
    }
}
