use crate::model::session::{Role, Session, User, View};

/// Error type for session transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("enter your name")]
    MissingName,
    #[error("unknown role: {0} (expected admin, project_manager or team_member)")]
    UnknownRole(String),
}

/// Start a session. The previous session value is not consulted: logging in
/// while logged in simply replaces the user.
pub fn login(name: &str, role: Role) -> Result<Session, SessionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SessionError::MissingName);
    }
    Ok(Session::Authenticated(User {
        name: name.to_string(),
        role,
    }))
}

/// Parse a role name as typed on the command line.
pub fn parse_role(s: &str) -> Result<Role, SessionError> {
    Role::parse(s).ok_or_else(|| SessionError::UnknownRole(s.to_string()))
}

pub fn logout() -> Session {
    Session::Anonymous
}

/// Roles allowed to open a view. `None` means any logged-in user.
pub fn allowed_roles(view: View) -> Option<&'static [Role]> {
    match view {
        View::Milestones => Some(&[Role::Admin, Role::ProjectManager]),
        View::Team => Some(&[Role::Admin]),
        View::Login | View::Dashboard | View::Kanban | View::Profile => None,
    }
}

/// Whether the session may open `view`. The login page is always reachable.
pub fn can_access(session: &Session, view: View) -> bool {
    if view == View::Login {
        return true;
    }
    let Some(user) = session.user() else {
        return false;
    };
    match allowed_roles(view) {
        None => true,
        Some(roles) => roles.contains(&user.role),
    }
}

/// Links shown in the navigation bar, in order. Anonymous sessions only get
/// the login link; logged-in sessions get every view they can open except
/// login itself.
pub fn navigation(session: &Session) -> Vec<View> {
    match session {
        Session::Anonymous => vec![View::Login],
        Session::Authenticated(_) => View::ALL
            .into_iter()
            .filter(|v| *v != View::Login && can_access(session, *v))
            .collect(),
    }
}
