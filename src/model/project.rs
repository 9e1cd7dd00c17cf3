use std::path::PathBuf;

use super::config::AppConfig;
use super::feed::{Message, Notification};
use super::team::Member;
use super::workspace::Workspace;

/// Everything loaded from a config file (or the built-in template)
#[derive(Debug, Clone)]
pub struct Project {
    /// Where the config came from; `None` for the built-in template
    pub config_path: Option<PathBuf>,
    pub config: AppConfig,
    pub workspace: Workspace,
    pub team: Vec<Member>,
    pub notifications: Vec<Notification>,
    pub messages: Vec<Message>,
}
