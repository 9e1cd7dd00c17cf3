use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::io::config_io;
use crate::model::board::{Board, Group};
use crate::model::config::{AppConfig, BoardSeed, Labels};
use crate::model::feed::{Message, Notification};
use crate::model::id::{EntityId, IdGen, IdKind};
use crate::model::item::Item;
use crate::model::project::Project;
use crate::model::team::Member;
use crate::model::workspace::Workspace;
use crate::ops::board_ops::normalize_name;
use crate::ops::check::{CheckError, check_config};

/// Error type for loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("duplicate id {id} (used by {})", .locations.join(", "))]
    DuplicateId { id: String, locations: Vec<String> },
    #[error("id {0} is too large (generated numbers must stay below {max})", max = IdGen::MAX_SEEDED)]
    IdOutOfRange(String),
    #[error("{id}: minutes_ago = {minutes_ago} is out of range")]
    TimestampOutOfRange { id: String, minutes_ago: i64 },
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Read the config at `config_path`, or the built-in template when no path
/// is given.
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            config_io::read_config(path)
        }
        None => {
            debug!("no config file, using built-in template");
            config_io::default_config()
        }
    }
}

/// Load and build the project in one step.
pub fn load_project(config_path: Option<&Path>) -> Result<Project, ConfigError> {
    let config = load_config(config_path)?;
    let mut project = build_project(config, Utc::now())?;
    project.config_path = config_path.map(Path::to_path_buf);
    Ok(project)
}

/// Turn parsed config into live state. Seed IDs are kept; missing ones are
/// generated above the highest seeded number. Fails on duplicate IDs.
pub fn build_project(config: AppConfig, now: DateTime<Utc>) -> Result<Project, ConfigError> {
    let check = check_config(&config);
    if let Some(CheckError::DuplicateId { id, locations }) = check.errors.into_iter().next() {
        return Err(ConfigError::DuplicateId { id, locations });
    }

    let mut workspace = Workspace::new(config.labels.clone());
    observe_seed_ids(&config, &workspace.ids)?;

    for seed in &config.boards {
        let board = build_board(seed, &config.labels, &workspace.ids);
        workspace.insert_board(board);
    }

    let team = config
        .team
        .iter()
        .map(|m| Member {
            id: seed_id(m.id.as_deref(), IdKind::Member, &workspace.ids),
            name: m.name.trim().to_string(),
            role: m.role,
            presence: m.presence,
        })
        .collect();

    let notifications = config
        .notifications
        .iter()
        .map(|n| {
            Ok(Notification {
                id: EntityId::new(n.id.as_str()),
                text: n.text.clone(),
                at: seed_time(now, &n.id, n.minutes_ago)?,
                read: n.read,
            })
        })
        .collect::<Result<_, ConfigError>>()?;

    let messages = config
        .messages
        .iter()
        .map(|m| {
            Ok(Message {
                id: EntityId::new(m.id.as_str()),
                from: m.from.clone(),
                body: m.body.clone(),
                at: seed_time(now, &m.id, m.minutes_ago)?,
                read: m.read,
            })
        })
        .collect::<Result<_, ConfigError>>()?;

    debug!(
        boards = workspace.boards.len(),
        items = workspace.item_count(),
        next_id = workspace.ids.peek(),
        "workspace built"
    );

    Ok(Project {
        config_path: None,
        config,
        workspace,
        team,
        notifications,
        messages,
    })
}

/// Bump the generator past every ID already present in the seed data.
/// Boards share the namespace, so a board called `G-001` counts too.
fn observe_seed_ids(config: &AppConfig, ids: &IdGen) -> Result<(), ConfigError> {
    let observe = |id: &str| {
        if ids.observe(&EntityId::new(id)) {
            Ok(())
        } else {
            Err(ConfigError::IdOutOfRange(id.to_string()))
        }
    };
    for board in &config.boards {
        observe(board.id.as_str())?;
        for group in &board.groups {
            if let Some(id) = &group.id {
                observe(id.as_str())?;
            }
            for item in &group.items {
                if let Some(id) = &item.id {
                    observe(id.as_str())?;
                }
            }
        }
    }
    for member in &config.team {
        if let Some(id) = &member.id {
            observe(id.as_str())?;
        }
    }
    Ok(())
}

/// `minutes_ago` before `now`, or an error if that is outside chrono's range.
fn seed_time(now: DateTime<Utc>, id: &str, minutes_ago: i64) -> Result<DateTime<Utc>, ConfigError> {
    TimeDelta::try_minutes(minutes_ago)
        .and_then(|ago| now.checked_sub_signed(ago))
        .ok_or_else(|| ConfigError::TimestampOutOfRange {
            id: id.to_string(),
            minutes_ago,
        })
}

fn seed_id(id: Option<&str>, kind: IdKind, ids: &IdGen) -> EntityId {
    match id {
        Some(id) => EntityId::new(id),
        None => ids.next(kind),
    }
}

fn build_board(seed: &BoardSeed, labels: &Labels, ids: &IdGen) -> Board {
    let mut board = Board::new(
        EntityId::new(seed.id.as_str()),
        normalize_name(&seed.name, &labels.board),
    );
    board.groups = seed
        .groups
        .iter()
        .map(|g| {
            let mut group = Group::new(
                seed_id(g.id.as_deref(), IdKind::Group, ids),
                normalize_name(&g.name, &labels.group),
            );
            group.items = g
                .items
                .iter()
                .map(|i| {
                    let mut item = Item::new(
                        seed_id(i.id.as_deref(), IdKind::Item, ids),
                        normalize_name(&i.name, &labels.item),
                    );
                    item.status = i.status;
                    item.assignee = i.assignee.clone();
                    item.priority = i.priority;
                    item.tags = i.tags.clone();
                    Arc::new(item)
                })
                .collect();
            Arc::new(group)
        })
        .collect();
    board
}
