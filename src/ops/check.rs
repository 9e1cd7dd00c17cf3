use indexmap::IndexMap;
use serde::Serialize;

use crate::model::config::{AppConfig, BoardSeed};

/// Structured result from `pb check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (the config cannot be loaded until it is fixed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// The same ID is used by more than one board, group, item or member
    #[serde(rename = "duplicate_id")]
    DuplicateId { id: String, locations: Vec<String> },
}

/// A validation warning (loads fine, but probably not what was meant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// A name that is empty after trimming; the default label will be used
    #[serde(rename = "blank_name")]
    BlankName { location: String },
    /// A board with no groups to put items in
    #[serde(rename = "empty_board")]
    EmptyBoard { board_id: String },
    /// The same tag appears twice on one item
    #[serde(rename = "repeated_tag")]
    RepeatedTag { location: String, tag: String },
}

// ---------------------------------------------------------------------------
// Main check entry point
// ---------------------------------------------------------------------------

/// Validate seed data from a config file.
///
/// Checks performed:
/// 1. No ID is used twice anywhere (boards, groups, items, team members)
/// 2. Warnings for blank names, boards without groups, repeated tags
pub fn check_config(config: &AppConfig) -> CheckResult {
    let mut result = CheckResult::default();
    let mut seen: IndexMap<String, Vec<String>> = IndexMap::new();

    for board in &config.boards {
        check_board(board, &mut seen, &mut result);
    }

    for member in &config.team {
        let location = format!("team member {}", member.name);
        if let Some(id) = &member.id {
            seen.entry(id.clone()).or_default().push(location.clone());
        }
        if member.name.trim().is_empty() {
            result.warnings.push(CheckWarning::BlankName { location });
        }
    }

    for (id, locations) in seen {
        if locations.len() > 1 {
            result
                .errors
                .push(CheckError::DuplicateId { id, locations });
        }
    }

    result.valid = result.errors.is_empty();
    result
}

fn check_board(
    board: &BoardSeed,
    seen: &mut IndexMap<String, Vec<String>>,
    result: &mut CheckResult,
) {
    let board_loc = format!("board {}", board.id);
    seen.entry(board.id.clone())
        .or_default()
        .push(board_loc.clone());
    if board.name.trim().is_empty() {
        result.warnings.push(CheckWarning::BlankName {
            location: board_loc.clone(),
        });
    }
    if board.groups.is_empty() {
        result.warnings.push(CheckWarning::EmptyBoard {
            board_id: board.id.clone(),
        });
    }

    for (gi, group) in board.groups.iter().enumerate() {
        let group_loc = match &group.id {
            Some(id) => format!("{} / group {}", board_loc, id),
            None => format!("{} / group #{}", board_loc, gi + 1),
        };
        if let Some(id) = &group.id {
            seen.entry(id.clone()).or_default().push(group_loc.clone());
        }
        if group.name.trim().is_empty() {
            result.warnings.push(CheckWarning::BlankName {
                location: group_loc.clone(),
            });
        }

        for (ii, item) in group.items.iter().enumerate() {
            let item_loc = match &item.id {
                Some(id) => format!("{} / item {}", group_loc, id),
                None => format!("{} / item #{}", group_loc, ii + 1),
            };
            if let Some(id) = &item.id {
                seen.entry(id.clone()).or_default().push(item_loc.clone());
            }
            if item.name.trim().is_empty() {
                result.warnings.push(CheckWarning::BlankName {
                    location: item_loc.clone(),
                });
            }
            let mut tags_seen: Vec<&str> = Vec::new();
            for tag in &item.tags {
                let tag = tag.trim();
                if tags_seen.contains(&tag) {
                    result.warnings.push(CheckWarning::RepeatedTag {
                        location: item_loc.clone(),
                        tag: tag.to_string(),
                    });
                } else {
                    tags_seen.push(tag);
                }
            }
        }
    }
}
