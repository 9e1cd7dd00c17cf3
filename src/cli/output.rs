use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::board::Board;
use crate::model::feed::{Message, Notification};
use crate::model::item::Item;
use crate::model::session::{Session, View};
use crate::model::team::Member;
use crate::ops::feed_ops;
use crate::ops::stats::{BoardStats, WorkspaceStats};
use crate::ops::team_ops;
use crate::store::Snapshot;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SnapshotJson<'a> {
    pub version: u64,
    pub boards: Vec<&'a Board>,
    pub stats: &'a WorkspaceStats,
}

#[derive(Serialize)]
pub struct NavJson<'a> {
    pub session: &'a Session,
    pub views: Vec<ViewJson>,
}

#[derive(Serialize)]
pub struct ViewJson {
    pub view: View,
    pub path: &'static str,
}

#[derive(Serialize)]
pub struct MemberJson<'a> {
    #[serde(flatten)]
    pub member: &'a Member,
    pub initials: String,
}

#[derive(Serialize)]
pub struct FeedJson<'a> {
    pub unread_notifications: usize,
    pub unread_messages: usize,
    pub notifications: &'a [Notification],
    pub messages: &'a [Message],
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// JSON view of a snapshot, optionally narrowed to one board
pub fn snapshot_to_json<'a>(snapshot: &'a Snapshot, board: Option<&str>) -> SnapshotJson<'a> {
    SnapshotJson {
        version: snapshot.version,
        boards: snapshot
            .workspace
            .boards
            .values()
            .filter(|b| board.is_none_or(|id| b.id == id))
            .map(|b| b.as_ref())
            .collect(),
        stats: &snapshot.stats,
    }
}

pub fn nav_to_json<'a>(session: &'a Session, views: &[View]) -> NavJson<'a> {
    NavJson {
        session,
        views: views
            .iter()
            .map(|&view| ViewJson {
                view,
                path: view.path(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One-line item summary: `[x] T-002 Write docs @Bob !high #UI`
pub fn format_item_line(item: &Item) -> String {
    let mut line = format!("[{}] {} {}", item.status.marker(), item.id, item.name);
    if let Some(assignee) = &item.assignee {
        line.push_str(&format!(" @{}", assignee));
    }
    if let Some(priority) = item.priority {
        line.push_str(&format!(" !{}", priority));
    }
    for tag in &item.tags {
        line.push_str(&format!(" #{}", tag));
    }
    line
}

/// A board with its groups and items, indented
pub fn format_board(board: &Board) -> Vec<String> {
    let mut lines = vec![format!("== {} ({}) ==", board.name, board.id)];
    for group in &board.groups {
        lines.push(format!("  {} ({}) [{}]", group.name, group.id, group.items.len()));
        for item in &group.items {
            lines.push(format!("    {}", format_item_line(item)));
        }
    }
    lines
}

/// Counts line for one board
pub fn format_board_stats(stats: &BoardStats) -> String {
    format!(
        "  {} ({})  {} pending, {} in progress, {} done  {}%",
        stats.name,
        stats.id,
        stats.counts.pending,
        stats.counts.in_progress,
        stats.counts.done,
        stats.completion
    )
}

pub fn format_stats(stats: &WorkspaceStats) -> Vec<String> {
    let mut lines: Vec<String> = stats.boards.iter().map(format_board_stats).collect();
    lines.push(format!(
        "  total: {} items, {}% done",
        stats.total, stats.completion
    ));
    lines
}

pub fn format_member(member: &Member) -> String {
    format!(
        "  [{}] {} ({})  {}  {}",
        team_ops::initials(&member.name),
        member.name,
        member.id,
        member.role.label(),
        member.presence.label()
    )
}

fn unread_marker(read: bool) -> char {
    if read { ' ' } else { '*' }
}

pub fn format_notification(n: &Notification, now: DateTime<Utc>) -> String {
    format!(
        "{} {}  {}  ({})",
        unread_marker(n.read),
        n.id,
        n.text,
        feed_ops::age_label(n.at, now)
    )
}

pub fn format_message(m: &Message, now: DateTime<Utc>) -> String {
    format!(
        "{} {}  {}: {}  ({})",
        unread_marker(m.read),
        m.id,
        m.from,
        m.body,
        feed_ops::age_label(m.at, now)
    )
}

/// Session line plus one line per reachable view
pub fn format_nav(session: &Session, views: &[View]) -> Vec<String> {
    let mut lines = vec![match session.user() {
        Some(user) => format!("{} ({})", user.name, user.role),
        None => "not logged in".to_string(),
    }];
    for view in views {
        lines.push(format!("  {:<12}{}", view.as_str(), view.path()));
    }
    lines
}
