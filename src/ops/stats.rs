use serde::Serialize;

use crate::model::board::Board;
use crate::model::id::EntityId;
use crate::model::status::ItemStatus;
use crate::model::workspace::Workspace;

/// Item counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.done
    }

    pub fn get(&self, status: ItemStatus) -> usize {
        match status {
            ItemStatus::Pending => self.pending,
            ItemStatus::InProgress => self.in_progress,
            ItemStatus::Done => self.done,
        }
    }

    /// Share of done items as a whole percentage (0 for an empty set)
    pub fn completion(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.done * 100 / total) as u8
    }

    fn add(&mut self, status: ItemStatus) {
        match status {
            ItemStatus::Pending => self.pending += 1,
            ItemStatus::InProgress => self.in_progress += 1,
            ItemStatus::Done => self.done += 1,
        }
    }

    fn merge(&mut self, other: &StatusCounts) {
        self.pending += other.pending;
        self.in_progress += other.in_progress;
        self.done += other.done;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    pub id: EntityId,
    pub name: String,
    pub items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub id: EntityId,
    pub name: String,
    pub total: usize,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub completion: u8,
    pub groups: Vec<GroupStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceStats {
    pub total: usize,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub completion: u8,
    pub boards: Vec<BoardStats>,
}

pub fn board_stats(board: &Board) -> BoardStats {
    let mut counts = StatusCounts::default();
    for (_, item) in board.items() {
        counts.add(item.status);
    }
    BoardStats {
        id: board.id.clone(),
        name: board.name.clone(),
        total: counts.total(),
        counts,
        completion: counts.completion(),
        groups: board
            .groups
            .iter()
            .map(|g| GroupStats {
                id: g.id.clone(),
                name: g.name.clone(),
                items: g.items.len(),
            })
            .collect(),
    }
}

pub fn workspace_stats(ws: &Workspace) -> WorkspaceStats {
    let boards: Vec<BoardStats> = ws.boards.values().map(|b| board_stats(b)).collect();
    let mut counts = StatusCounts::default();
    for b in &boards {
        counts.merge(&b.counts);
    }
    WorkspaceStats {
        total: counts.total(),
        counts,
        completion: counts.completion(),
        boards,
    }
}
