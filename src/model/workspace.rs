use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

use super::board::Board;
use super::config::Labels;
use super::id::{EntityId, IdGen};

/// Every board a store owns, in display order, plus what new entities need:
/// the fallback labels and the shared ID source.
#[derive(Debug, Clone, Serialize)]
pub struct Workspace {
    pub boards: IndexMap<EntityId, Arc<Board>>,
    #[serde(skip)]
    pub labels: Arc<Labels>,
    #[serde(skip)]
    pub ids: IdGen,
}

impl Workspace {
    pub fn new(labels: Labels) -> Self {
        Workspace {
            boards: IndexMap::new(),
            labels: Arc::new(labels),
            ids: IdGen::new(),
        }
    }

    /// Add a board (used while building the workspace from seed data)
    pub fn insert_board(&mut self, board: Board) {
        self.boards.insert(board.id.clone(), Arc::new(board));
    }

    pub fn board(&self, board_id: &str) -> Option<&Arc<Board>> {
        self.boards.get(board_id)
    }

    /// Same workspace (labels and ID source shared) with one board replaced.
    /// Every other board keeps its `Arc`.
    pub fn with_board(&self, board: Board) -> Workspace {
        let mut boards = self.boards.clone();
        if let Some(slot) = boards.get_mut(board.id.as_str()) {
            *slot = Arc::new(board);
        }
        Workspace {
            boards,
            labels: Arc::clone(&self.labels),
            ids: self.ids.clone(),
        }
    }

    /// True when both workspaces hold the very same board allocations, i.e.
    /// nothing has been mutated between them.
    pub fn same_boards(&self, other: &Workspace) -> bool {
        self.boards.len() == other.boards.len()
            && self
                .boards
                .iter()
                .zip(other.boards.iter())
                .all(|((ka, a), (kb, b))| ka == kb && Arc::ptr_eq(a, b))
    }

    /// Whether any board, group or item anywhere carries this ID
    pub fn contains_id(&self, id: &str) -> bool {
        self.all_ids().any(|i| i == id)
    }

    /// Every board, group and item ID in display order
    pub fn all_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.boards.values().flat_map(|b| {
            std::iter::once(&b.id).chain(b.groups.iter().flat_map(|g| {
                std::iter::once(&g.id).chain(g.items.iter().map(|i| &i.id))
            }))
        })
    }

    pub fn item_count(&self) -> usize {
        self.boards.values().map(|b| b.item_count()).sum()
    }
}

impl PartialEq for Workspace {
    fn eq(&self, other: &Self) -> bool {
        self.boards == other.boards && self.labels == other.labels
    }
}

impl Eq for Workspace {}
