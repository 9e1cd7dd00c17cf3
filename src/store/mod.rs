//! Snapshot store.
//!
//! The store holds the latest [`Snapshot`] and applies one [`Action`] at a
//! time. Each action that changes something produces a fresh snapshot (next
//! version, recomputed stats) and hands it to every subscriber before
//! `dispatch` returns. Snapshots are immutable and shared through `Arc`, so a
//! renderer can keep an old one around for as long as it likes.

pub mod action;
pub mod drag;

pub use action::{Action, apply};
pub use drag::{DragEnd, DropLocation};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::model::workspace::Workspace;
use crate::ops::board_ops::StoreError;
use crate::ops::stats::{WorkspaceStats, workspace_stats};

/// The full tree state after some number of mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Starts at 0; bumped by one for every action that changed the tree
    pub version: u64,
    pub workspace: Workspace,
    pub stats: WorkspaceStats,
}

impl Snapshot {
    fn new(version: u64, workspace: Workspace) -> Self {
        let stats = workspace_stats(&workspace);
        Snapshot {
            version,
            workspace,
            stats,
        }
    }
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<Snapshot>)>;

pub struct Store {
    current: Arc<Snapshot>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("version", &self.current.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    pub fn new(workspace: Workspace) -> Self {
        Store {
            current: Arc::new(Snapshot::new(0, workspace)),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The latest snapshot
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn version(&self) -> u64 {
        self.current.version
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&Arc<Snapshot>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply an action. Returns the snapshot now current: a new one if the
    /// action changed the tree, the previous one if it was a no-op. On error
    /// nothing changes and no listener runs.
    pub fn dispatch(&mut self, action: &Action) -> Result<Arc<Snapshot>, StoreError> {
        let next = match apply(&self.current.workspace, action) {
            Ok(ws) => ws,
            Err(e) => {
                warn!(action = action.name(), board = action.board(), error = %e, "action rejected");
                return Err(e);
            }
        };

        if next.same_boards(&self.current.workspace) {
            debug!(action = action.name(), board = action.board(), "no change");
            return Ok(self.snapshot());
        }

        let snapshot = Arc::new(Snapshot::new(self.current.version + 1, next));
        info!(
            action = action.name(),
            board = action.board(),
            version = snapshot.version,
            "applied"
        );
        self.current = Arc::clone(&snapshot);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
        Ok(snapshot)
    }
}
