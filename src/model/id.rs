use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for a board, group, item, team member or feed entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which kind of entity an ID is generated for; picks the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Group,
    Item,
    Member,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Group => "G",
            IdKind::Item => "T",
            IdKind::Member => "M",
        }
    }

    const ALL: [IdKind; 3] = [IdKind::Group, IdKind::Item, IdKind::Member];
}

/// Process-wide ID source.
///
/// Clones share one counter, so every snapshot derived from the same
/// workspace draws from the same sequence and an ID is never issued twice,
/// even when two callers mutate different snapshots.
#[derive(Debug, Clone)]
pub struct IdGen {
    next: Arc<AtomicU64>,
}

impl Default for IdGen {
    fn default() -> Self {
        IdGen::new()
    }
}

impl IdGen {
    /// Largest number a pre-existing `G-`/`T-`/`M-` ID may carry
    pub const MAX_SEEDED: u64 = u64::MAX / 2;

    pub fn new() -> Self {
        IdGen {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Issue a fresh ID like `T-007`.
    pub fn next(&self, kind: IdKind) -> EntityId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        EntityId(format!("{}-{:03}", kind.prefix(), n))
    }

    /// The number the next issued ID will carry.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Make sure future IDs land above an ID that already exists (e.g. one
    /// loaded from seed data). IDs that don't use a generated prefix are ignored.
    ///
    /// Returns false, leaving the counter alone, when the number is above
    /// [`IdGen::MAX_SEEDED`]: there would be no room left to issue IDs past it.
    pub fn observe(&self, id: &EntityId) -> bool {
        match generated_number(id.as_str()) {
            Some(n) if n > Self::MAX_SEEDED => false,
            Some(n) => {
                self.next.fetch_max(n + 1, Ordering::Relaxed);
                true
            }
            None => true,
        }
    }
}

/// Extract `N` from an ID shaped like `<prefix>-N` for one of the generated prefixes.
fn generated_number(id: &str) -> Option<u64> {
    IdKind::ALL.iter().find_map(|kind| {
        id.strip_prefix(kind.prefix())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|num| num.parse::<u64>().ok())
    })
}
