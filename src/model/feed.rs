use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::EntityId;

/// Anything that shows up in a read/unread list on the profile page
pub trait FeedEntry: Clone {
    fn id(&self) -> &EntityId;
    fn at(&self) -> DateTime<Utc>;
    fn is_read(&self) -> bool;
    fn set_read(&mut self);
}

/// A system notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: EntityId,
    pub text: String,
    pub at: DateTime<Utc>,
    pub read: bool,
}

/// A direct message from another user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: EntityId,
    pub from: String,
    pub body: String,
    pub at: DateTime<Utc>,
    pub read: bool,
}

impl FeedEntry for Notification {
    fn id(&self) -> &EntityId {
        &self.id
    }
    fn at(&self) -> DateTime<Utc> {
        self.at
    }
    fn is_read(&self) -> bool {
        self.read
    }
    fn set_read(&mut self) {
        self.read = true;
    }
}

impl FeedEntry for Message {
    fn id(&self) -> &EntityId {
        &self.id
    }
    fn at(&self) -> DateTime<Utc> {
        self.at
    }
    fn is_read(&self) -> bool {
        self.read
    }
    fn set_read(&mut self) {
        self.read = true;
    }
}
