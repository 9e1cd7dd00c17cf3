use chrono::{DateTime, Utc};

use crate::model::feed::FeedEntry;

/// Mark one entry read. `None` if the ID is unknown or it was already read.
pub fn mark_read<T: FeedEntry>(entries: &[T], id: &str) -> Option<Vec<T>> {
    let idx = entries.iter().position(|e| e.id() == id)?;
    if entries[idx].is_read() {
        return None;
    }
    let mut next = entries.to_vec();
    next[idx].set_read();
    Some(next)
}

/// Delete one entry. `None` if the ID is unknown.
pub fn remove<T: FeedEntry>(entries: &[T], id: &str) -> Option<Vec<T>> {
    let idx = entries.iter().position(|e| e.id() == id)?;
    let mut next = entries.to_vec();
    next.remove(idx);
    Some(next)
}

pub fn unread_count<T: FeedEntry>(entries: &[T]) -> usize {
    entries.iter().filter(|e| !e.is_read()).count()
}

/// How long ago `at` was, in words: "about 1 hour ago", "2 days ago".
/// Times in the future read as "less than a minute ago".
pub fn age_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    let phrase = if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if hours < 24 {
        // Round to the nearest hour
        format!("about {}", plural((minutes + 30) / 60, "hour"))
    } else if hours < 42 {
        "1 day".to_string()
    } else if days < 30 {
        plural((hours + 12) / 24, "day")
    } else if days < 365 {
        format!("about {}", plural(months.max(1), "month"))
    } else {
        format!("over {}", plural(years, "year"))
    };
    format!("{} ago", phrase)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feed::{Message, Notification};
    use crate::model::id::EntityId;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn notifications() -> Vec<Notification> {
        vec![
            Notification {
                id: EntityId::new("n1"),
                text: "Your password was updated".into(),
                at: now() - Duration::hours(1),
                read: false,
            },
            Notification {
                id: EntityId::new("n2"),
                text: "New task assigned to you".into(),
                at: now() - Duration::days(2),
                read: true,
            },
        ]
    }

    #[test]
    fn test_mark_read() {
        let list = notifications();
        assert_eq!(unread_count(&list), 1);
        let next = mark_read(&list, "n1").unwrap();
        assert_eq!(unread_count(&next), 0);
        // Already read / unknown
        assert!(mark_read(&next, "n1").is_none());
        assert!(mark_read(&list, "zz").is_none());
        // Input untouched
        assert!(!list[0].read);
    }

    #[test]
    fn test_remove_message() {
        let messages = vec![Message {
            id: EntityId::new("m1"),
            from: "Alice".into(),
            body: "Can you check the design spec?".into(),
            at: now(),
            read: false,
        }];
        let next = remove(&messages, "m1").unwrap();
        assert!(next.is_empty());
        assert!(remove(&next, "m1").is_none());
    }

    #[test]
    fn test_age_labels() {
        let n = now();
        assert_eq!(age_label(n, n), "less than a minute ago");
        assert_eq!(age_label(n + Duration::minutes(5), n), "less than a minute ago");
        assert_eq!(age_label(n - Duration::minutes(1), n), "1 minute ago");
        assert_eq!(age_label(n - Duration::minutes(15), n), "15 minutes ago");
        assert_eq!(age_label(n - Duration::minutes(60), n), "about 1 hour ago");
        assert_eq!(age_label(n - Duration::hours(5), n), "about 5 hours ago");
        assert_eq!(age_label(n - Duration::hours(30), n), "1 day ago");
        assert_eq!(age_label(n - Duration::days(3), n), "3 days ago");
        assert_eq!(age_label(n - Duration::days(60), n), "about 2 months ago");
        assert_eq!(age_label(n - Duration::days(800), n), "over 2 years ago");
    }
}
