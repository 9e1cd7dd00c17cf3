use tracing::debug;

use crate::model::id::{IdGen, IdKind};
use crate::model::team::{Member, Presence, TeamRole};

/// Append a member. A blank name adds nobody and returns `None`.
pub fn add_member(
    team: &[Member],
    name: &str,
    role: TeamRole,
    presence: Presence,
    ids: &IdGen,
) -> Option<Vec<Member>> {
    let name = name.trim();
    if name.is_empty() {
        debug!("add member: blank name ignored");
        return None;
    }
    let mut next = team.to_vec();
    next.push(Member {
        id: ids.next(IdKind::Member),
        name: name.to_string(),
        role,
        presence,
    });
    Some(next)
}

/// Remove a member by ID. `None` when no member has that ID.
pub fn remove_member(team: &[Member], member_id: &str) -> Option<Vec<Member>> {
    let idx = team.iter().position(|m| m.id == member_id)?;
    let mut next = team.to_vec();
    next.remove(idx);
    Some(next)
}

/// Members whose name contains `term`, ignoring case. An empty term matches all.
pub fn search<'a>(team: &'a [Member], term: &str) -> Vec<&'a Member> {
    let needle = term.to_lowercase();
    team.iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect()
}

/// Avatar initials: first letter of the first and last word, uppercased.
/// A single word yields one letter, a blank name yields nothing.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first_char = |w: &str| w.chars().next();
    let letters: Vec<char> = match words.as_slice() {
        [] => Vec::new(),
        [only] => first_char(*only).into_iter().collect(),
        [first, .., last] => first_char(*first)
            .into_iter()
            .chain(first_char(*last))
            .collect(),
    };
    letters.into_iter().flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::EntityId;

    fn sample_team() -> Vec<Member> {
        vec![
            Member {
                id: EntityId::new("M-001"),
                name: "Alice Johnson".into(),
                role: TeamRole::Admin,
                presence: Presence::Active,
            },
            Member {
                id: EntityId::new("M-002"),
                name: "Bob Smith".into(),
                role: TeamRole::Developer,
                presence: Presence::Offline,
            },
            Member {
                id: EntityId::new("M-003"),
                name: "Clara Lee".into(),
                role: TeamRole::Designer,
                presence: Presence::Away,
            },
        ]
    }

    #[test]
    fn test_add_member() {
        let team = sample_team();
        let ids = IdGen::new();
        ids.observe(&EntityId::new("M-003"));
        let next = add_member(&team, " Dana Lee ", TeamRole::ProductManager, Presence::Active, &ids)
            .unwrap();
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].name, "Dana Lee");
        assert_eq!(next[3].id.as_str(), "M-004");
        assert_eq!(team.len(), 3);
    }

    #[test]
    fn test_add_member_blank_name() {
        let ids = IdGen::new();
        assert!(add_member(&sample_team(), "  ", TeamRole::Admin, Presence::Active, &ids).is_none());
    }

    #[test]
    fn test_remove_member() {
        let team = sample_team();
        let next = remove_member(&team, "M-002").unwrap();
        assert_eq!(next.len(), 2);
        assert!(remove_member(&next, "M-002").is_none());
    }

    #[test]
    fn test_search_ignores_case() {
        let team = sample_team();
        let hits: Vec<&str> = search(&team, "LE").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(hits, vec!["Clara Lee"]);
        assert_eq!(search(&team, "").len(), 3);
        assert!(search(&team, "zed").is_empty());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alice Johnson"), "AJ");
        assert_eq!(initials("Mary Ann van Dyke"), "MD");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("   "), "");
    }
}
