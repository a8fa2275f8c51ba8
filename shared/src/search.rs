use crate::model::Member;

/// What the members list should show for the current query.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberSearch<T> {
    /// No snapshot yet.
    Loading,
    /// A snapshot is loaded but nothing matches.
    NoResults,
    Matches(Vec<T>),
}

impl<T> MemberSearch<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> MemberSearch<U> {
        match self {
            Self::Loading => MemberSearch::Loading,
            Self::NoResults => MemberSearch::NoResults,
            Self::Matches(items) => MemberSearch::Matches(items.into_iter().map(f).collect()),
        }
    }
}

/// Members whose "first last" name contains `query`, case-insensitively,
/// paired with their position in the snapshot. A blank query keeps everyone
/// in snapshot order.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<(usize, &'a Member)> {
    let needle = query.trim().to_lowercase();
    members
        .iter()
        .enumerate()
        .filter(|(_, member)| {
            needle.is_empty()
                || format!("{} {}", member.first_name, member.last_name)
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

/// `None` members means the snapshot has not arrived yet.
pub fn search_members<'a>(
    members: Option<&'a [Member]>,
    query: &str,
) -> MemberSearch<(usize, &'a Member)> {
    let Some(members) = members else {
        return MemberSearch::Loading;
    };
    let matches = filter_members(members, query);
    if matches.is_empty() {
        MemberSearch::NoResults
    } else {
        MemberSearch::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberSearch, filter_members, search_members};
    use crate::model::Member;

    fn member(first: &str, last: &str) -> Member {
        Member {
            first_name: first.into(),
            last_name: last.into(),
            ..Default::default()
        }
    }

    fn roster() -> Vec<Member> {
        vec![
            member("Bob", "Smith"),
            member("Ann", "Lee"),
            member("Diane", "Anniston"),
        ]
    }

    fn names(found: &[(usize, &Member)]) -> Vec<String> {
        found.iter().map(|(_, m)| m.display_name()).collect()
    }

    #[test]
    fn empty_query_keeps_full_list_in_order() {
        let members = roster();
        assert_eq!(
            names(&filter_members(&members, "")),
            vec!["Bob Smith", "Ann Lee", "Diane Anniston"]
        );
        assert_eq!(filter_members(&members, "   ").len(), 3);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let members = roster();
        let found = filter_members(&members, "ann");
        assert_eq!(names(&found), vec!["Ann Lee", "Diane Anniston"]);
        assert_eq!(found[0].0, 1, "positions refer to the snapshot");
        assert_eq!(names(&filter_members(&members, "  SMITH ")), vec!["Bob Smith"]);
    }

    #[test]
    fn query_can_span_first_and_last_name() {
        let members = roster();
        assert_eq!(names(&filter_members(&members, "ann l")), vec!["Ann Lee"]);
    }

    #[test]
    fn no_match_is_distinct_from_loading() {
        let members = roster();
        assert_eq!(search_members(Some(members.as_slice()), "zzz"), MemberSearch::NoResults);
        assert_eq!(search_members(None, "zzz"), MemberSearch::Loading);
        assert_eq!(search_members(Some(&[][..]), ""), MemberSearch::NoResults);
    }

    #[test]
    fn map_preserves_state() {
        let members = roster();
        let mapped = search_members(Some(members.as_slice()), "bob").map(|(idx, _)| idx);
        assert_eq!(mapped, MemberSearch::Matches(vec![0]));
    }
}
