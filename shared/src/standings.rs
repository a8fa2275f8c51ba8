use crate::model::{Member, points_unit};
use crate::rank::RankMap;
use crate::theme::{ColorTheme, Podium, resolve_theme};

/// Everything the members list renders for one member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCard {
    /// Position in the snapshot; stable key for list rendering.
    pub position: usize,
    pub name: String,
    pub initial: char,
    pub category: String,
    pub roles: Vec<String>,
    pub points: i64,
    pub unit: &'static str,
    pub podium: Option<Podium>,
    pub theme: &'static ColorTheme,
}

impl MemberCard {
    /// `ranks` must be built from the full member list, not a filtered view,
    /// so podium places do not shift while searching.
    pub fn new(position: usize, member: &Member, ranks: &RankMap) -> Self {
        let podium_rank = ranks.podium_rank(member.points);
        Self {
            position,
            name: member.display_name(),
            initial: member.initial(),
            category: member.category.clone(),
            roles: member.roles.clone(),
            points: member.points,
            unit: points_unit(member.points),
            podium: podium_rank.and_then(Podium::from_rank),
            theme: resolve_theme(&member.category_key(), podium_rank),
        }
    }

    pub fn medal(&self) -> Option<&'static str> {
        self.podium.map(Podium::medal)
    }
}

#[cfg(test)]
mod tests {
    use super::MemberCard;
    use crate::model::Member;
    use crate::rank::RankMap;
    use crate::search::filter_members;
    use crate::theme::{Category, DEFAULT_THEME, Podium};

    fn member(first: &str, category: &str, points: i64) -> Member {
        Member {
            first_name: first.into(),
            last_name: "Doe".into(),
            category: category.into(),
            points,
            roles: vec![],
        }
    }

    #[test]
    fn podium_members_get_medals_and_podium_theme() {
        let members = vec![
            member("Ann", "Gold", 50),
            member("Bea", "Eta", 50),
            member("Cam", "Eta", 30),
            member("Dee", "Eta", 20),
            member("Eli", "Eta", 10),
        ];
        let ranks = RankMap::from_members(&members);
        let cards: Vec<_> = members
            .iter()
            .enumerate()
            .map(|(idx, m)| MemberCard::new(idx, m, &ranks))
            .collect();

        assert_eq!(cards[0].podium, Some(Podium::First));
        assert_eq!(cards[1].podium, Some(Podium::First));
        assert_eq!(cards[1].theme, Podium::First.theme());
        assert_eq!(cards[2].medal(), Some(Podium::Second.medal()));
        assert_eq!(cards[3].podium, Some(Podium::Third));
        assert_eq!(cards[4].podium, None);
        assert_eq!(cards[4].theme, Category::Eta.theme());
    }

    #[test]
    fn unknown_category_uses_default_theme() {
        let members = vec![
            member("Ann", "", 50),
            member("Bo", "Mystery", 1),
            member("Cy", "", 2),
            member("Di", "", 3),
        ];
        let ranks = RankMap::from_members(&members);
        let card = MemberCard::new(1, &members[1], &ranks);
        assert_eq!(card.podium, None);
        assert_eq!(card.theme, &DEFAULT_THEME);
        assert_eq!(card.unit, "point");
        assert_eq!(card.initial, 'B');
    }

    #[test]
    fn filtering_does_not_change_ranks() {
        let members = vec![member("Ann", "gold", 50), member("Bob", "gold", 30)];
        let ranks = RankMap::from_members(&members);
        let found = filter_members(&members, "bob");
        let card = MemberCard::new(found[0].0, found[0].1, &ranks);
        assert_eq!(card.position, 1);
        assert_eq!(card.podium, Some(Podium::Second));
    }
}
