use std::collections::{BTreeSet, HashMap};

use crate::model::Member;

/// Ranks 1 through this value are podium finishes.
pub const PODIUM_SIZE: u32 = 3;

/// Dense ranking of distinct scores: the highest score is rank 1, tied scores
/// share a rank, and the next lower score gets the next integer.
///
/// `[10, 10, 7]` ranks `10 -> 1`, `7 -> 2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankMap {
    ranks: HashMap<i64, u32>,
}

impl RankMap {
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let distinct: BTreeSet<i64> = scores.into_iter().collect();
        let ranks = distinct.into_iter().rev().zip(1u32..).collect();
        Self { ranks }
    }

    pub fn from_members(members: &[Member]) -> Self {
        Self::from_scores(members.iter().map(|m| m.points))
    }

    pub fn rank(&self, score: i64) -> Option<u32> {
        self.ranks.get(&score).copied()
    }

    /// Rank of `score` if it places on the podium.
    pub fn podium_rank(&self, score: i64) -> Option<u32> {
        self.rank(score)
            .filter(|rank| (1..=PODIUM_SIZE).contains(rank))
    }

    /// Number of distinct scores ranked.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
