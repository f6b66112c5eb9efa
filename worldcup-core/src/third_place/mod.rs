//! Ranking of the third-placed teams and their assignment to the round of 32.
//!
//! The 8 best of the 12 third-placed teams advance. Which round-of-32 match each of them plays
//! in depends only on the set of groups they come from. For every one of the 495 possible sets
//! the assignment is fixed in a reference table.
mod table;

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::bracket::MatchId;
use crate::standings::TeamRecord;
use crate::{Error, GroupLetter, Result, TeamId, GROUPS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of third-placed teams advancing to the round of 32.
pub const QUALIFIERS: usize = 8;

/// The round-of-32 matches against a third-placed team, in the column order of the reference
/// table.
pub const THIRD_PLACE_SLOTS: [MatchId; QUALIFIERS] = [
    MatchId::M74,
    MatchId::M77,
    MatchId::M79,
    MatchId::M80,
    MatchId::M81,
    MatchId::M82,
    MatchId::M85,
    MatchId::M87,
];

/// A set of group letters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Combination(u16);

impl Combination {
    /// Creates a new empty `Combination`.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a `Combination` containing all `groups`.
    pub const fn of(groups: &[GroupLetter]) -> Self {
        let mut bits = 0;
        let mut index = 0;
        while index < groups.len() {
            bits |= 1 << groups[index] as u16;
            index += 1;
        }

        Self(bits)
    }

    #[inline]
    pub fn insert(&mut self, group: GroupLetter) {
        self.0 |= 1 << group as u16;
    }

    #[inline]
    pub const fn contains(self, group: GroupLetter) -> bool {
        self.0 & (1 << group as u16) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the groups in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = GroupLetter> {
        GroupLetter::ALL
            .into_iter()
            .filter(move |group| self.contains(*group))
    }
}

impl FromIterator<GroupLetter> for Combination {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = GroupLetter>,
    {
        let mut this = Self::new();
        for group in iter {
            this.insert(group);
        }

        this
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for group in self.iter() {
            write!(f, "{}", group)?;
        }

        Ok(())
    }
}

impl FromStr for Combination {
    type Err = Error;

    /// Parses a string of group letters in any order. Every letter may appear only once.
    fn from_str(s: &str) -> Result<Self> {
        let mut this = Self::new();

        for c in s.trim().chars() {
            let group = GroupLetter::from_char(c).ok_or_else(|| Error::UnknownGroup(c.into()))?;

            if this.contains(group) {
                return Err(Error::InvalidCombination {
                    letters: s.to_owned(),
                });
            }

            this.insert(group);
        }

        Ok(this)
    }
}

impl From<Combination> for String {
    #[inline]
    fn from(combination: Combination) -> Self {
        combination.to_string()
    }
}

impl TryFrom<String> for Combination {
    type Error = Error;

    #[inline]
    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A third-placed team with its group record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThirdPlaceEntry {
    pub group: GroupLetter,
    pub team: TeamId,
    pub record: TeamRecord,
}

/// All 12 third-placed teams, best first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThirdPlaceRanking {
    pub ranked: Vec<ThirdPlaceEntry>,
    /// The groups of the 8 qualified teams.
    pub combination: Combination,
    /// The 8th and 9th team are level on points, goal difference and goals scored. They are
    /// ordered by group letter, which is not an official criterion.
    pub cutoff_tie: bool,
}

impl ThirdPlaceRanking {
    /// Ranks the third-placed teams of all 12 groups by points, goal difference and goals
    /// scored. Teams come from different groups, so there is no head-to-head comparison.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteThirdPlaces`] unless exactly one entry for each of the 12
    /// groups is given.
    pub fn rank<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ThirdPlaceEntry>,
    {
        let mut ranked: Vec<ThirdPlaceEntry> = entries.into_iter().collect();

        let groups: Combination = ranked.iter().map(|entry| entry.group).collect();
        if ranked.len() != GROUPS || groups.len() != GROUPS {
            return Err(Error::IncompleteThirdPlaces {
                found: groups.len(),
            });
        }

        ranked.sort_by(|a, b| {
            b.record
                .key()
                .cmp(&a.record.key())
                .then(a.group.cmp(&b.group))
        });

        let combination = ranked[..QUALIFIERS].iter().map(|entry| entry.group).collect();
        let cutoff_tie = ranked[QUALIFIERS - 1].record.key() == ranked[QUALIFIERS].record.key();

        if cutoff_tie {
            log::warn!(
                "Third places of groups {} and {} are level on all criteria, ordered by group letter",
                ranked[QUALIFIERS - 1].group,
                ranked[QUALIFIERS].group
            );
        }

        log::debug!("Qualified third places: {}", combination);

        Ok(Self {
            ranked,
            combination,
            cutoff_tie,
        })
    }

    /// Returns the 8 qualified teams, best first.
    #[inline]
    pub fn qualified(&self) -> &[ThirdPlaceEntry] {
        &self.ranked[..QUALIFIERS.min(self.ranked.len())]
    }

    /// Looks up the round-of-32 assignment of the qualified teams.
    #[inline]
    pub fn assignment(&self) -> Result<ThirdPlaceAssignment> {
        lookup(self.combination)
    }
}

/// The round-of-32 match each qualified third-placed group plays in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThirdPlaceAssignment {
    pub combination: Combination,
    /// The groups in the order of [`THIRD_PLACE_SLOTS`].
    pub groups: [GroupLetter; QUALIFIERS],
}

impl ThirdPlaceAssignment {
    /// Returns the group whose third-placed team plays in match `id`.
    pub fn group_for(&self, id: MatchId) -> Option<GroupLetter> {
        THIRD_PLACE_SLOTS
            .iter()
            .position(|slot| *slot == id)
            .map(|index| self.groups[index])
    }

    /// Returns the match the third-placed team of `group` plays in.
    pub fn match_for(&self, group: GroupLetter) -> Option<MatchId> {
        self.groups
            .iter()
            .position(|g| *g == group)
            .map(|index| THIRD_PLACE_SLOTS[index])
    }

    /// Returns an iterator over `(match, group)` pairs in match order.
    pub fn iter(&self) -> impl Iterator<Item = (MatchId, GroupLetter)> + '_ {
        THIRD_PLACE_SLOTS.into_iter().zip(self.groups.iter().copied())
    }
}

/// Returns the fixed assignment for a set of 8 qualifying groups.
///
/// # Errors
///
/// Returns [`Error::InvalidCombination`] if `combination` is not one of the 495 reference
/// combinations. There is no fallback assignment.
pub fn lookup(combination: Combination) -> Result<ThirdPlaceAssignment> {
    index()
        .get(&combination)
        .map(|&row| ThirdPlaceAssignment {
            combination,
            groups: table::TABLE[row],
        })
        .ok_or_else(|| Error::InvalidCombination {
            letters: combination.to_string(),
        })
}

/// Returns an iterator over all reference assignments.
pub fn combinations() -> impl Iterator<Item = ThirdPlaceAssignment> {
    table::TABLE.iter().map(|groups| ThirdPlaceAssignment {
        combination: Combination::of(groups),
        groups: *groups,
    })
}

fn index() -> &'static HashMap<Combination, usize> {
    static INDEX: OnceLock<HashMap<Combination, usize>> = OnceLock::new();

    INDEX.get_or_init(|| {
        table::TABLE
            .iter()
            .enumerate()
            .map(|(row, groups)| (Combination::of(groups), row))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{combinations, lookup, Combination, ThirdPlaceEntry, ThirdPlaceRanking};
    use super::{QUALIFIERS, THIRD_PLACE_SLOTS};
    use crate::bracket::{Bracket, Slot};
    use crate::standings::TeamRecord;
    use crate::{Error, GroupLetter, MatchId, TeamId};

    fn entry(
        group: GroupLetter,
        points: u32,
        goal_difference: i64,
        goals_for: u64,
    ) -> ThirdPlaceEntry {
        ThirdPlaceEntry {
            group,
            team: TeamId(group.index() as u32),
            record: TeamRecord {
                played: 3,
                points,
                goal_difference,
                goals_for,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_combination() {
        let combination: Combination = "LKIGEDBA".parse().unwrap();
        assert_eq!(combination.to_string(), "ABDEGIKL");
        assert_eq!(combination.len(), 8);
        assert!(combination.contains(GroupLetter::K));
        assert!(!combination.contains(GroupLetter::C));

        assert_eq!(
            "ABCA".parse::<Combination>(),
            Err(Error::InvalidCombination {
                letters: "ABCA".to_owned()
            })
        );
        assert_eq!(
            "ABZ".parse::<Combination>(),
            Err(Error::UnknownGroup("Z".to_owned()))
        );

        assert_eq!(Combination::new().to_string(), "");
        assert!(Combination::new().is_empty());
    }

    #[test]
    fn test_table() {
        let mut seen = HashSet::new();

        for assignment in combinations() {
            assert_eq!(assignment.combination.len(), QUALIFIERS);
            assert!(seen.insert(assignment.combination));

            // Every group is drawn into a slot accepting it.
            for (id, group) in assignment.iter() {
                let accepted = Bracket::get(id)
                    .slots
                    .iter()
                    .any(|slot| matches!(slot, Slot::Third(eligible) if eligible.contains(group)));
                assert!(accepted, "{} in match {}", group, id);
            }
        }

        assert_eq!(seen.len(), 495);
    }

    #[test]
    fn test_lookup_round_trip() {
        for assignment in combinations() {
            assert_eq!(lookup(assignment.combination), Ok(assignment));

            let letters = assignment.combination.to_string();
            let reversed: String = letters.chars().rev().collect();
            assert_eq!(lookup(reversed.parse().unwrap()), Ok(assignment));
        }
    }

    #[test]
    fn test_lookup() {
        let assignment = lookup("ABDEGIKL".parse().unwrap()).unwrap();

        use GroupLetter::*;
        assert_eq!(assignment.groups, [A, D, E, K, B, I, G, L]);
        assert_eq!(assignment.group_for(MatchId::M74), Some(A));
        assert_eq!(assignment.group_for(MatchId::M87), Some(L));
        assert_eq!(assignment.group_for(MatchId::M73), None);
        assert_eq!(assignment.match_for(K), Some(MatchId::M80));
        assert_eq!(assignment.match_for(C), None);

        let slots: Vec<MatchId> = assignment.iter().map(|(id, _)| id).collect();
        assert_eq!(slots, THIRD_PLACE_SLOTS);
    }

    #[test]
    fn test_lookup_invalid() {
        for letters in ["ABCDEFG", "ABCDEFGHI", "", "ABCDEFGHIJKL"] {
            assert_eq!(
                lookup(letters.parse().unwrap()),
                Err(Error::InvalidCombination {
                    letters: letters.to_owned()
                })
            );
        }
    }

    #[test]
    fn test_rank() {
        use GroupLetter::*;

        let entries = [
            entry(A, 4, 1, 3),
            entry(B, 3, 0, 2),
            entry(C, 4, 1, 4),
            entry(D, 1, -3, 1),
            entry(E, 3, -1, 3),
            entry(F, 6, 2, 5),
            entry(G, 3, 0, 4),
            entry(H, 2, -2, 2),
            entry(I, 4, 0, 3),
            entry(J, 0, -6, 0),
            entry(K, 3, 1, 3),
            entry(L, 3, 0, 3),
        ];

        let ranking = ThirdPlaceRanking::rank(entries).unwrap();
        let order: String = ranking.ranked.iter().map(|e| e.group.as_char()).collect();

        assert_eq!(order, "FCAIKGLBEHDJ");
        assert_eq!(ranking.combination.to_string(), "ABCFGIKL");
        assert_eq!(ranking.qualified().len(), 8);
        assert!(!ranking.cutoff_tie);
        assert_eq!(
            ranking.assignment().map(|a| a.combination),
            Ok(ranking.combination)
        );
    }

    #[test]
    fn test_rank_cutoff_tie() {
        use GroupLetter::*;

        let mut entries: Vec<ThirdPlaceEntry> = GroupLetter::ALL
            .iter()
            .map(|&group| entry(group, 4, 1, 3))
            .collect();
        entries[11] = entry(L, 0, -5, 0);

        let ranking = ThirdPlaceRanking::rank(entries).unwrap();
        assert!(ranking.cutoff_tie);
        assert_eq!(ranking.combination.to_string(), "ABCDEFGH");
    }

    #[test]
    fn test_rank_incomplete() {
        let entries: Vec<ThirdPlaceEntry> = GroupLetter::ALL[..11]
            .iter()
            .map(|&group| entry(group, 3, 0, 3))
            .collect();

        assert_eq!(
            ThirdPlaceRanking::rank(entries.clone()),
            Err(Error::IncompleteThirdPlaces { found: 11 })
        );

        // A duplicate group does not make up for a missing one.
        let mut entries = entries;
        entries.push(entry(GroupLetter::A, 3, 0, 3));
        assert_eq!(
            ThirdPlaceRanking::rank(entries),
            Err(Error::IncompleteThirdPlaces { found: 11 })
        );
    }
}
