//! The tiebreak cascade ordering the teams of a group.
//!
//! Teams are ordered by points, goal difference and goals scored. Teams level on all three are
//! compared again using only the matches played among themselves, applying the same criteria.
//! This repeats for every smaller set of teams that is still level. If a set of teams can not
//! be split any further the tie is reported as unresolved, unless a [`TiebreakerDecision`] for
//! exactly these teams exists.
//!
//! Disciplinary points and the world ranking are not modeled.
use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;

use crate::group::{Score, TiebreakerDecision, PAIRINGS};
use crate::standings::{self, TeamRecord};
use crate::third_place::ThirdPlaceEntry;
use crate::{GroupLetter, TeamId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reason the cascade could not separate a set of teams.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieReason {
    /// The teams are level on points, goal difference, goals scored and on all of these in
    /// the matches among themselves.
    HeadToHead,
    /// Some of the matches among the tied teams have no score yet.
    HeadToHeadUnplayed,
}

impl Display for TieReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeadToHead => {
                "level on points, goal difference and goals scored, head-to-head does not separate them"
            }
            Self::HeadToHeadUnplayed => {
                "level on points, goal difference and goals scored, head-to-head matches are not all played"
            }
        })
    }
}

/// A set of teams the cascade could not separate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnresolvedTie {
    /// The tied teams in draw order.
    pub teams: Vec<TeamId>,
    /// The first position (1-based) occupied by the tied teams.
    pub position: usize,
    pub reason: TieReason,
}

impl UnresolvedTie {
    /// Returns the positions occupied by the tied teams.
    #[inline]
    pub fn positions(&self) -> RangeInclusive<usize> {
        self.position..=self.position + self.teams.len() - 1
    }

    #[inline]
    pub fn covers(&self, position: usize) -> bool {
        self.positions().contains(&position)
    }
}

/// A team at its position within the group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Standing {
    pub position: usize,
    pub team: TeamId,
    pub record: TeamRecord,
}

/// The ordered result of a group.
///
/// The order is only authoritative once the group is complete. Teams of an unresolved tie
/// occupy their positions in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupStandings {
    pub group: GroupLetter,
    pub entries: Vec<Standing>,
    /// All 6 matches have a score.
    pub complete: bool,
    ties: Vec<UnresolvedTie>,
}

impl GroupStandings {
    /// Returns the unresolved tie that needs a decision first, if any.
    #[inline]
    pub fn tie(&self) -> Option<&UnresolvedTie> {
        self.ties.first()
    }

    /// Returns all unresolved ties, ordered by position.
    #[inline]
    pub fn ties(&self) -> &[UnresolvedTie] {
        &self.ties
    }

    /// Returns `true` if the group is complete and every position is decided.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.complete && self.ties.is_empty()
    }

    /// Returns `true` if `position` (1-based) is authoritative: the group is complete and no
    /// unresolved tie covers the position.
    pub fn is_settled(&self, position: usize) -> bool {
        self.complete && !self.ties.iter().any(|tie| tie.covers(position))
    }

    /// Returns the team currently at `position` (1-based).
    pub fn team_at(&self, position: usize) -> Option<TeamId> {
        self.entries
            .get(position.checked_sub(1)?)
            .map(|entry| entry.team)
    }

    /// Returns the team at `position` if the position is settled.
    pub fn settled_team(&self, position: usize) -> Option<TeamId> {
        if self.is_settled(position) {
            self.team_at(position)
        } else {
            None
        }
    }

    /// Returns the third-placed team with its record once position 3 is settled.
    pub fn third_place(&self) -> Option<ThirdPlaceEntry> {
        if !self.is_settled(3) {
            return None;
        }

        self.entries.get(2).map(|entry| ThirdPlaceEntry {
            group: self.group,
            team: entry.team,
            record: entry.record,
        })
    }
}

/// Orders the teams of a group given in draw order.
pub fn resolve(
    group: GroupLetter,
    teams: &[TeamId; 4],
    scores: &[Option<Score>; 6],
    decisions: &[TiebreakerDecision],
) -> GroupStandings {
    let records = standings::calculate(scores);

    let mut cascade = Cascade {
        teams,
        scores,
        decisions,
        order: Vec::with_capacity(teams.len()),
        ties: Vec::new(),
    };
    cascade.run(&[0, 1, 2, 3]);

    let entries = cascade
        .order
        .iter()
        .enumerate()
        .map(|(index, &team)| Standing {
            position: index + 1,
            team: teams[team],
            record: records[team],
        })
        .collect();

    let complete = scores.iter().all(Option::is_some);

    log::debug!(
        "Resolved group {} (complete: {}, unresolved ties: {})",
        group,
        complete,
        cascade.ties.len()
    );

    GroupStandings {
        group,
        entries,
        complete,
        ties: cascade.ties,
    }
}

struct Cascade<'a> {
    teams: &'a [TeamId; 4],
    scores: &'a [Option<Score>; 6],
    decisions: &'a [TiebreakerDecision],
    /// Draw positions in final order.
    order: Vec<usize>,
    ties: Vec<UnresolvedTie>,
}

impl<'a> Cascade<'a> {
    /// Orders `subset` using only the matches among the teams in `subset`. For the whole group
    /// this is the regular table.
    fn run(&mut self, subset: &[usize]) {
        let table = standings::tally(self.scores, |team| subset.contains(&team));

        let mut sorted = subset.to_vec();
        // Stable, so level teams stay in draw order.
        sorted.sort_by(|a, b| table[*b].key().cmp(&table[*a].key()));

        for bucket in sorted.chunk_by(|a, b| table[*a].key() == table[*b].key()) {
            match bucket.len() {
                1 => self.order.push(bucket[0]),
                n if n < subset.len() => {
                    log::debug!(
                        "{} teams level at position {}, comparing head-to-head",
                        n,
                        self.order.len() + 1
                    );
                    self.run(bucket);
                }
                _ => self.unresolved(bucket),
            }
        }
    }

    fn unresolved(&mut self, bucket: &[usize]) {
        let position = self.order.len() + 1;
        let teams: Vec<TeamId> = bucket.iter().map(|&index| self.teams[index]).collect();

        if let Some(decision) = self.decisions.iter().find(|d| d.applies_to(&teams)) {
            log::debug!(
                "Applying tiebreak decision at position {}: {:?}",
                position,
                decision.order
            );

            for team in decision.order.iter() {
                if let Some(index) = self.teams.iter().position(|t| t == team) {
                    self.order.push(index);
                }
            }

            return;
        }

        let played = PAIRINGS
            .iter()
            .zip(self.scores.iter())
            .filter(|((home, away), _)| bucket.contains(home) && bucket.contains(away))
            .all(|(_, score)| score.is_some());

        let reason = if played {
            TieReason::HeadToHead
        } else {
            TieReason::HeadToHeadUnplayed
        };

        self.order.extend_from_slice(bucket);
        self.ties.push(UnresolvedTie {
            teams,
            position,
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve, TieReason, UnresolvedTie};
    use crate::group::{Score, TiebreakerDecision};
    use crate::{scores, GroupLetter, TeamId};

    const TEAMS: [TeamId; 4] = [TeamId(10), TeamId(20), TeamId(30), TeamId(40)];

    fn order(scores: &[Option<Score>; 6], decisions: &[TiebreakerDecision]) -> Vec<u32> {
        resolve(GroupLetter::A, &TEAMS, scores, decisions)
            .entries
            .iter()
            .map(|entry| entry.team.0)
            .collect()
    }

    #[test]
    fn test_resolve_scenario() {
        // A-B 2-1, C-D 0-0, A-C 1-1, B-D 3-0, A-D 2-0, B-C 1-2
        let scores = scores![(2, 1), (0, 0), (1, 1), (3, 0), (2, 0), (1, 2)];
        let standings = resolve(GroupLetter::A, &TEAMS, &scores, &[]);

        assert!(standings.complete);
        assert!(standings.is_final());
        assert_eq!(standings.tie(), None);

        let table: Vec<(u32, u32, i64, u64)> = standings
            .entries
            .iter()
            .map(|e| (e.team.0, e.record.points, e.record.goal_difference, e.record.goals_for))
            .collect();

        assert_eq!(
            table,
            [(10, 7, 3, 5), (30, 5, 1, 3), (20, 3, 1, 5), (40, 1, -5, 0)]
        );

        for (index, entry) in standings.entries.iter().enumerate() {
            assert_eq!(entry.position, index + 1);
        }
    }

    #[test]
    fn test_resolve_distinct_records() {
        let groups = [
            scores![(1, 0), (1, 0), (1, 0), (1, 0), (1, 0), (1, 0)],
            scores![(0, 3), (2, 2), (1, 4), (0, 1), (2, 0), (1, 1)],
            scores![(4, 0), (0, 1), (2, 0), (3, 3), (1, 0), (0, 2)],
        ];

        for scores in groups.iter() {
            let standings = resolve(GroupLetter::B, &TEAMS, scores, &[]);
            assert!(standings.is_final(), "{:?}", standings);

            for pair in standings.entries.windows(2) {
                assert!(pair[0].record.key() > pair[1].record.key());
            }
        }
    }

    #[test]
    fn test_resolve_goal_difference() {
        // A-B 3-0, C-D 1-0, A-C 0-1, B-D 1-2, A-D 2-0, B-C 4-1
        // A and C on 6 points, B and D on 3 points. Both pairs split on goal difference.
        let scores = scores![(3, 0), (1, 0), (0, 1), (1, 2), (2, 0), (4, 1)];
        assert_eq!(order(&scores, &[]), [10, 30, 20, 40]);
    }

    #[test]
    fn test_resolve_goals_for() {
        // A-B 0-1, C-D 1-0, A-C 3-0, B-D 1-2, A-D 1-0, B-C 3-0
        // A and B on 6 points and +3, B scored 5 and A 4.
        let scores = scores![(0, 1), (1, 0), (3, 0), (1, 2), (1, 0), (3, 0)];
        assert_eq!(order(&scores, &[]), [20, 10, 40, 30]);
    }

    #[test]
    fn test_resolve_head_to_head_two_teams() {
        // A-B 1-0, C-D 1-0, A-C 0-2, B-D 2-1, A-D 2-0, B-C 1-0
        // A, B and C on 6 points. C leads on goal difference, A and B are level on
        // everything and A won the direct match.
        let scores = scores![(1, 0), (1, 0), (0, 2), (2, 1), (2, 0), (1, 0)];
        let standings = resolve(GroupLetter::B, &TEAMS, &scores, &[]);

        assert!(standings.is_final());
        assert_eq!(order(&scores, &[]), [30, 10, 20, 40]);
        assert_eq!(standings.entries[1].record.key(), standings.entries[2].record.key());
    }

    #[test]
    fn test_resolve_head_to_head_three_teams() {
        // A-B 3-0, C-D 5-2, A-C 0-1, B-D 5-0, A-D 3-2, B-C 1-0
        // A, B and C on 6 points, +3 and 6 goals. Among themselves all have 3 points, A is +2,
        // C is 0 and B is -2.
        let scores = scores![(3, 0), (5, 2), (0, 1), (5, 0), (3, 2), (1, 0)];
        let standings = resolve(GroupLetter::C, &TEAMS, &scores, &[]);

        assert!(standings.is_final());
        assert_eq!(order(&scores, &[]), [10, 30, 20, 40]);

        let level = standings.entries[..3]
            .iter()
            .all(|e| e.record.key() == standings.entries[0].record.key());
        assert!(level);
    }

    #[test]
    fn test_resolve_head_to_head_recursive() {
        // A-B 1-0, C-D 1-0, A-C 1-2, B-D 2-1, A-D 2-1, B-C 2-1
        // A, B and C on 6 points, +1 and 4 goals. Among themselves C scored 3, A and B 2 each,
        // which leaves A and B level again. A won the direct match.
        let scores = scores![(1, 0), (1, 0), (1, 2), (2, 1), (2, 1), (2, 1)];
        let standings = resolve(GroupLetter::D, &TEAMS, &scores, &[]);

        assert!(standings.is_final());
        assert_eq!(order(&scores, &[]), [30, 10, 20, 40]);
    }

    #[test]
    fn test_resolve_unresolvable_two_teams() {
        // A and B on 7 points, +3 and 4 goals, and drew 1-1.
        // A-B 1-1, C-D 2-0, A-C 2-0, B-D 2-0, A-D 1-0, B-C 1-0
        let scores = scores![(1, 1), (2, 0), (2, 0), (2, 0), (1, 0), (1, 0)];
        let standings = resolve(GroupLetter::E, &TEAMS, &scores, &[]);

        assert!(standings.complete);
        assert!(!standings.is_final());
        assert_eq!(
            standings.tie(),
            Some(&UnresolvedTie {
                teams: vec![TeamId(10), TeamId(20)],
                position: 1,
                reason: TieReason::HeadToHead,
            })
        );
        assert_eq!(standings.ties().len(), 1);

        assert!(!standings.is_settled(1));
        assert!(!standings.is_settled(2));
        assert!(standings.is_settled(3));
        assert!(standings.is_settled(4));
        assert_eq!(standings.settled_team(1), None);
        assert_eq!(standings.settled_team(3), Some(TeamId(30)));
        assert_eq!(standings.third_place().map(|e| e.team), Some(TeamId(30)));
    }

    #[test]
    fn test_resolve_unresolvable_three_teams() {
        // A-B 1-0, C-D 2-0, A-C 0-1, B-D 2-0, A-D 2-0, B-C 1-0
        // A beat B, B beat C and C beat A, all 1-0. Everyone beat D 2-0.
        let scores = scores![(1, 0), (2, 0), (0, 1), (2, 0), (2, 0), (1, 0)];
        let standings = resolve(GroupLetter::F, &TEAMS, &scores, &[]);

        let tie = standings.tie().unwrap();
        assert_eq!(tie.teams, [TeamId(10), TeamId(20), TeamId(30)]);
        assert_eq!(tie.position, 1);
        assert_eq!(tie.positions(), 1..=3);
        assert_eq!(tie.reason, TieReason::HeadToHead);
        assert_eq!(standings.team_at(4), Some(TeamId(40)));
        assert_eq!(standings.third_place(), None);
    }

    #[test]
    fn test_resolve_unresolvable_four_teams() {
        let scores = scores![(0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)];
        let standings = resolve(GroupLetter::G, &TEAMS, &scores, &[]);

        assert!(standings.complete);
        assert!(!standings.is_final());
        assert_eq!(
            standings.ties(),
            [UnresolvedTie {
                teams: TEAMS.to_vec(),
                position: 1,
                reason: TieReason::HeadToHead,
            }]
        );
        assert_eq!(standings.tie().unwrap().positions(), 1..=4);

        // Draw order is kept and no position is settled.
        assert_eq!(order(&scores, &[]), [10, 20, 30, 40]);
        assert!((1..=4).all(|position| !standings.is_settled(position)));
        assert_eq!(standings.third_place(), None);
    }

    #[test]
    fn test_resolve_incomplete() {
        let scores = [None; 6];
        let standings = resolve(GroupLetter::G, &TEAMS, &scores, &[]);

        assert!(!standings.complete);
        assert_eq!(order(&scores, &[]), [10, 20, 30, 40]);

        let tie = standings.tie().unwrap();
        assert_eq!(tie.teams.len(), 4);
        assert_eq!(tie.reason, TieReason::HeadToHeadUnplayed);

        // Incomplete groups never settle a position.
        let scores = scores![(3, 0), (2, 0), (1, 0), _, _, _];
        let standings = resolve(GroupLetter::G, &TEAMS, &scores, &[]);
        assert!(!standings.complete);
        assert!(!standings.is_settled(1));
        assert_eq!(standings.settled_team(1), None);
    }

    #[test]
    fn test_resolve_decision() {
        let scores = scores![(1, 1), (2, 0), (2, 0), (2, 0), (1, 0), (1, 0)];
        let decisions = [TiebreakerDecision {
            group: GroupLetter::E,
            order: vec![TeamId(20), TeamId(10)],
        }];

        let first = resolve(GroupLetter::E, &TEAMS, &scores, &decisions);
        assert!(first.is_final());
        assert_eq!(order(&scores, &decisions), [20, 10, 30, 40]);

        for _ in 0..3 {
            assert_eq!(resolve(GroupLetter::E, &TEAMS, &scores, &decisions), first);
        }

        // A decision for another set of teams does not apply.
        let decisions = [TiebreakerDecision {
            group: GroupLetter::E,
            order: vec![TeamId(20), TeamId(30)],
        }];
        let standings = resolve(GroupLetter::E, &TEAMS, &scores, &decisions);
        assert!(standings.tie().is_some());
    }

    #[test]
    fn test_resolve_two_separate_ties() {
        // A and B level at the top after drawing, C and D level at the bottom after drawing.
        // A-B 1-1, C-D 0-0, A-C 1-0, B-D 1-0, A-D 1-0, B-C 1-0
        let scores = scores![(1, 1), (0, 0), (1, 0), (1, 0), (1, 0), (1, 0)];
        let standings = resolve(GroupLetter::H, &TEAMS, &scores, &[]);

        assert_eq!(standings.ties().len(), 2);
        assert_eq!(standings.tie().map(|t| t.position), Some(1));
        assert_eq!(standings.ties()[1].position, 3);
        assert_eq!(standings.ties()[1].teams, [TeamId(30), TeamId(40)]);

        let decisions = [TiebreakerDecision {
            group: GroupLetter::H,
            order: vec![TeamId(10), TeamId(20)],
        }];
        let standings = resolve(GroupLetter::H, &TEAMS, &scores, &decisions);
        assert_eq!(standings.tie().map(|t| t.position), Some(3));
        assert!(standings.is_settled(1));
        assert!(!standings.is_settled(3));
    }
}
