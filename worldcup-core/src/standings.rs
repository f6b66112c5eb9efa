//! Aggregate records of the teams in a group.
use crate::group::{Score, PAIRINGS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The aggregate record of a single team within its group.
///
/// Records are always derived from the match scores and never stored on their own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TeamRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamRecord {
    pub const POINTS_WIN: u32 = 3;
    pub const POINTS_DRAW: u32 = 1;

    /// Returns the key used to order records: points, then goal difference, then goals
    /// scored. A greater key ranks higher.
    #[inline]
    pub fn key(&self) -> (u32, i64, u64) {
        (self.points, self.goal_difference, self.goals_for)
    }

    /// Adds a single match with `scored` goals for and `conceded` goals against the team.
    pub fn add(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += Self::POINTS_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += Self::POINTS_DRAW;
            }
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }
}

/// Calculates the records of the 4 teams of a group, in draw order.
///
/// Matches without a score contribute nothing.
pub fn calculate(scores: &[Option<Score>; 6]) -> [TeamRecord; 4] {
    tally(scores, |_| true)
}

/// Calculates the records counting only matches where both teams are accepted by `include`.
/// Teams which are not included keep an empty record.
pub(crate) fn tally<F>(scores: &[Option<Score>; 6], include: F) -> [TeamRecord; 4]
where
    F: Fn(usize) -> bool,
{
    let mut records = [TeamRecord::default(); 4];

    for (&(home, away), score) in PAIRINGS.iter().zip(scores.iter()) {
        let Some(score) = score else {
            continue;
        };

        if !include(home) || !include(away) {
            continue;
        }

        records[home].add(score.home, score.away);
        records[away].add(score.away, score.home);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::{calculate, tally, TeamRecord};
    use crate::scores;

    macro_rules! record {
        ($p:expr, $w:expr, $d:expr, $l:expr, $gf:expr, $ga:expr, $pts:expr) => {
            TeamRecord {
                played: $p,
                won: $w,
                drawn: $d,
                lost: $l,
                goals_for: $gf,
                goals_against: $ga,
                goal_difference: $gf as i64 - $ga as i64,
                points: $pts,
            }
        };
    }

    #[test]
    fn test_calculate() {
        // A-B 2-1, C-D 0-0, A-C 1-1, B-D 3-0, A-D 2-0, B-C 1-2
        let scores = scores![(2, 1), (0, 0), (1, 1), (3, 0), (2, 0), (1, 2)];
        let records = calculate(&scores);

        assert_eq!(
            records,
            [
                record!(3, 2, 1, 0, 5, 2, 7),
                record!(3, 1, 0, 2, 5, 4, 3),
                record!(3, 1, 2, 0, 3, 2, 5),
                record!(3, 0, 1, 2, 0, 5, 1),
            ]
        );
    }

    #[test]
    fn test_calculate_missing_scores() {
        let scores = scores![(1, 0), _, _, _, _, _];
        let records = calculate(&scores);

        assert_eq!(records[0], record!(1, 1, 0, 0, 1, 0, 3));
        assert_eq!(records[1], record!(1, 0, 0, 1, 0, 1, 0));
        assert_eq!(records[2], TeamRecord::default());
        assert_eq!(records[3], TeamRecord::default());
    }

    #[test]
    fn test_calculate_huge_scores() {
        let max = u32::MAX;
        let scores = scores![(max, 0), _, (max, max), _, (1, max), _];
        let records = calculate(&scores);

        let max = u64::from(u32::MAX);
        assert_eq!(records[0].goals_for, 2 * max + 1);
        assert_eq!(records[0].goals_against, 2 * max);
        assert_eq!(records[0].goal_difference, 1);
        assert_eq!(records[0].points, 4);
        assert_eq!(records[3].goal_difference, max as i64 - 1);
    }

    #[test]
    fn test_tally_subset() {
        let scores = scores![(2, 1), (0, 0), (1, 1), (3, 0), (2, 0), (1, 2)];
        // Only A-C counts between A and C.
        let records = tally(&scores, |team| team == 0 || team == 2);

        assert_eq!(records[0], record!(1, 0, 1, 0, 1, 1, 1));
        assert_eq!(records[2], record!(1, 0, 1, 0, 1, 1, 1));
        assert_eq!(records[1], TeamRecord::default());
    }

    #[test]
    fn test_record_invariants() {
        let groups = [
            scores![(2, 1), (0, 0), (1, 1), (3, 0), (2, 0), (1, 2)],
            scores![(0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
            scores![(5, 0), (1, 4), _, (2, 2), (0, 1), _],
            scores![(9, 9), (3, 1), (0, 2), (1, 0), _, (4, 4)],
        ];

        for scores in groups.iter() {
            let records = calculate(scores);

            let mut expected_points = 0;
            for score in scores.iter().flatten() {
                expected_points += if score.home == score.away { 2 } else { 3 };
            }

            let points: u32 = records.iter().map(|r| r.points).sum();
            assert_eq!(points, expected_points);

            for record in records.iter() {
                assert_eq!(record.played, record.won + record.drawn + record.lost);
                assert!(record.played <= 3);
                assert_eq!(record.points, 3 * record.won + record.drawn);
                assert_eq!(
                    record.goal_difference,
                    record.goals_for as i64 - record.goals_against as i64
                );
            }
        }
    }
}
