//! Groups, their match scores and manually recorded tiebreak decisions.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::standings::{self, TeamRecord};
use crate::tiebreak::{self, GroupStandings};
use crate::{Error, GroupLetter, Result, TeamId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The draw positions (zero-based) of the two teams playing in each of the 6 group matches.
///
/// Match 1 is position 1 against 2, match 2 is 3 against 4 and so on, following the
/// official match-day order.
pub const PAIRINGS: [(usize, usize); 6] = [(0, 1), (2, 3), (0, 2), (1, 3), (0, 3), (1, 2)];

/// The final score of a group match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    #[inline]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

impl FromStr for Score {
    type Err = Error;

    /// Parses `home-away`, also accepting `:` as the separator.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidScore(s.to_owned());

        let (home, away) = s.trim().split_once(['-', ':']).ok_or_else(invalid)?;
        let home = home.trim().parse().map_err(|_| invalid())?;
        let away = away.trim().parse().map_err(|_| invalid())?;

        Ok(Self { home, away })
    }
}

/// A manually supplied order for teams the cascade could not separate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TiebreakerDecision {
    pub group: GroupLetter,
    /// The tied teams, best team first.
    pub order: Vec<TeamId>,
}

impl TiebreakerDecision {
    /// Returns `true` if this decision orders exactly the given set of `teams`.
    pub fn applies_to(&self, teams: &[TeamId]) -> bool {
        if self.order.len() != teams.len() {
            return false;
        }

        let mut order = self.order.clone();
        let mut teams = teams.to_vec();
        order.sort_unstable();
        teams.sort_unstable();
        order == teams
    }
}

/// A group of 4 teams playing a single round robin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub letter: GroupLetter,
    /// The teams in draw order.
    pub teams: [TeamId; 4],
    #[cfg_attr(feature = "serde", serde(default))]
    scores: [Option<Score>; 6],
    #[cfg_attr(feature = "serde", serde(default))]
    decisions: Vec<TiebreakerDecision>,
}

impl Group {
    /// Creates a new `Group` without any scores.
    pub fn new(letter: GroupLetter, teams: [TeamId; 4]) -> Self {
        Self {
            letter,
            teams,
            scores: [None; 6],
            decisions: Vec::new(),
        }
    }

    /// Returns the scores of all 6 matches, indexed by match number - 1.
    #[inline]
    pub fn scores(&self) -> &[Option<Score>; 6] {
        &self.scores
    }

    /// Returns the score of match `number` (1 to 6).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchNumber`] if `number` is not between 1 and 6.
    pub fn score(&self, number: u8) -> Result<Option<Score>> {
        let index = Self::match_index(number)?;
        Ok(self.scores[index])
    }

    /// Returns the two teams playing in match `number` (1 to 6).
    pub fn pairing(&self, number: u8) -> Result<(TeamId, TeamId)> {
        let (home, away) = PAIRINGS[Self::match_index(number)?];
        Ok((self.teams[home], self.teams[away]))
    }

    /// Updates the score of match `number`, `None` removing the score. Returns `true` if the
    /// score changed.
    ///
    /// Any change drops all recorded [`TiebreakerDecision`]s of the group, since the tied
    /// teams have to be derived again.
    pub fn update_match(&mut self, number: u8, score: Option<Score>) -> Result<bool> {
        let index = Self::match_index(number)?;

        if self.scores[index] == score {
            return Ok(false);
        }

        self.scores[index] = score;

        if !self.decisions.is_empty() {
            log::debug!(
                "Dropping {} tiebreak decision(s) of group {} after score change in match {}",
                self.decisions.len(),
                self.letter,
                number
            );
            self.decisions.clear();
        }

        Ok(true)
    }

    /// Returns `true` if all 6 matches have a score.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    #[inline]
    pub fn decisions(&self) -> &[TiebreakerDecision] {
        &self.decisions
    }

    /// Returns the records of the teams in draw order.
    #[inline]
    pub fn records(&self) -> [TeamRecord; 4] {
        standings::calculate(&self.scores)
    }

    /// Computes the standings of the group, applying any recorded decisions.
    #[inline]
    pub fn standings(&self) -> GroupStandings {
        tiebreak::resolve(self.letter, &self.teams, &self.scores, &self.decisions)
    }

    /// Records a manual `order` for an unresolved tie. `order` must be a permutation of the
    /// teams of a tie currently reported for this group. An earlier decision for the same
    /// teams is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDecision`] if `order` contains duplicates or foreign teams and
    /// [`Error::NoSuchTie`] if no unresolved tie between exactly these teams exists. Ties of a
    /// group that is not complete can not be decided yet.
    pub fn decide_tie(&mut self, order: Vec<TeamId>) -> Result<()> {
        for (index, team) in order.iter().enumerate() {
            if !self.teams.contains(team) {
                return Err(Error::InvalidDecision(format!(
                    "team {} is not in group {}",
                    team, self.letter
                )));
            }

            if order[..index].contains(team) {
                return Err(Error::InvalidDecision(format!("team {} is listed twice", team)));
            }
        }

        // Completing the group changes a score, which drops every decision.
        if !self.is_complete() {
            return Err(Error::NoSuchTie(self.letter));
        }

        let decision = TiebreakerDecision {
            group: self.letter,
            order,
        };

        let others: Vec<TiebreakerDecision> = self
            .decisions
            .iter()
            .filter(|d| !d.applies_to(&decision.order))
            .cloned()
            .collect();

        let standings = tiebreak::resolve(self.letter, &self.teams, &self.scores, &others);
        if !standings
            .ties()
            .iter()
            .any(|tie| decision.applies_to(&tie.teams))
        {
            return Err(Error::NoSuchTie(self.letter));
        }

        log::debug!(
            "Recording tiebreak decision for group {}: {:?}",
            self.letter,
            decision.order
        );

        self.decisions = others;
        self.decisions.push(decision);
        Ok(())
    }

    fn match_index(number: u8) -> Result<usize> {
        match number {
            1..=6 => Ok(usize::from(number) - 1),
            n => Err(Error::InvalidMatchNumber(n)),
        }
    }
}
