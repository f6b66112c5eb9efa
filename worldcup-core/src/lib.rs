//! # worldcup-core
//!
//! This crate contains the calculation engine of the World Cup prediction game: group standings
//! with the tiebreak cascade, the ranking of third-placed teams, the third-place slot lookup and
//! the knockout bracket with its winner propagation.
//!
//! Everything in this crate is pure and synchronous. The caller owns persistence and supplies
//! snapshots of scores, decisions and recorded winners.
//!
//! Important types:
//! - [`Group`]: The 4 teams of a group, its 6 match scores and any recorded tiebreak decisions.
//! - [`GroupStandings`]: The ordered result of a group, including a possible
//! [`UnresolvedTie`].
//! - [`ThirdPlaceRanking`]: The 8 best third-placed teams and their [`Combination`].
//! - [`ThirdPlaceAssignment`]: The round-of-32 slots the qualifying third places are drawn into.
//! - [`Bracket`]: The knockout bracket from the round of 32 to the final.
//! - [`Tournament`]: A full snapshot tying all of the above together.
//!
//! ## Feature Flags
//!
//! `serde`: Adds `Serialize` and `Deserialize` impls to almost all types.
//!
pub mod bracket;
pub mod group;
pub mod standings;
pub mod table;
pub mod third_place;
pub mod tiebreak;
pub mod tournament;

pub use bracket::{Bracket, MatchId, Round, Seeding, Slot};
pub use group::{Group, Score, TiebreakerDecision};
pub use standings::TeamRecord;
pub use third_place::{Combination, ThirdPlaceAssignment, ThirdPlaceEntry, ThirdPlaceRanking};
pub use tiebreak::{GroupStandings, TieReason, UnresolvedTie};
pub use tournament::Tournament;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of groups in the tournament.
pub const GROUPS: usize = 12;

/// The letter of one of the 12 groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl GroupLetter {
    /// All groups in alphabetical order.
    pub const ALL: [Self; GROUPS] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
    ];

    /// Returns the zero-based index of the group (`A` is 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the group at `index`, or `None` if `index` is not below [`GROUPS`].
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < GROUPS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Parses a single letter, accepting lowercase input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use worldcup_core::GroupLetter;
    /// assert_eq!(GroupLetter::from_char('e'), Some(GroupLetter::E));
    /// assert_eq!(GroupLetter::from_char('M'), None);
    /// ```
    pub const fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        if c >= 'A' && c <= 'L' {
            Self::from_index(c as usize - 'A' as usize)
        } else {
            None
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl Display for GroupLetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for GroupLetter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| Error::UnknownGroup(s.to_owned())),
            _ => Err(Error::UnknownGroup(s.to_owned())),
        }
    }
}

/// The identifier of a team.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamId(pub u32);

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for TeamId {
    type Err = std::num::ParseIntError;

    #[inline]
    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A team taking part in the tournament.
///
/// A team with `playoff` set is a placeholder for whichever team wins an external playoff. Its
/// identity is substituted by the caller, see [`Tournament::team`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Three letter code, e.g. `GER`.
    pub code: String,
    /// Reference to the flag asset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flag: String,
    pub group: GroupLetter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub playoff: bool,
}

/// A spot for a team in a knockout match.
///
/// A spot is either taken by a team or still waiting for an upstream result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntrantSpot<T> {
    Entrant(T),
    TBD,
}

impl<T> EntrantSpot<T> {
    /// Creates a new `EntrantSpot` from an [`Option`]. A `Some(T)` value will translate into
    /// a `Entrant(T)` value, a `None` value will translate into a `TBD` value.
    pub fn new(entrant: Option<T>) -> Self {
        match entrant {
            Some(entrant) => Self::Entrant(entrant),
            None => Self::TBD,
        }
    }

    /// Returns `true` if the `EntrantSpot` is [`Entrant`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use worldcup_core::EntrantSpot;
    /// let spot = EntrantSpot::Entrant(());
    /// assert!(spot.is_entrant());
    /// ```
    /// [`Entrant`]: Self::Entrant
    pub fn is_entrant(&self) -> bool {
        matches!(self, Self::Entrant(_))
    }

    /// Returns `true` if the `EntrantSpot` is [`TBD`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use worldcup_core::EntrantSpot;
    /// let spot: EntrantSpot<()> = EntrantSpot::TBD;
    /// assert!(spot.is_tbd());
    /// ```
    ///
    /// [`TBD`]: Self::TBD
    pub fn is_tbd(&self) -> bool {
        matches!(self, Self::TBD)
    }

    /// Converts the spot into an [`Option`], discarding the `TBD` state.
    pub fn entrant(self) -> Option<T> {
        match self {
            Self::Entrant(entrant) => Some(entrant),
            Self::TBD => None,
        }
    }

    /// Converts an `&EntrantSpot<T>` into an `EntrantSpot<&T>`.
    pub fn as_ref(&self) -> EntrantSpot<&T> {
        match *self {
            Self::Entrant(ref entrant) => EntrantSpot::Entrant(entrant),
            Self::TBD => EntrantSpot::TBD,
        }
    }

    /// Maps `EntrantSpot<T>` to `EntrantSpot<U>` by applying `f` on it.
    pub fn map<U, F>(self, f: F) -> EntrantSpot<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Entrant(entrant) => EntrantSpot::Entrant(f(entrant)),
            Self::TBD => EntrantSpot::TBD,
        }
    }
}

impl<T> Default for EntrantSpot<T> {
    #[inline]
    fn default() -> Self {
        Self::TBD
    }
}

impl<T> From<Option<T>> for EntrantSpot<T> {
    #[inline]
    fn from(entrant: Option<T>) -> Self {
        Self::new(entrant)
    }
}

/// An `Result<T>` using [`enum@Error`] as an error type.
pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid match number {0}: group matches are numbered 1 to 6")]
    InvalidMatchNumber(u8),
    #[error("unknown match {0}: knockout matches are numbered 73 to 104")]
    UnknownMatch(u8),
    #[error("unknown group {0:?}")]
    UnknownGroup(String),
    #[error("team {0} is not part of the tournament")]
    UnknownTeam(TeamId),
    #[error("only {found} of 12 groups have a settled third place")]
    IncompleteThirdPlaces { found: usize },
    #[error("no valid third-place combination for groups {letters}")]
    InvalidCombination { letters: String },
    #[error("match {0} does not have both teams determined yet")]
    SlotsNotPopulated(MatchId),
    #[error("team {team} does not play in match {id}")]
    NotInMatch { id: MatchId, team: TeamId },
    #[error("the score of match {id} has the other team ahead of winner {team}")]
    ScoreMismatch { id: MatchId, team: TeamId },
    #[error("invalid score {0:?}, expected goals like `2-1`")]
    InvalidScore(String),
    #[error("there is no unresolved tie between the given teams in group {0}")]
    NoSuchTie(GroupLetter),
    #[error("invalid tiebreak order: {0}")]
    InvalidDecision(String),
    #[error("invalid tournament: {0}")]
    InvalidTournament(String),
}
