//! The knockout bracket from the round of 32 to the final.
//!
//! The bracket is a fixed graph of 32 matches. Every round-of-32 slot is fed by a group
//! position, every later slot by the winner (or, for the third place match, the loser) of an
//! earlier match. Only recorded winners and their optional scores are stored; the teams of a
//! match are always derived by resolving its slots, so a winner that no longer plays in its
//! match is never used.
use std::fmt::{self, Display, Formatter};

use crate::group::Score;
use crate::third_place::{Combination, ThirdPlaceAssignment};
use crate::tiebreak::GroupStandings;
use crate::{EntrantSpot, Error, GroupLetter, Result, TeamId, GROUPS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of knockout matches.
pub const NUM_MATCHES: usize = 32;

/// The number of a knockout match, 73 to 104.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct MatchId(u8);

macro_rules! match_ids {
    ($($name:ident = $number:expr),*$(,)?) => {
        impl MatchId {
            $(
                pub const $name: Self = Self($number);
            )*
        }
    };
}

match_ids! {
    M73 = 73, M74 = 74, M75 = 75, M76 = 76, M77 = 77, M78 = 78, M79 = 79, M80 = 80,
    M81 = 81, M82 = 82, M83 = 83, M84 = 84, M85 = 85, M86 = 86, M87 = 87, M88 = 88,
    M89 = 89, M90 = 90, M91 = 91, M92 = 92, M93 = 93, M94 = 94, M95 = 95, M96 = 96,
    M97 = 97, M98 = 98, M99 = 99, M100 = 100, M101 = 101, M102 = 102, M103 = 103,
    M104 = 104,
}

impl MatchId {
    const FIRST: u8 = 73;

    /// Creates a new `MatchId`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMatch`] if `number` is not between 73 and 104.
    pub fn new(number: u8) -> Result<Self> {
        if (Self::FIRST..Self::FIRST + NUM_MATCHES as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(Error::UnknownMatch(number))
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the index of the match within [`Bracket::matches`].
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - Self::FIRST) as usize
    }
}

impl Display for MatchId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u8> for MatchId {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MatchId> for u8 {
    #[inline]
    fn from(id: MatchId) -> Self {
        id.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Round {
    RoundOf32,
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    ThirdPlace,
    Final,
}

impl Display for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RoundOf32 => "Round of 32",
            Self::RoundOf16 => "Round of 16",
            Self::QuarterFinal => "Quarter-final",
            Self::SemiFinal => "Semi-final",
            Self::ThirdPlace => "Match for third place",
            Self::Final => "Final",
        })
    }
}

/// Where the team of a slot comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The winner of a group.
    First(GroupLetter),
    /// The runner-up of a group.
    Second(GroupLetter),
    /// A qualified third-placed team from one of the given groups, picked by the
    /// [`ThirdPlaceAssignment`].
    Third(Combination),
    /// The winner of an earlier match.
    Winner(MatchId),
    /// The loser of an earlier match.
    Loser(MatchId),
}

impl Slot {
    /// Returns the earlier match this slot depends on, if any.
    #[inline]
    pub fn source(self) -> Option<MatchId> {
        match self {
            Self::Winner(id) | Self::Loser(id) => Some(id),
            _ => None,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(group) => write!(f, "1{}", group),
            Self::Second(group) => write!(f, "2{}", group),
            Self::Third(groups) => write!(f, "3{}", groups),
            Self::Winner(id) => write!(f, "W{}", id),
            Self::Loser(id) => write!(f, "L{}", id),
        }
    }
}

/// The definition of a knockout match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BracketMatch {
    pub id: MatchId,
    pub round: Round,
    pub slots: [Slot; 2],
}

impl BracketMatch {
    const fn new(id: MatchId, round: Round, first: Slot, second: Slot) -> Self {
        Self {
            id,
            round,
            slots: [first, second],
        }
    }
}

static MATCHES: [BracketMatch; NUM_MATCHES] = {
    use GroupLetter::*;
    use Round::*;
    use Slot::{First, Loser, Second, Third, Winner};

    const fn third(groups: &[GroupLetter]) -> Slot {
        Third(Combination::of(groups))
    }

    [
        BracketMatch::new(MatchId::M73, RoundOf32, Second(A), Second(B)),
        BracketMatch::new(MatchId::M74, RoundOf32, First(E), third(&[A, B, C, D, F])),
        BracketMatch::new(MatchId::M75, RoundOf32, First(F), Second(C)),
        BracketMatch::new(MatchId::M76, RoundOf32, First(C), Second(F)),
        BracketMatch::new(MatchId::M77, RoundOf32, First(I), third(&[C, D, F, G, H])),
        BracketMatch::new(MatchId::M78, RoundOf32, Second(E), Second(I)),
        BracketMatch::new(MatchId::M79, RoundOf32, First(A), third(&[C, E, F, H, I])),
        BracketMatch::new(MatchId::M80, RoundOf32, First(L), third(&[E, H, I, J, K])),
        BracketMatch::new(MatchId::M81, RoundOf32, First(D), third(&[B, E, F, I, J])),
        BracketMatch::new(MatchId::M82, RoundOf32, First(G), third(&[A, E, H, I, J])),
        BracketMatch::new(MatchId::M83, RoundOf32, Second(K), Second(L)),
        BracketMatch::new(MatchId::M84, RoundOf32, First(H), Second(J)),
        BracketMatch::new(MatchId::M85, RoundOf32, First(B), third(&[E, F, G, I, J])),
        BracketMatch::new(MatchId::M86, RoundOf32, First(J), Second(H)),
        BracketMatch::new(MatchId::M87, RoundOf32, First(K), third(&[D, E, I, J, L])),
        BracketMatch::new(MatchId::M88, RoundOf32, Second(D), Second(G)),
        BracketMatch::new(MatchId::M89, RoundOf16, Winner(MatchId::M74), Winner(MatchId::M77)),
        BracketMatch::new(MatchId::M90, RoundOf16, Winner(MatchId::M73), Winner(MatchId::M75)),
        BracketMatch::new(MatchId::M91, RoundOf16, Winner(MatchId::M76), Winner(MatchId::M78)),
        BracketMatch::new(MatchId::M92, RoundOf16, Winner(MatchId::M79), Winner(MatchId::M80)),
        BracketMatch::new(MatchId::M93, RoundOf16, Winner(MatchId::M83), Winner(MatchId::M84)),
        BracketMatch::new(MatchId::M94, RoundOf16, Winner(MatchId::M81), Winner(MatchId::M82)),
        BracketMatch::new(MatchId::M95, RoundOf16, Winner(MatchId::M86), Winner(MatchId::M88)),
        BracketMatch::new(MatchId::M96, RoundOf16, Winner(MatchId::M85), Winner(MatchId::M87)),
        BracketMatch::new(MatchId::M97, QuarterFinal, Winner(MatchId::M89), Winner(MatchId::M90)),
        BracketMatch::new(MatchId::M98, QuarterFinal, Winner(MatchId::M93), Winner(MatchId::M94)),
        BracketMatch::new(MatchId::M99, QuarterFinal, Winner(MatchId::M91), Winner(MatchId::M92)),
        BracketMatch::new(MatchId::M100, QuarterFinal, Winner(MatchId::M95), Winner(MatchId::M96)),
        BracketMatch::new(MatchId::M101, SemiFinal, Winner(MatchId::M97), Winner(MatchId::M98)),
        BracketMatch::new(MatchId::M102, SemiFinal, Winner(MatchId::M99), Winner(MatchId::M100)),
        BracketMatch::new(MatchId::M103, ThirdPlace, Loser(MatchId::M101), Loser(MatchId::M102)),
        BracketMatch::new(MatchId::M104, Final, Winner(MatchId::M101), Winner(MatchId::M102)),
    ]
};

/// The teams feeding the round of 32: the settled group positions and the third-place
/// assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Seeding {
    places: [[Option<TeamId>; 3]; GROUPS],
    assignment: Option<ThirdPlaceAssignment>,
}

impl Seeding {
    /// Creates a new `Seeding` without any teams.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the settled top 3 positions of a group. Positions that are not settled are left
    /// empty.
    pub fn set_group(&mut self, standings: &GroupStandings) {
        let places = &mut self.places[standings.group.index()];
        for (index, place) in places.iter_mut().enumerate() {
            *place = standings.settled_team(index + 1);
        }
    }

    /// Sets the team at `position` (1 to 3) of `group`. Other positions are ignored.
    pub fn set_place(&mut self, group: GroupLetter, position: usize, team: Option<TeamId>) {
        if let Some(place) = self.places[group.index()].get_mut(position.wrapping_sub(1)) {
            *place = team;
        }
    }

    #[inline]
    pub fn set_assignment(&mut self, assignment: Option<ThirdPlaceAssignment>) {
        self.assignment = assignment;
    }

    #[inline]
    pub fn assignment(&self) -> Option<&ThirdPlaceAssignment> {
        self.assignment.as_ref()
    }

    /// Returns the team at `position` (1 to 3) of `group`.
    pub fn place(&self, group: GroupLetter, position: usize) -> Option<TeamId> {
        self.places[group.index()]
            .get(position.wrapping_sub(1))
            .copied()
            .flatten()
    }

    /// Returns the third-placed team drawn into match `id`.
    pub fn third_place(&self, id: MatchId) -> Option<TeamId> {
        let group = self.assignment.as_ref()?.group_for(id)?;
        self.place(group, 3)
    }
}

/// The knockout bracket with its recorded winners.
///
/// A recorded score belongs to the winner of its match: `home` counts for the team of the first
/// slot, `away` for the team of the second. A level score is a match decided on penalties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bracket {
    seeding: Seeding,
    winners: [Option<TeamId>; NUM_MATCHES],
    scores: [Option<Score>; NUM_MATCHES],
}

impl Bracket {
    /// Creates a new `Bracket` without any recorded winners.
    pub fn new(seeding: Seeding) -> Self {
        Self {
            seeding,
            winners: [None; NUM_MATCHES],
            scores: [None; NUM_MATCHES],
        }
    }

    /// Resumes a bracket from previously recorded winners and scores. Winners which are not one
    /// of the teams of their match are dropped, and so are scores without a valid winner or
    /// contradicting it.
    pub fn resume<I, S>(seeding: Seeding, winners: I, scores: S) -> Self
    where
        I: IntoIterator<Item = (MatchId, TeamId)>,
        S: IntoIterator<Item = (MatchId, Score)>,
    {
        let mut this = Self::new(seeding);
        for (id, team) in winners {
            this.winners[id.index()] = Some(team);
        }

        for (id, score) in scores {
            this.scores[id.index()] = Some(score);
        }

        let dropped = this.reconcile();
        if !dropped.is_empty() {
            log::debug!("Dropped stale winners of matches {:?}", dropped);
        }

        this
    }

    /// Returns the definitions of all knockout matches, ordered by number.
    #[inline]
    pub fn matches() -> &'static [BracketMatch] {
        &MATCHES
    }

    /// Returns the definition of match `id`.
    #[inline]
    pub fn get(id: MatchId) -> &'static BracketMatch {
        &MATCHES[id.index()]
    }

    /// Returns an iterator over the matches fed directly by match `id`.
    pub fn dependents(id: MatchId) -> impl Iterator<Item = MatchId> {
        MATCHES
            .iter()
            .filter(move |m| m.slots.iter().any(|slot| slot.source() == Some(id)))
            .map(|m| m.id)
    }

    #[inline]
    pub fn seeding(&self) -> &Seeding {
        &self.seeding
    }

    /// Replaces the seeding and drops all winners that are no longer valid. Returns the
    /// matches whose winner was dropped.
    pub fn set_seeding(&mut self, seeding: Seeding) -> Vec<MatchId> {
        self.seeding = seeding;
        self.reconcile()
    }

    /// Resolves the two teams of match `id`. A slot is [`TBD`] while its upstream result is
    /// unknown.
    ///
    /// [`TBD`]: EntrantSpot::TBD
    pub fn resolve(&self, id: MatchId) -> [EntrantSpot<TeamId>; 2] {
        let [first, second] = Self::get(id).slots;
        [self.resolve_slot(id, first), self.resolve_slot(id, second)]
    }

    fn resolve_slot(&self, id: MatchId, slot: Slot) -> EntrantSpot<TeamId> {
        let team = match slot {
            Slot::First(group) => self.seeding.place(group, 1),
            Slot::Second(group) => self.seeding.place(group, 2),
            Slot::Third(_) => self.seeding.third_place(id),
            Slot::Winner(source) => self.winner(source),
            Slot::Loser(source) => self.loser(source),
        };

        EntrantSpot::new(team)
    }

    /// Returns the recorded winner of match `id` if both teams of the match are known and the
    /// winner is one of them.
    pub fn winner(&self, id: MatchId) -> Option<TeamId> {
        let winner = self.winners[id.index()]?;

        match self.resolve(id) {
            [EntrantSpot::Entrant(first), EntrantSpot::Entrant(second)]
                if winner == first || winner == second =>
            {
                Some(winner)
            }
            _ => None,
        }
    }

    /// Returns the other team of match `id` once a valid winner is recorded.
    pub fn loser(&self, id: MatchId) -> Option<TeamId> {
        let winner = self.winner(id)?;

        match self.resolve(id) {
            [EntrantSpot::Entrant(first), EntrantSpot::Entrant(second)] => {
                Some(if first == winner { second } else { first })
            }
            _ => None,
        }
    }

    /// Returns the recorded score of match `id` if the match has a valid winner.
    pub fn score(&self, id: MatchId) -> Option<Score> {
        self.winner(id)?;
        self.scores[id.index()]
    }

    /// Returns an iterator over all recorded winners.
    pub fn winners(&self) -> impl Iterator<Item = (MatchId, TeamId)> + '_ {
        MATCHES
            .iter()
            .zip(self.winners.iter())
            .filter_map(|(m, winner)| winner.map(|winner| (m.id, winner)))
    }

    /// Returns an iterator over all recorded scores.
    pub fn scores(&self) -> impl Iterator<Item = (MatchId, Score)> + '_ {
        MATCHES
            .iter()
            .zip(self.scores.iter())
            .filter_map(|(m, score)| score.map(|score| (m.id, score)))
    }

    /// Returns `true` if both teams of match `id` are known.
    pub fn is_playable(&self, id: MatchId) -> bool {
        self.resolve(id).iter().all(EntrantSpot::is_entrant)
    }

    /// Returns all matches with both teams known.
    pub fn playable(&self) -> Vec<MatchId> {
        MATCHES
            .iter()
            .map(|m| m.id)
            .filter(|id| self.is_playable(*id))
            .collect()
    }

    /// Records `team` as the winner of match `id` without a score. See [`record_result`].
    ///
    /// [`record_result`]: Self::record_result
    #[inline]
    pub fn record_winner(&mut self, id: MatchId, team: TeamId) -> Result<Vec<MatchId>> {
        self.record_result(id, team, None)
    }

    /// Records `team` as the winner of match `id`, replacing any earlier score with `score`. If
    /// this changes the winner, all winners depending on the match are cleared. Returns the
    /// matches whose winner was cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotsNotPopulated`] if the teams of the match are not both known,
    /// [`Error::NotInMatch`] if `team` does not play in the match and
    /// [`Error::ScoreMismatch`] if `score` has the other team ahead. Nothing is changed in
    /// any case.
    pub fn record_result(
        &mut self,
        id: MatchId,
        team: TeamId,
        score: Option<Score>,
    ) -> Result<Vec<MatchId>> {
        let (first, second) = match self.resolve(id) {
            [EntrantSpot::Entrant(first), EntrantSpot::Entrant(second)] => (first, second),
            _ => return Err(Error::SlotsNotPopulated(id)),
        };

        if team != first && team != second {
            return Err(Error::NotInMatch { id, team });
        }

        if let Some(score) = score {
            if !agrees(score, team == first) {
                return Err(Error::ScoreMismatch { id, team });
            }
        }

        self.scores[id.index()] = score;

        let previous = self.winners[id.index()].replace(team);
        if previous == Some(team) {
            return Ok(Vec::new());
        }

        log::debug!(
            "Recorded winner {} of match {} (previous: {:?})",
            team,
            id,
            previous
        );

        Ok(self.invalidate_downstream(id))
    }

    /// Clears the winner of match `id` and all winners depending on it. Returns the cleared
    /// downstream matches.
    pub fn clear_winner(&mut self, id: MatchId) -> Vec<MatchId> {
        self.scores[id.index()] = None;

        match self.winners[id.index()].take() {
            Some(_) => self.invalidate_downstream(id),
            None => Vec::new(),
        }
    }

    /// Clears the winners of all matches depending on match `id`, directly or through other
    /// matches. Returns the matches that had a winner.
    pub fn invalidate_downstream(&mut self, id: MatchId) -> Vec<MatchId> {
        let mut cleared = Vec::new();
        let mut stack: Vec<MatchId> = Self::dependents(id).collect();

        while let Some(next) = stack.pop() {
            self.scores[next.index()] = None;
            if self.winners[next.index()].take().is_some() {
                cleared.push(next);
            }

            stack.extend(Self::dependents(next));
        }

        cleared.sort_unstable();
        cleared.dedup();

        if !cleared.is_empty() {
            log::debug!("Cleared winners downstream of match {}: {:?}", id, cleared);
        }

        cleared
    }

    /// Drops every recorded winner that is not one of the teams of its match, together with
    /// its score. Scores without a winner or contradicting it are dropped as well. Returns the
    /// matches whose winner was dropped.
    pub fn reconcile(&mut self) -> Vec<MatchId> {
        let mut dropped = Vec::new();

        // Matches are ordered so that every match comes after the matches it depends on.
        for m in MATCHES.iter() {
            let index = m.id.index();

            if self.winners[index].is_some() && self.winner(m.id).is_none() {
                self.winners[index] = None;
                dropped.push(m.id);
            }

            if let Some(score) = self.scores[index] {
                let valid = match (self.winner(m.id), self.resolve(m.id)[0]) {
                    (Some(winner), EntrantSpot::Entrant(first)) => agrees(score, winner == first),
                    _ => false,
                };

                if !valid {
                    log::debug!("Dropped score {:?} of match {}", score, m.id);
                    self.scores[index] = None;
                }
            }
        }

        dropped
    }

    /// Returns the winner of the final.
    #[inline]
    pub fn champion(&self) -> Option<TeamId> {
        self.winner(MatchId::M104)
    }

    /// Returns the teams finishing 1st to 4th, as far as known.
    pub fn placements(&self) -> [Option<TeamId>; 4] {
        [
            self.winner(MatchId::M104),
            self.loser(MatchId::M104),
            self.winner(MatchId::M103),
            self.loser(MatchId::M103),
        ]
    }
}

/// Returns `true` if `score` allows the team of the first slot to win (`first_won`) or the team
/// of the second slot. Level scores allow either.
fn agrees(score: Score, first_won: bool) -> bool {
    match score.home.cmp(&score.away) {
        std::cmp::Ordering::Greater => first_won,
        std::cmp::Ordering::Less => !first_won,
        std::cmp::Ordering::Equal => true,
    }
}

#[cfg(test)]
mod tests {
    use super::{Bracket, MatchId, Round, Seeding, Slot, MATCHES, NUM_MATCHES};
    use crate::third_place::lookup;
    use crate::{EntrantSpot, Error, GroupLetter, Score, TeamId};

    /// Team ids encode their group place: `100 * position + group index`.
    fn team(group: GroupLetter, position: usize) -> TeamId {
        TeamId(100 * position as u32 + group.index() as u32)
    }

    fn seeding() -> Seeding {
        let mut seeding = Seeding::new();
        for group in GroupLetter::ALL {
            for position in 1..=3 {
                seeding.set_place(group, position, Some(team(group, position)));
            }
        }

        seeding.set_assignment(Some(lookup("ABDEGIKL".parse().unwrap()).unwrap()));
        seeding
    }

    /// Records the first team of every match as the winner, round by round.
    fn play_all(bracket: &mut Bracket) {
        for m in MATCHES.iter() {
            let first = bracket.resolve(m.id)[0].entrant().unwrap();
            bracket.record_winner(m.id, first).unwrap();
        }
    }

    #[test]
    fn test_match_id() {
        assert_eq!(MatchId::new(73), Ok(MatchId::M73));
        assert_eq!(MatchId::new(104), Ok(MatchId::M104));
        assert_eq!(MatchId::new(72), Err(Error::UnknownMatch(72)));
        assert_eq!(MatchId::new(105), Err(Error::UnknownMatch(105)));
        assert_eq!(MatchId::M73.index(), 0);
        assert_eq!(MatchId::M104.index(), 31);
    }

    #[test]
    fn test_structure() {
        assert_eq!(MATCHES.len(), NUM_MATCHES);

        let mut rounds = [0; 6];
        for (index, m) in MATCHES.iter().enumerate() {
            assert_eq!(m.id.index(), index);
            rounds[m.round as usize] += 1;

            for slot in m.slots.iter() {
                if let Some(source) = slot.source() {
                    assert!(source < m.id);
                }
            }
        }

        assert_eq!(rounds, [16, 8, 4, 2, 1, 1]);

        // Only the third place match takes losers.
        let losers: Vec<MatchId> = MATCHES
            .iter()
            .filter(|m| m.slots.iter().any(|s| matches!(s, Slot::Loser(_))))
            .map(|m| m.id)
            .collect();
        assert_eq!(losers, [MatchId::M103]);
        assert_eq!(Bracket::get(MatchId::M103).round, Round::ThirdPlace);

        // Every match except the semi-finals feeds exactly one match.
        for m in MATCHES.iter() {
            let count = Bracket::dependents(m.id).count();
            match m.round {
                Round::SemiFinal => assert_eq!(count, 2),
                Round::ThirdPlace | Round::Final => assert_eq!(count, 0),
                _ => assert_eq!(count, 1),
            }
        }

        assert_eq!(Bracket::get(MatchId::M74).slots[1].to_string(), "3ABCDF");
        assert_eq!(Bracket::get(MatchId::M103).slots[0].to_string(), "L101");
    }

    #[test]
    fn test_resolve_round_of_32() {
        use GroupLetter::*;

        let bracket = Bracket::new(seeding());

        assert_eq!(
            bracket.resolve(MatchId::M73),
            [EntrantSpot::Entrant(team(A, 2)), EntrantSpot::Entrant(team(B, 2))]
        );
        // ABDEGIKL puts the third of group A into match 74 and L into 87.
        assert_eq!(
            bracket.resolve(MatchId::M74),
            [EntrantSpot::Entrant(team(E, 1)), EntrantSpot::Entrant(team(A, 3))]
        );
        assert_eq!(
            bracket.resolve(MatchId::M87),
            [EntrantSpot::Entrant(team(K, 1)), EntrantSpot::Entrant(team(L, 3))]
        );
        assert_eq!(bracket.resolve(MatchId::M89), [EntrantSpot::TBD, EntrantSpot::TBD]);

        let playable = bracket.playable();
        assert_eq!(playable.len(), 16);
        assert!(playable.iter().all(|id| Bracket::get(*id).round == Round::RoundOf32));
    }

    #[test]
    fn test_resolve_without_assignment() {
        let mut seeding = seeding();
        seeding.set_assignment(None);
        let bracket = Bracket::new(seeding);

        assert_eq!(bracket.resolve(MatchId::M74)[1], EntrantSpot::TBD);
        assert!(!bracket.is_playable(MatchId::M74));
        assert!(bracket.is_playable(MatchId::M73));
        assert_eq!(bracket.playable().len(), 8);
    }

    #[test]
    fn test_record_winner() {
        use GroupLetter::*;

        let mut bracket = Bracket::new(seeding());

        assert_eq!(
            bracket.record_winner(MatchId::M89, team(E, 1)),
            Err(Error::SlotsNotPopulated(MatchId::M89))
        );
        assert_eq!(
            bracket.record_winner(MatchId::M74, team(B, 1)),
            Err(Error::NotInMatch {
                id: MatchId::M74,
                team: team(B, 1)
            })
        );
        assert_eq!(bracket.winners().count(), 0);

        assert_eq!(bracket.record_winner(MatchId::M74, team(A, 3)), Ok(vec![]));
        assert_eq!(
            bracket.resolve(MatchId::M89),
            [EntrantSpot::Entrant(team(A, 3)), EntrantSpot::TBD]
        );
        assert_eq!(
            bracket.record_winner(MatchId::M89, team(A, 3)),
            Err(Error::SlotsNotPopulated(MatchId::M89))
        );

        bracket.record_winner(MatchId::M77, team(I, 1)).unwrap();
        assert!(bracket.is_playable(MatchId::M89));
        bracket.record_winner(MatchId::M89, team(I, 1)).unwrap();
        assert_eq!(bracket.winner(MatchId::M89), Some(team(I, 1)));
        assert_eq!(bracket.loser(MatchId::M89), Some(team(A, 3)));
    }

    #[test]
    fn test_change_winner_invalidates_downstream() {
        use GroupLetter::*;

        let mut bracket = Bracket::new(seeding());
        play_all(&mut bracket);

        assert_eq!(bracket.winners().count(), NUM_MATCHES);
        // The first team wins everything: 1E beat 3A, then the winner of 74 keeps winning.
        assert_eq!(bracket.champion(), Some(team(E, 1)));

        // Recording the same winner again changes nothing.
        assert_eq!(bracket.record_winner(MatchId::M74, team(E, 1)), Ok(vec![]));

        let cleared = bracket.record_winner(MatchId::M74, team(A, 3)).unwrap();
        assert_eq!(
            cleared,
            [
                MatchId::M89,
                MatchId::M97,
                MatchId::M101,
                MatchId::M103,
                MatchId::M104
            ]
        );

        for id in cleared.iter() {
            assert_eq!(bracket.winner(*id), None);
        }

        assert_eq!(bracket.champion(), None);
        assert_eq!(bracket.placements(), [None, None, None, None]);
        // The other half of the bracket is untouched.
        assert!(bracket.winner(MatchId::M102).is_some());
        assert!(bracket.winner(MatchId::M90).is_some());
        assert_eq!(bracket.winners().count(), NUM_MATCHES - cleared.len());

        // Match 89 is playable again with the new winner.
        assert_eq!(
            bracket.resolve(MatchId::M89)[0],
            EntrantSpot::Entrant(team(A, 3))
        );
    }

    #[test]
    fn test_clear_winner() {
        let mut bracket = Bracket::new(seeding());
        play_all(&mut bracket);

        let cleared = bracket.clear_winner(MatchId::M102);
        assert_eq!(cleared, [MatchId::M103, MatchId::M104]);
        assert_eq!(bracket.winner(MatchId::M102), None);
        assert!(bracket.winner(MatchId::M101).is_some());
        assert!(!bracket.is_playable(MatchId::M103));

        assert_eq!(bracket.clear_winner(MatchId::M102), vec![]);
    }

    #[test]
    fn test_placements() {
        let mut bracket = Bracket::new(seeding());
        play_all(&mut bracket);

        let placements = bracket.placements();
        assert!(placements.iter().all(Option::is_some));

        assert_eq!(placements[0], bracket.winner(MatchId::M101));
        assert_eq!(placements[1], bracket.winner(MatchId::M102));
        assert_eq!(placements[2], bracket.loser(MatchId::M101));
        assert_eq!(placements[3], bracket.loser(MatchId::M102));
    }

    #[test]
    fn test_set_seeding_drops_stale_winners() {
        use GroupLetter::*;

        let mut bracket = Bracket::new(seeding());
        play_all(&mut bracket);

        // Group E is changed: a different team wins it.
        let mut seeding = seeding();
        seeding.set_place(E, 1, Some(TeamId(999)));

        let dropped = bracket.set_seeding(seeding);
        assert_eq!(
            dropped,
            [
                MatchId::M74,
                MatchId::M89,
                MatchId::M97,
                MatchId::M101,
                MatchId::M103,
                MatchId::M104
            ]
        );
        assert_eq!(
            bracket.resolve(MatchId::M74)[0],
            EntrantSpot::Entrant(TeamId(999))
        );
        assert!(bracket.winner(MatchId::M78).is_some());
    }

    #[test]
    fn test_reconcile_requires_both_teams() {
        use GroupLetter::*;

        let mut bracket = Bracket::new(seeding());
        bracket.record_winner(MatchId::M74, team(E, 1)).unwrap();
        bracket.record_winner(MatchId::M77, team(I, 1)).unwrap();
        // The winner of match 89 came through match 77.
        bracket.record_winner(MatchId::M89, team(I, 1)).unwrap();

        let mut seeding = seeding();
        seeding.set_place(E, 1, None);

        assert_eq!(bracket.set_seeding(seeding), [MatchId::M74, MatchId::M89]);
        assert_eq!(
            bracket.resolve(MatchId::M89),
            [EntrantSpot::TBD, EntrantSpot::Entrant(team(I, 1))]
        );
        assert_eq!(bracket.winner(MatchId::M89), None);
        assert_eq!(bracket.winner(MatchId::M77), Some(team(I, 1)));
    }

    #[test]
    fn test_resume() {
        let mut bracket = Bracket::new(seeding());
        play_all(&mut bracket);

        bracket
            .record_result(MatchId::M73, team(GroupLetter::A, 2), Some(Score::new(2, 1)))
            .unwrap();

        let winners: Vec<_> = bracket.winners().collect();
        let scores: Vec<_> = bracket.scores().collect();
        let resumed = Bracket::resume(seeding(), winners.clone(), scores.clone());
        assert_eq!(resumed, bracket);

        // Without seeding every recorded winner is stale, and so is every score.
        let resumed = Bracket::resume(Seeding::new(), winners, scores);
        assert_eq!(resumed.winners().count(), 0);
        assert_eq!(resumed.scores().count(), 0);
    }

    #[test]
    fn test_record_result() {
        use GroupLetter::*;

        let mut bracket = Bracket::new(seeding());

        // 2A is the first team of match 73.
        assert_eq!(
            bracket.record_result(MatchId::M73, team(B, 2), Some(Score::new(2, 1))),
            Err(Error::ScoreMismatch {
                id: MatchId::M73,
                team: team(B, 2)
            })
        );
        assert_eq!(bracket.winner(MatchId::M73), None);

        bracket
            .record_result(MatchId::M73, team(A, 2), Some(Score::new(2, 1)))
            .unwrap();
        assert_eq!(bracket.score(MatchId::M73), Some(Score::new(2, 1)));

        // A level score is decided on penalties, either team may win.
        bracket
            .record_result(MatchId::M73, team(B, 2), Some(Score::new(1, 1)))
            .unwrap();
        assert_eq!(bracket.winner(MatchId::M73), Some(team(B, 2)));
        assert_eq!(bracket.score(MatchId::M73), Some(Score::new(1, 1)));

        // Recording only the winner removes the score.
        bracket.record_winner(MatchId::M73, team(B, 2)).unwrap();
        assert_eq!(bracket.score(MatchId::M73), None);

        bracket
            .record_result(MatchId::M73, team(B, 2), Some(Score::new(0, 3)))
            .unwrap();
        bracket.clear_winner(MatchId::M73);
        assert_eq!(bracket.score(MatchId::M73), None);
        assert_eq!(bracket.scores().count(), 0);
    }

    #[test]
    fn test_invalidate_downstream_clears_scores() {
        use GroupLetter::*;

        let mut bracket = Bracket::new(seeding());
        play_all(&mut bracket);

        // 1E is the first team of match 74 and won it, its winner then won match 89.
        bracket
            .record_result(MatchId::M74, team(E, 1), Some(Score::new(3, 0)))
            .unwrap();
        bracket
            .record_result(MatchId::M89, team(E, 1), Some(Score::new(1, 0)))
            .unwrap();
        bracket
            .record_result(MatchId::M90, team(A, 2), Some(Score::new(2, 2)))
            .unwrap();

        bracket.record_winner(MatchId::M74, team(A, 3)).unwrap();
        assert_eq!(bracket.score(MatchId::M74), None);
        assert_eq!(bracket.score(MatchId::M89), None);
        assert_eq!(bracket.scores().collect::<Vec<_>>(), [(MatchId::M90, Score::new(2, 2))]);

        // A seeding change dropping the winner of match 90 drops its score too.
        let mut seeding = seeding();
        seeding.set_place(A, 2, Some(TeamId(999)));
        bracket.set_seeding(seeding);
        assert_eq!(bracket.scores().count(), 0);
    }
}
