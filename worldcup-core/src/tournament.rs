use std::collections::{BTreeMap, HashSet};

use crate::bracket::{Bracket, MatchId, Seeding};
use crate::group::{Group, Score};
use crate::third_place::ThirdPlaceRanking;
use crate::tiebreak::GroupStandings;
use crate::{Error, GroupLetter, Result, Team, TeamId, GROUPS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete snapshot of the tournament: teams, group results and the recorded knockout
/// winners with their scores.
///
/// All derived state (standings, third places, the bracket) is recomputed from the snapshot on
/// request. Every mutation keeps the snapshot consistent: a recorded winner that is no longer one
/// of the teams of its match is removed in the same call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tournament {
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub winners: BTreeMap<MatchId, TeamId>,
    /// Knockout scores, `home` being the team of the first slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scores: BTreeMap<MatchId, Score>,
    /// Placeholder teams mapped to the team that won their playoff.
    #[cfg_attr(feature = "serde", serde(default))]
    pub playoffs: BTreeMap<TeamId, TeamId>,
}

impl Tournament {
    /// Creates a new `Tournament` from its 48 teams. The groups are formed in the order the
    /// teams are given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTournament`] if a group does not have exactly 4 teams or a team
    /// id is used twice.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let mut groups = Vec::with_capacity(GROUPS);

        for letter in GroupLetter::ALL {
            let members: Vec<TeamId> = teams
                .iter()
                .filter(|team| team.group == letter)
                .map(|team| team.id)
                .collect();

            let members: [TeamId; 4] = members.try_into().map_err(|members: Vec<TeamId>| {
                Error::InvalidTournament(format!(
                    "group {} has {} teams instead of 4",
                    letter,
                    members.len()
                ))
            })?;

            groups.push(Group::new(letter, members));
        }

        let this = Self {
            teams,
            groups,
            winners: BTreeMap::new(),
            scores: BTreeMap::new(),
            playoffs: BTreeMap::new(),
        };

        this.validate()?;
        Ok(this)
    }

    /// Checks that the snapshot is well-formed: every group exists once with 4 distinct known
    /// teams of that group, and every playoff substitution replaces a placeholder team with a
    /// known team.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for team in self.teams.iter() {
            if !ids.insert(team.id) {
                return Err(Error::InvalidTournament(format!(
                    "team id {} is used twice",
                    team.id
                )));
            }
        }

        for letter in GroupLetter::ALL {
            let mut groups = self.groups.iter().filter(|group| group.letter == letter);

            let group = groups
                .next()
                .ok_or_else(|| Error::InvalidTournament(format!("group {} is missing", letter)))?;

            if groups.next().is_some() {
                return Err(Error::InvalidTournament(format!(
                    "group {} is defined twice",
                    letter
                )));
            }

            for (index, id) in group.teams.iter().enumerate() {
                let team = self.find(*id).ok_or(Error::UnknownTeam(*id))?;

                if team.group != letter || group.teams[..index].contains(id) {
                    return Err(Error::InvalidTournament(format!(
                        "team {} does not belong to group {}",
                        id, letter
                    )));
                }
            }
        }

        for (placeholder, qualified) in self.playoffs.iter() {
            if self.find(*qualified).is_none() {
                return Err(Error::UnknownTeam(*qualified));
            }

            match self.find(*placeholder) {
                Some(team) if team.playoff => (),
                Some(_) => {
                    return Err(Error::InvalidTournament(format!(
                        "team {} is not a playoff placeholder",
                        placeholder
                    )))
                }
                None => return Err(Error::UnknownTeam(*placeholder)),
            }
        }

        Ok(())
    }

    #[inline]
    pub fn group(&self, letter: GroupLetter) -> Option<&Group> {
        self.groups.iter().find(|group| group.letter == letter)
    }

    #[inline]
    pub fn group_mut(&mut self, letter: GroupLetter) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.letter == letter)
    }

    fn find(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    /// Returns the team with the given `id`. A resolved playoff placeholder returns the team
    /// that won the playoff, if it is known.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        match self.playoffs.get(&id) {
            Some(qualified) => self.find(*qualified).or_else(|| self.find(id)),
            None => self.find(id),
        }
    }

    /// Records `qualified` as the winner of the playoff of the placeholder team `placeholder`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTeam`] if either team is not part of the tournament.
    pub fn resolve_playoff(&mut self, placeholder: TeamId, qualified: TeamId) -> Result<()> {
        if self.find(qualified).is_none() {
            return Err(Error::UnknownTeam(qualified));
        }

        match self.find(placeholder) {
            Some(team) if team.playoff => {
                self.playoffs.insert(placeholder, qualified);
                Ok(())
            }
            Some(_) => Err(Error::InvalidTournament(format!(
                "team {} is not a playoff placeholder",
                placeholder
            ))),
            None => Err(Error::UnknownTeam(placeholder)),
        }
    }

    /// Computes the standings of a single group.
    pub fn standings(&self, letter: GroupLetter) -> Result<GroupStandings> {
        self.group(letter)
            .map(Group::standings)
            .ok_or_else(|| Error::UnknownGroup(letter.to_string()))
    }

    /// Computes the standings of all groups in alphabetical order.
    pub fn all_standings(&self) -> Vec<GroupStandings> {
        GroupLetter::ALL
            .iter()
            .filter_map(|letter| self.group(*letter))
            .map(Group::standings)
            .collect()
    }

    /// Ranks the third-placed teams of all groups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteThirdPlaces`] while any group has not settled its third place.
    pub fn third_places(&self) -> Result<ThirdPlaceRanking> {
        ThirdPlaceRanking::rank(
            self.all_standings()
                .iter()
                .filter_map(GroupStandings::third_place),
        )
    }

    /// Builds the round-of-32 seeding from the settled group positions. The third-place slots
    /// stay empty until all third places are settled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCombination`] if the qualified third places form no valid
    /// combination.
    pub fn seeding(&self) -> Result<Seeding> {
        let mut seeding = Seeding::new();
        for standings in self.all_standings() {
            seeding.set_group(&standings);
        }

        match self.third_places() {
            Ok(ranking) => seeding.set_assignment(Some(ranking.assignment()?)),
            Err(Error::IncompleteThirdPlaces { found }) => {
                log::debug!("Third-place slots open, {} of {} groups settled", found, GROUPS);
            }
            Err(err) => return Err(err),
        }

        Ok(seeding)
    }

    /// Builds the bracket with the recorded winners and scores.
    pub fn bracket(&self) -> Result<Bracket> {
        Ok(Bracket::resume(
            self.seeding()?,
            self.winners.iter().map(|(id, team)| (*id, *team)),
            self.scores.iter().map(|(id, score)| (*id, *score)),
        ))
    }

    /// Updates the score of match `number` of group `letter`. Returns the knockout matches whose
    /// recorded winner was removed because the change altered their teams.
    pub fn update_score(
        &mut self,
        letter: GroupLetter,
        number: u8,
        score: Option<Score>,
    ) -> Result<Vec<MatchId>> {
        let group = self
            .group_mut(letter)
            .ok_or_else(|| Error::UnknownGroup(letter.to_string()))?;

        if !group.update_match(number, score)? {
            return Ok(Vec::new());
        }

        self.sync_winners()
    }

    /// Records a manual order for an unresolved tie in group `letter`. Returns the knockout
    /// matches whose recorded winner was removed.
    pub fn decide_tie(&mut self, letter: GroupLetter, order: Vec<TeamId>) -> Result<Vec<MatchId>> {
        self.group_mut(letter)
            .ok_or_else(|| Error::UnknownGroup(letter.to_string()))?
            .decide_tie(order)?;

        self.sync_winners()
    }

    /// Records the winner of a knockout match. Returns the downstream matches whose winner was
    /// cleared.
    #[inline]
    pub fn record_winner(&mut self, id: MatchId, team: TeamId) -> Result<Vec<MatchId>> {
        self.record_result(id, team, None)
    }

    /// Records the winner of a knockout match with an optional score, see
    /// [`Bracket::record_result`]. Returns the downstream matches whose winner was cleared.
    pub fn record_result(
        &mut self,
        id: MatchId,
        team: TeamId,
        score: Option<Score>,
    ) -> Result<Vec<MatchId>> {
        let mut bracket = self.bracket()?;
        let cleared = bracket.record_result(id, team, score)?;

        self.store(&bracket);
        Ok(cleared)
    }

    /// Clears the winner of a knockout match and everything depending on it.
    pub fn clear_winner(&mut self, id: MatchId) -> Result<Vec<MatchId>> {
        let mut bracket = self.bracket()?;
        let mut cleared = bracket.clear_winner(id);

        if self.winners.contains_key(&id) {
            cleared.insert(0, id);
        }

        self.store(&bracket);
        Ok(cleared)
    }

    /// Removes every recorded winner that is no longer valid.
    fn sync_winners(&mut self) -> Result<Vec<MatchId>> {
        let bracket = self.bracket()?;
        let winners: BTreeMap<MatchId, TeamId> = bracket.winners().collect();

        let dropped: Vec<MatchId> = self
            .winners
            .keys()
            .filter(|id| !winners.contains_key(id))
            .copied()
            .collect();

        if !dropped.is_empty() {
            log::warn!("Removed stale knockout winners of matches {:?}", dropped);
        }

        self.store(&bracket);
        Ok(dropped)
    }

    fn store(&mut self, bracket: &Bracket) {
        self.winners = bracket.winners().collect();
        self.scores = bracket.scores().collect();
    }
}
