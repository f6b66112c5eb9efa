use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Subcommand;
use worldcup_core::third_place;
use worldcup_core::{Combination, GroupLetter, MatchId, Score, Team, TeamId, Tournament};

use crate::render;
use crate::store::Store;
use crate::Error;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new snapshot from a JSON list of the 48 teams.
    Init { teams: PathBuf },
    /// Show the standings of one or all groups.
    Standings { group: Option<GroupLetter> },
    /// Show the ranking of the third-placed teams and their round-of-32 matches.
    ThirdPlace,
    /// Look up the round-of-32 matches for a set of 8 third-placed groups.
    Lookup { letters: Combination },
    /// Show the knockout bracket.
    Bracket,
    /// Enter the score of a group match.
    Score {
        group: GroupLetter,
        /// The match number within the group, 1 to 6.
        number: u8,
        home: u32,
        away: u32,
    },
    /// Remove the score of a group match.
    ClearScore { group: GroupLetter, number: u8 },
    /// Order the teams of an unresolved tie, best team first.
    Decide {
        group: GroupLetter,
        /// Team codes or ids.
        #[arg(required = true, num_args = 2..)]
        teams: Vec<String>,
    },
    /// Record the winner of a knockout match.
    Winner {
        id: u8,
        team: String,
        /// The score with the goals of the first team of the match first, e.g. `2-1`. A level
        /// score is a win on penalties.
        #[arg(long)]
        score: Option<Score>,
    },
    /// Remove the winner of a knockout match and all results depending on it.
    ClearWinner { id: u8 },
    /// Replace a playoff placeholder with the team that won the playoff.
    Playoff { placeholder: String, team: String },
}

impl Command {
    pub fn run(&self, store: &Store) -> Result<(), Error> {
        match self {
            Self::Init { teams } => {
                let teams: Vec<Team> = serde_json::from_reader(BufReader::new(File::open(teams)?))?;
                let snapshot = store.create(Tournament::new(teams)?)?;

                println!(
                    "Created {} with {} teams",
                    store.path().display(),
                    snapshot.tournament.teams.len()
                );
            }
            Self::Standings { group } => {
                let tournament = store.load()?.tournament;

                let standings = match group {
                    Some(group) => vec![tournament.standings(*group)?],
                    None => tournament.all_standings(),
                };

                for (index, standings) in standings.iter().enumerate() {
                    if index != 0 {
                        println!();
                    }

                    print!("{}", render::group(standings, &tournament));
                }
            }
            Self::ThirdPlace => {
                let tournament = store.load()?.tournament;

                match tournament.third_places() {
                    Ok(ranking) => {
                        print!("{}", render::third_places(&ranking, &tournament));

                        for (id, group) in ranking.assignment()?.iter() {
                            println!("Match {}: 3{}", id, group);
                        }
                    }
                    Err(worldcup_core::Error::IncompleteThirdPlaces { found }) => {
                        println!("{} of 12 groups have settled their third place", found);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Self::Lookup { letters } => {
                let assignment = third_place::lookup(*letters)?;

                for (id, group) in assignment.iter() {
                    println!("Match {}: 3{}", id, group);
                }
            }
            Self::Bracket => {
                let tournament = store.load()?.tournament;
                let bracket = tournament.bracket()?;

                print!("{}", render::bracket(&bracket, &tournament));
            }
            Self::Score {
                group,
                number,
                home,
                away,
            } => {
                let (dropped, line) = store.update(|tournament| {
                    let dropped =
                        tournament.update_score(*group, *number, Some(Score::new(*home, *away)))?;

                    let (first, second) = pairing(tournament, *group, *number)?;
                    let line = format!(
                        "Group {} match {}: {} {}-{} {}",
                        group,
                        number,
                        render::code(tournament, first),
                        home,
                        away,
                        render::code(tournament, second)
                    );

                    Ok::<_, Error>((dropped, line))
                })?;

                println!("{}", line);
                report_dropped(&dropped);
            }
            Self::ClearScore { group, number } => {
                let dropped = store.update(|tournament| {
                    Ok::<_, Error>(tournament.update_score(*group, *number, None)?)
                })?;

                println!("Removed score of group {} match {}", group, number);
                report_dropped(&dropped);
            }
            Self::Decide { group, teams } => {
                let dropped = store.update(|tournament| {
                    let order = teams
                        .iter()
                        .map(|team| resolve_team(tournament, team))
                        .collect::<Result<Vec<_>, _>>()?;

                    Ok::<_, Error>(tournament.decide_tie(*group, order)?)
                })?;

                println!("Recorded order for group {}: {}", group, teams.join(", "));
                report_dropped(&dropped);
            }
            Self::Winner { id, team, score } => {
                let id = MatchId::new(*id)?;

                let cleared = store.update(|tournament| {
                    let team = resolve_team(tournament, team)?;
                    Ok::<_, Error>(tournament.record_result(id, team, *score)?)
                })?;

                match score {
                    Some(score) => {
                        println!("Recorded {} as winner of match {} ({})", team, id, score)
                    }
                    None => println!("Recorded {} as winner of match {}", team, id),
                }
                report_cleared(&cleared);
            }
            Self::ClearWinner { id } => {
                let id = MatchId::new(*id)?;

                let cleared =
                    store.update(|tournament| Ok::<_, Error>(tournament.clear_winner(id)?))?;

                report_cleared(&cleared);
            }
            Self::Playoff { placeholder, team } => {
                store.update(|tournament| {
                    let placeholder = resolve_team(tournament, placeholder)?;
                    let team = resolve_team(tournament, team)?;

                    Ok::<_, Error>(tournament.resolve_playoff(placeholder, team)?)
                })?;

                println!("{} now plays for {}", team, placeholder);
            }
        }

        Ok(())
    }
}

fn pairing(
    tournament: &Tournament,
    group: GroupLetter,
    number: u8,
) -> Result<(TeamId, TeamId), Error> {
    let group = tournament
        .group(group)
        .ok_or_else(|| worldcup_core::Error::UnknownGroup(group.to_string()))?;

    Ok(group.pairing(number)?)
}

/// Finds a team by its code (case insensitive) or its numeric id.
fn resolve_team(tournament: &Tournament, name: &str) -> Result<TeamId, Error> {
    if let Some(team) = tournament
        .teams
        .iter()
        .find(|team| team.code.eq_ignore_ascii_case(name))
    {
        return Ok(team.id);
    }

    name.parse()
        .map_err(|_| Error::UnknownTeam(name.to_owned()))
}

fn report_dropped(dropped: &[MatchId]) {
    if !dropped.is_empty() {
        println!("Removed winners that no longer play in their match: {}", join(dropped));
    }
}

fn report_cleared(cleared: &[MatchId]) {
    if !cleared.is_empty() {
        println!("Cleared winners of matches {}", join(cleared));
    }
}

fn join(ids: &[MatchId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use worldcup_core::{GroupLetter, Score, Team, TeamId, Tournament};

    use super::{resolve_team, Command};
    use crate::{Args, Error};

    fn tournament() -> Tournament {
        let teams = GroupLetter::ALL
            .iter()
            .flat_map(|&group| {
                (1..=4).map(move |n| Team {
                    id: TeamId(10 * group.index() as u32 + n),
                    name: format!("Team {}{}", group, n),
                    code: format!("T{}{}", group, n),
                    flag: String::new(),
                    group,
                    playoff: false,
                })
            })
            .collect();

        Tournament::new(teams).unwrap()
    }

    #[test]
    fn test_resolve_team() {
        let tournament = tournament();

        assert_eq!(resolve_team(&tournament, "TB2").unwrap(), TeamId(12));
        assert_eq!(resolve_team(&tournament, "tb2").unwrap(), TeamId(12));
        assert_eq!(resolve_team(&tournament, "31").unwrap(), TeamId(31));
        assert!(matches!(
            resolve_team(&tournament, "XYZ"),
            Err(Error::UnknownTeam(_))
        ));
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["worldcup", "score", "c", "3", "2", "1"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Score {
                group: GroupLetter::C,
                number: 3,
                home: 2,
                away: 1
            }
        ));

        let args = Args::try_parse_from(["worldcup", "lookup", "LKJIHGFE"]).unwrap();
        match args.command {
            Command::Lookup { letters } => assert_eq!(letters.to_string(), "EFGHIJKL"),
            command => panic!("unexpected command {:?}", command),
        }

        let args =
            Args::try_parse_from(["worldcup", "winner", "89", "TA1", "--score", "1:1"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Winner {
                id: 89,
                score: Some(score),
                ..
            } if score == Score::new(1, 1)
        ));

        assert!(Args::try_parse_from(["worldcup", "winner", "89", "TA1", "--score", "x"]).is_err());
        assert!(Args::try_parse_from(["worldcup", "standings", "M"]).is_err());
        assert!(Args::try_parse_from(["worldcup", "decide", "A", "TA1"]).is_err());
    }
}
