use std::fmt::Write;

use worldcup_core::bracket::Bracket;
use worldcup_core::table::Table;
use worldcup_core::{EntrantSpot, GroupStandings, TeamId, ThirdPlaceRanking, Tournament};

/// Returns the code of a team, following playoff substitutions.
pub fn code(tournament: &Tournament, id: TeamId) -> String {
    match tournament.team(id) {
        Some(team) => team.code.clone(),
        None => format!("#{}", id),
    }
}

/// Renders a table with a team column after the first column. Advancing teams are marked with
/// `>`, undecided ties with `*`.
pub fn table(table: &Table, tournament: &Tournament) -> String {
    let mut header: Vec<String> = table.keys().map(str::to_owned).collect();
    header.insert(header.len().min(1), String::from("Team"));

    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row.values.iter().map(ToString::to_string).collect();
            let mut team = code(tournament, row.team);
            if row.tied {
                team.push('*');
            }

            cells.insert(cells.len().min(1), team);
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for cells in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut buf = String::new();
    line(&mut buf, ' ', &header, &widths);
    for (row, cells) in table.iter().zip(rows.iter()) {
        line(&mut buf, if row.highlight { '>' } else { ' ' }, cells, &widths);
    }

    buf
}

fn line(buf: &mut String, marker: char, cells: &[String], widths: &[usize]) {
    buf.push(marker);
    for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        // The team column is left aligned, all numbers right aligned.
        if index == 1 {
            let _ = write!(buf, " {:<width$}", cell, width = width);
        } else {
            let _ = write!(buf, " {:>width$}", cell, width = width);
        }
    }

    buf.push('\n');
}

pub fn group(standings: &GroupStandings, tournament: &Tournament) -> String {
    let mut buf = format!("Group {}", standings.group);

    if let Some(group) = tournament.group(standings.group) {
        let played = group.scores().iter().flatten().count();
        if played < 6 {
            let _ = write!(buf, " ({} of 6 matches played)", played);
        }
    }

    buf.push('\n');
    buf.push_str(&table(&Table::group(standings), tournament));

    for tie in standings.ties() {
        let teams: Vec<String> = tie.teams.iter().map(|id| code(tournament, *id)).collect();

        let _ = writeln!(
            buf,
            "* {} at positions {}-{}: {}",
            teams.join(", "),
            tie.positions().start(),
            tie.positions().end(),
            tie.reason
        );
    }

    buf
}

pub fn third_places(ranking: &ThirdPlaceRanking, tournament: &Tournament) -> String {
    let mut buf = table(&Table::third_places(ranking), tournament);
    let _ = writeln!(buf, "Qualified groups: {}", ranking.combination);

    if ranking.cutoff_tie {
        buf.push_str("* 8th and 9th are level on all criteria, ordered by group letter\n");
    }

    buf
}

pub fn bracket(bracket: &Bracket, tournament: &Tournament) -> String {
    let mut buf = String::new();
    let mut round = None;

    for m in Bracket::matches() {
        if round != Some(m.round) {
            let _ = writeln!(buf, "{}{}", if round.is_some() { "\n" } else { "" }, m.round);
            round = Some(m.round);
        }

        let winner = bracket.winner(m.id);
        let [first, second] = bracket.resolve(m.id);

        let name = |spot: EntrantSpot<TeamId>, index: usize| match spot {
            EntrantSpot::Entrant(id) if Some(id) == winner => format!("[{}]", code(tournament, id)),
            EntrantSpot::Entrant(id) => code(tournament, id),
            EntrantSpot::TBD => m.slots[index].to_string(),
        };

        let _ = write!(
            buf,
            "{:>4}  {:>8} - {:<8}",
            m.id,
            name(first, 0),
            name(second, 1)
        );

        if let Some(score) = bracket.score(m.id) {
            let _ = write!(buf, " {}", score);
        }

        buf.push('\n');
    }

    if let Some(champion) = bracket.champion() {
        let _ = writeln!(buf, "\nChampion: {}", code(tournament, champion));
    }

    buf
}
