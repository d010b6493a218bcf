//! CSV rendering of an assignment for spreadsheets and in-game mail drafts.
//! One row per placed or benched player: team, role, 1-based slot within that role list.

use std::io::Write;

use serde::Serialize;

use crate::assignment::strategy::{AssignmentResult, Team, TeamRoster};
use crate::data::directory::Candidate;
use crate::data::selection::Role;

pub const BENCH_LABEL: &str = "bench";

#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    team: &'a str,
    role: &'a str,
    slot: usize,
    name: &'a str,
    power: f64,
    secondary_stat: f64,
    category: &'a str,
}

impl<'a> RosterRow<'a> {
    fn new(team: &'a str, role: &'a str, slot: usize, candidate: &'a Candidate) -> Self {
        Self {
            team,
            role,
            slot,
            name: &candidate.name,
            power: candidate.power,
            secondary_stat: candidate.secondary_stat,
            category: &candidate.category,
        }
    }
}

pub fn write_assignment_csv<W: Write>(writer: W, result: &AssignmentResult) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for team in [Team::A, Team::B] {
        write_roster(&mut csv_writer, team.label(), result.roster(team))?;
    }
    for (index, candidate) in result.bench.iter().enumerate() {
        csv_writer.serialize(RosterRow::new(BENCH_LABEL, "", index + 1, candidate))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_roster<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    team: &str,
    roster: &TeamRoster,
) -> csv::Result<()> {
    for role in [Role::Starter, Role::Substitute] {
        for (index, candidate) in roster.role(role).iter().enumerate() {
            csv_writer.serialize(RosterRow::new(team, role.as_str(), index + 1, candidate))?;
        }
    }
    Ok(())
}

pub fn assignment_csv_string(result: &AssignmentResult) -> csv::Result<String> {
    let mut buffer = Vec::new();
    write_assignment_csv(&mut buffer, result)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
