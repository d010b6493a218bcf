use crate::assignment::normalize::TeamLimits;
use crate::assignment::strategy::{place_role, AssignmentResult, Team};
use crate::data::directory::Candidate;
use crate::data::selection::Role;

/// Each candidate goes to the team with the lower summed power in that role (team A on a
/// tie). Starters are placed first; substitutes keep their own tally.
pub fn place_balanced_round_robin(
    starters: &[Candidate],
    substitutes: &[Candidate],
    limits: &TeamLimits,
) -> AssignmentResult {
    let mut result = AssignmentResult::default();
    for (role, ranked) in [(Role::Starter, starters), (Role::Substitute, substitutes)] {
        place_role(&mut result, ranked, role, limits, |current| {
            weaker_team(current, role)
        });
    }
    result
}

fn weaker_team(result: &AssignmentResult, role: Role) -> Team {
    if result.team_b.strength(role) < result.team_a.strength(role) {
        Team::B
    } else {
        Team::A
    }
}
