use crate::assignment::normalize::TeamLimits;
use crate::assignment::strategy::{place_role, AssignmentResult, Team};
use crate::data::directory::Candidate;
use crate::data::selection::Role;

/// Fill team A from the top of each ranked list, then team B, then the bench.
pub fn place_aggressive(
    starters: &[Candidate],
    substitutes: &[Candidate],
    limits: &TeamLimits,
) -> AssignmentResult {
    let mut result = AssignmentResult::default();
    place_role(&mut result, starters, Role::Starter, limits, |_| Team::A);
    place_role(&mut result, substitutes, Role::Substitute, limits, |_| Team::A);
    result
}
