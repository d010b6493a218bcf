//! Placement strategies: ranked starters + ranked substitutes + per-team limits -> two rosters
//! and a bench. Every strategy goes through [place_role], which owns the capacity rules;
//! a strategy only decides which team it would rather fill next.

pub mod aggressive;
pub mod balanced;

use serde::Serialize;

use crate::assignment::normalize::{RoleLimits, TeamLimits};
use crate::assignment::preparer::rank_metric;
use crate::data::directory::Candidate;
use crate::data::selection::Role;

pub use aggressive::place_aggressive;
pub use balanced::place_balanced_round_robin;

/// Signature shared by all registered placement strategies.
pub type PlacementFn = fn(&[Candidate], &[Candidate], &TeamLimits) -> AssignmentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamRoster {
    pub starters: Vec<Candidate>,
    pub substitutes: Vec<Candidate>,
}

impl TeamRoster {
    pub fn total(&self) -> usize {
        self.starters.len() + self.substitutes.len()
    }

    pub fn role(&self, role: Role) -> &[Candidate] {
        match role {
            Role::Starter => &self.starters,
            Role::Substitute => &self.substitutes,
        }
    }

    /// Summed power of one role, measured with the same metric used for ranking.
    pub fn strength(&self, role: Role) -> f64 {
        self.role(role).iter().map(|c| rank_metric(c.power)).sum()
    }

    /// Room under both the role cap and the team total cap.
    pub fn has_room(&self, role: Role, limits: &RoleLimits) -> bool {
        let role_cap = match role {
            Role::Starter => limits.max_starters,
            Role::Substitute => limits.max_substitutes,
        };
        self.role(role).len() < role_cap && self.total() < limits.max_total
    }

    fn push(&mut self, role: Role, candidate: Candidate) {
        match role {
            Role::Starter => self.starters.push(candidate),
            Role::Substitute => self.substitutes.push(candidate),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentResult {
    pub team_a: TeamRoster,
    pub team_b: TeamRoster,
    /// Candidates with no room on either team, starters first, each in rank order.
    pub bench: Vec<Candidate>,
}

impl AssignmentResult {
    pub fn roster(&self, team: Team) -> &TeamRoster {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    fn roster_mut(&mut self, team: Team) -> &mut TeamRoster {
        match team {
            Team::A => &mut self.team_a,
            Team::B => &mut self.team_b,
        }
    }

    pub fn placed_count(&self) -> usize {
        self.team_a.total() + self.team_b.total()
    }
}

pub fn limits_for(limits: &TeamLimits, team: Team) -> &RoleLimits {
    match team {
        Team::A => &limits.team_a,
        Team::B => &limits.team_b,
    }
}

/// Place each ranked candidate on the team `preferred` picks, else the other team, else the
/// bench. `preferred` sees the result built so far.
pub(crate) fn place_role<F>(
    result: &mut AssignmentResult,
    ranked: &[Candidate],
    role: Role,
    limits: &TeamLimits,
    mut preferred: F,
) where
    F: FnMut(&AssignmentResult) -> Team,
{
    for candidate in ranked {
        let first = preferred(result);
        let target = [first, first.other()]
            .into_iter()
            .find(|team| result.roster(*team).has_room(role, limits_for(limits, *team)));
        match target {
            Some(team) => result.roster_mut(team).push(role, candidate.clone()),
            None => result.bench.push(candidate.clone()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::candidate;
    use super::*;

    #[test]
    fn has_room_checks_role_cap_and_total_cap() {
        let mut roster = TeamRoster::default();
        roster.push(Role::Starter, candidate("a", 1.0));
        roster.push(Role::Substitute, candidate("b", 1.0));

        assert!(roster.has_room(Role::Starter, &RoleLimits::new(3, 2, 2)));
        assert!(!roster.has_room(Role::Starter, &RoleLimits::new(3, 1, 2)));
        assert!(!roster.has_room(Role::Substitute, &RoleLimits::new(2, 5, 5)));
    }

    #[test]
    fn strength_counts_nan_power_as_zero() {
        let mut roster = TeamRoster::default();
        roster.push(Role::Starter, candidate("a", 10.0));
        roster.push(Role::Starter, candidate("b", f64::NAN));
        assert_eq!(roster.strength(Role::Starter), 10.0);
        assert_eq!(roster.strength(Role::Substitute), 0.0);
    }
}
