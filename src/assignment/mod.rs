pub mod mapper;
pub mod normalize;
pub mod preparer;
pub mod registry;
pub mod strategy;


use serde::Serialize;
use tracing::{debug, info};

use crate::assignment::normalize::{
    build_team_limits, normalize_assignment_algorithm, TeamLimitOverrides, TeamLimits,
};
use crate::assignment::preparer::prepare_players_with_report;
use crate::assignment::registry::{AlgorithmCatalog, AlgorithmSelectionError};
use crate::assignment::strategy::AssignmentResult;
use crate::data::directory::PlayerDirectory;
use crate::data::selection::Selection;

/// One assignment run: what was selected, for which game, under which settings.
#[derive(Debug, Clone)]
pub struct AssignmentRequest<'a> {
    pub game_id: &'a str,
    /// Registry id. Takes precedence over `assignment_mode` when non-empty.
    pub algorithm_id: Option<&'a str>,
    /// Legacy "balanced" / "aggressive" setting, normalized before lookup.
    pub assignment_mode: Option<&'a str>,
    pub selections: &'a [Selection],
    pub directory: &'a PlayerDirectory,
    pub limits: &'a TeamLimitOverrides,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentOutcome {
    pub game_id: String,
    pub algorithm_id: String,
    pub limits: TeamLimits,
    /// Selections dropped because the directory had no such player.
    pub dropped_selections: Vec<String>,
    #[serde(flatten)]
    pub result: AssignmentResult,
}

/// Resolve the strategy, rank the selected players, and place them.
pub fn assign_teams(
    catalog: &AlgorithmCatalog,
    request: &AssignmentRequest<'_>,
) -> Result<AssignmentOutcome, AlgorithmSelectionError> {
    let explicit = request
        .algorithm_id
        .map(str::trim)
        .filter(|id| !id.is_empty());
    // With neither setting present the catalog default applies, whatever the game.
    let requested = explicit.or_else(|| {
        request
            .assignment_mode
            .filter(|mode| !mode.trim().is_empty())
            .map(|mode| normalize_assignment_algorithm(Some(mode)).algorithm_id())
    });
    let resolved = catalog.resolve_algorithm_selection(request.game_id, requested)?;

    let (players, report) = prepare_players_with_report(request.selections, request.directory);
    if !report.superseded.is_empty() {
        debug!(count = report.superseded.len(), "duplicate selections collapsed");
    }

    let limits = build_team_limits(request.limits);
    let result = (resolved.algorithm.placement)(&players.starters, &players.substitutes, &limits);

    info!(
        game = request.game_id,
        algorithm = %resolved.algorithm_id,
        placed = result.placed_count(),
        benched = result.bench.len(),
        dropped = report.dropped.len(),
        "teams assigned"
    );

    Ok(AssignmentOutcome {
        game_id: resolved.game_id,
        algorithm_id: resolved.algorithm_id,
        limits,
        dropped_selections: report.dropped,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::registry::{AGGRESSIVE, BALANCED_ROUND_ROBIN};
    use crate::data::directory::Candidate;

    fn directory() -> PlayerDirectory {
        ["Ann", "Bob", "Cid", "Dee"]
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate {
                name: name.to_string(),
                power: 100.0 - 10.0 * i as f64,
                secondary_stat: 0.0,
                category: "cavalry".to_string(),
            })
            .collect()
    }

    fn request<'a>(
        selections: &'a [Selection],
        directory: &'a PlayerDirectory,
        limits: &'a TeamLimitOverrides,
    ) -> AssignmentRequest<'a> {
        AssignmentRequest {
            game_id: "desert_storm",
            algorithm_id: None,
            assignment_mode: None,
            selections,
            directory,
            limits,
        }
    }

    #[test]
    fn legacy_mode_selects_the_matching_strategy() {
        let directory = directory();
        let selections: Vec<Selection> =
            ["Ann", "Bob", "Cid", "Dee"].into_iter().map(Selection::starter).collect();
        let limits = TeamLimitOverrides::default();

        let balanced = assign_teams(&AlgorithmCatalog::standard(), &request(&selections, &directory, &limits))
            .expect("default mode should resolve");
        assert_eq!(balanced.algorithm_id, BALANCED_ROUND_ROBIN);
        assert_eq!(balanced.result.team_a.starters.len(), 2);

        let aggressive_request = AssignmentRequest {
            assignment_mode: Some("aggressive"),
            ..request(&selections, &directory, &limits)
        };
        let aggressive = assign_teams(&AlgorithmCatalog::standard(), &aggressive_request)
            .expect("aggressive mode should resolve");
        assert_eq!(aggressive.algorithm_id, AGGRESSIVE);
        assert_eq!(aggressive.result.team_a.starters.len(), 4);
    }

    #[test]
    fn explicit_algorithm_id_wins_over_mode() {
        let directory = directory();
        let selections = vec![Selection::starter("Ann")];
        let limits = TeamLimitOverrides::default();
        let req = AssignmentRequest {
            algorithm_id: Some(BALANCED_ROUND_ROBIN),
            assignment_mode: Some("aggressive"),
            ..request(&selections, &directory, &limits)
        };
        let outcome = assign_teams(&AlgorithmCatalog::standard(), &req).expect("should resolve");
        assert_eq!(outcome.algorithm_id, BALANCED_ROUND_ROBIN);
    }

    #[test]
    fn unconfigured_event_uses_default_for_unlisted_game() {
        let directory = directory();
        let selections = vec![Selection::starter("Ann"), Selection::starter("Bob")];
        let limits = TeamLimitOverrides::default();
        let req = AssignmentRequest {
            game_id: "bear_hunt",
            ..request(&selections, &directory, &limits)
        };

        let outcome = assign_teams(&AlgorithmCatalog::standard(), &req)
            .expect("unset algorithm should fall back to the default");
        assert_eq!(outcome.algorithm_id, BALANCED_ROUND_ROBIN);
        assert_eq!(outcome.game_id, "bear_hunt");
        assert_eq!(outcome.result.placed_count(), 2);

        let blank_mode = AssignmentRequest {
            algorithm_id: Some(" "),
            assignment_mode: Some(""),
            ..req
        };
        assert!(assign_teams(&AlgorithmCatalog::standard(), &blank_mode).is_ok());
    }

    #[test]
    fn unknown_algorithm_is_an_error_value() {
        let directory = directory();
        let limits = TeamLimitOverrides::default();
        let req = AssignmentRequest {
            algorithm_id: Some("snake_draft"),
            ..request(&[], &directory, &limits)
        };
        let err = assign_teams(&AlgorithmCatalog::standard(), &req).expect_err("should fail");
        assert_eq!(err.kind(), "unknown-assignment-algorithm");
    }

    #[test]
    fn outcome_reports_dropped_selections() {
        let directory = directory();
        let selections = vec![Selection::starter("Ann"), Selection::substitute("Ghost")];
        let limits = TeamLimitOverrides::default();
        let outcome = assign_teams(&AlgorithmCatalog::standard(), &request(&selections, &directory, &limits))
            .expect("should resolve");
        assert_eq!(outcome.dropped_selections, vec!["Ghost".to_string()]);
        assert_eq!(outcome.result.placed_count(), 1);
    }
}
