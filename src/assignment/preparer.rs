use std::cmp::Ordering;

use crate::assignment::mapper::{map_selections_with_report, MappingReport, PreparedPlayers};
use crate::data::directory::{Candidate, PlayerDirectory};
use crate::data::selection::Selection;

/// Map selections, then rank each role list strongest first.
pub fn prepare_players_for_assignment(
    selections: &[Selection],
    directory: &PlayerDirectory,
) -> PreparedPlayers {
    prepare_players_with_report(selections, directory).0
}

pub fn prepare_players_with_report(
    selections: &[Selection],
    directory: &PlayerDirectory,
) -> (PreparedPlayers, MappingReport) {
    let (mut players, report) = map_selections_with_report(selections, directory);
    rank_candidates(&mut players.starters);
    rank_candidates(&mut players.substitutes);
    (players, report)
}

/// Descending power, then descending secondary stat. `sort_by` is stable, so equal keys
/// keep selection order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(compare_rank);
}

pub fn compare_rank(left: &Candidate, right: &Candidate) -> Ordering {
    rank_metric(right.power)
        .total_cmp(&rank_metric(left.power))
        .then_with(|| rank_metric(right.secondary_stat).total_cmp(&rank_metric(left.secondary_stat)))
}

/// NaN ranks as zero; infinities clamp to the largest finite magnitude, so `+inf` still
/// ranks first and team strength sums never turn into NaN.
pub(crate) fn rank_metric(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}
