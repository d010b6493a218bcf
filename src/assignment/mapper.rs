//! Join a selection set against the player directory.
//!
//! Two policies apply here and callers rely on both:
//! - stale selections (names missing from the directory) are dropped without error;
//! - a name selected more than once keeps only its last occurrence, role and position.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::data::directory::{Candidate, PlayerDirectory};
use crate::data::selection::{Role, Selection};

/// Starters and substitutes in selection order (mapper) or rank order (preparer).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreparedPlayers {
    pub starters: Vec<Candidate>,
    pub substitutes: Vec<Candidate>,
}

impl PreparedPlayers {
    pub fn len(&self) -> usize {
        self.starters.len() + self.substitutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty() && self.substitutes.is_empty()
    }
}

/// Selections the mapper skipped, by name, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingReport {
    /// Not present in the directory.
    pub dropped: Vec<String>,
    /// Replaced by a later selection of the same name.
    pub superseded: Vec<String>,
}

pub fn map_selections_to_players(
    selections: &[Selection],
    directory: &PlayerDirectory,
) -> PreparedPlayers {
    map_selections_with_report(selections, directory).0
}

pub fn map_selections_with_report(
    selections: &[Selection],
    directory: &PlayerDirectory,
) -> (PreparedPlayers, MappingReport) {
    let last_index: HashMap<&str, usize> = selections
        .iter()
        .enumerate()
        .map(|(index, selection)| (selection.name.as_str(), index))
        .collect();

    let mut players = PreparedPlayers::default();
    let mut report = MappingReport::default();

    for (index, selection) in selections.iter().enumerate() {
        if last_index.get(selection.name.as_str()) != Some(&index) {
            debug!(name = %selection.name, "selection superseded by a later entry");
            report.superseded.push(selection.name.clone());
            continue;
        }
        let Some(candidate) = directory.candidate(&selection.name) else {
            debug!(name = %selection.name, "selection not in player directory, dropped");
            report.dropped.push(selection.name.clone());
            continue;
        };
        match selection.role {
            Role::Starter => players.starters.push(candidate),
            Role::Substitute => players.substitutes.push(candidate),
        }
    }

    (players, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::directory::PlayerAttributes;

    fn directory(names: &[&str]) -> PlayerDirectory {
        let mut directory = PlayerDirectory::new();
        for (i, name) in names.iter().enumerate() {
            directory.insert(
                *name,
                PlayerAttributes {
                    power: 100.0 - i as f64,
                    secondary_stat: 0.0,
                    category: "infantry".to_string(),
                },
            );
        }
        directory
    }

    fn names(list: &[Candidate]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn splits_by_role_in_selection_order() {
        let selections = vec![
            Selection::substitute("Cid"),
            Selection::starter("Bob"),
            Selection::starter("Ann"),
        ];
        let players = map_selections_to_players(&selections, &directory(&["Ann", "Bob", "Cid"]));
        assert_eq!(names(&players.starters), vec!["Bob", "Ann"]);
        assert_eq!(names(&players.substitutes), vec!["Cid"]);
    }

    #[test]
    fn stale_names_are_dropped_and_reported() {
        let selections = vec![
            Selection::starter("Ann"),
            Selection::starter("Ghost"),
            Selection::substitute("Bob"),
        ];
        let (players, report) =
            map_selections_with_report(&selections, &directory(&["Ann", "Bob"]));
        assert_eq!(players.len(), 2);
        assert_eq!(report.dropped, vec!["Ghost".to_string()]);
        assert!(report.superseded.is_empty());
    }

    #[test]
    fn last_duplicate_wins_role_and_position() {
        let selections = vec![
            Selection::starter("Ann"),
            Selection::starter("Bob"),
            Selection::substitute("Ann"),
        ];
        let (players, report) =
            map_selections_with_report(&selections, &directory(&["Ann", "Bob"]));
        assert_eq!(names(&players.starters), vec!["Bob"]);
        assert_eq!(names(&players.substitutes), vec!["Ann"]);
        assert_eq!(report.superseded, vec!["Ann".to_string()]);
    }

    #[test]
    fn candidates_carry_directory_attributes() {
        let players =
            map_selections_to_players(&[Selection::starter("Bob")], &directory(&["Ann", "Bob"]));
        assert_eq!(players.starters[0].power, 99.0);
        assert_eq!(players.starters[0].category, "infantry");
    }
}
