//! Catalog of placement strategies, each tagged with the games it applies to.
//!
//! Two lookup shapes are kept on purpose: [AlgorithmCatalog::resolve_algorithm_for_event]
//! returns `None` where "not configured" is an expected state, and
//! [AlgorithmCatalog::resolve_algorithm_selection] returns a typed error for call sites
//! that report back to the user.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::assignment::strategy::{place_aggressive, place_balanced_round_robin, PlacementFn};

pub const BALANCED_ROUND_ROBIN: &str = "balanced_round_robin";
pub const AGGRESSIVE: &str = "aggressive";
pub const DEFAULT_ALGORITHM_ID: &str = BALANCED_ROUND_ROBIN;

/// Games the shipped catalog knows about.
pub const STANDARD_GAME_IDS: &[&str] = &["desert_storm", "foundry", "canyon_clash"];

/// Serialized in camelCase, matching [selection_payload].
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmDescriptor {
    pub id: String,
    pub display_name: String,
    pub enabled: bool,
    pub applicable_game_ids: BTreeSet<String>,
    #[serde(skip)]
    pub placement: PlacementFn,
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("enabled", &self.enabled)
            .field("applicable_game_ids", &self.applicable_game_ids)
            .finish_non_exhaustive()
    }
}

impl AlgorithmDescriptor {
    pub fn new<I, S>(id: &str, display_name: &str, games: I, placement: PlacementFn) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            enabled: true,
            applicable_game_ids: games.into_iter().map(Into::into).collect(),
            placement,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn applies_to(&self, game_id: &str) -> bool {
        self.enabled && self.applicable_game_ids.contains(game_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate algorithm id '{0}'")]
    DuplicateId(String),
    #[error("default algorithm '{0}' is not registered")]
    MissingDefault(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmSelectionError {
    #[error("unknown assignment algorithm '{algorithm_id}' for game '{game_id}'")]
    UnknownAssignmentAlgorithm { algorithm_id: String, game_id: String },
}

impl AlgorithmSelectionError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownAssignmentAlgorithm { .. } => "unknown-assignment-algorithm",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedAlgorithm<'a> {
    pub algorithm_id: String,
    pub game_id: String,
    pub algorithm: &'a AlgorithmDescriptor,
}

/// Read-only after construction. Registration order is the listing order.
#[derive(Debug, Clone)]
pub struct AlgorithmCatalog {
    descriptors: Vec<AlgorithmDescriptor>,
    default_id: String,
}

impl AlgorithmCatalog {
    pub fn new(
        descriptors: Vec<AlgorithmDescriptor>,
        default_id: &str,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.id.as_str()) {
                return Err(CatalogError::DuplicateId(descriptor.id.clone()));
            }
        }
        if !seen.contains(default_id) {
            return Err(CatalogError::MissingDefault(default_id.to_string()));
        }
        Ok(Self {
            descriptors,
            default_id: default_id.to_string(),
        })
    }

    /// The shipped catalog: balanced round robin (default) and aggressive.
    pub fn standard() -> Self {
        Self {
            descriptors: vec![
                AlgorithmDescriptor::new(
                    BALANCED_ROUND_ROBIN,
                    "Balanced round robin",
                    STANDARD_GAME_IDS.iter().copied(),
                    place_balanced_round_robin,
                ),
                AlgorithmDescriptor::new(
                    AGGRESSIVE,
                    "Aggressive",
                    STANDARD_GAME_IDS.iter().copied(),
                    place_aggressive,
                ),
            ],
            default_id: DEFAULT_ALGORITHM_ID.to_string(),
        }
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn descriptors(&self) -> &[AlgorithmDescriptor] {
        &self.descriptors
    }

    pub fn get_algorithm(&self, id: &str) -> Option<&AlgorithmDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.id == id)
    }

    pub fn list_algorithms_for_game(&self, game_id: &str) -> Vec<&AlgorithmDescriptor> {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.applies_to(game_id))
            .collect()
    }

    pub fn resolve_algorithm_for_event(
        &self,
        game_id: &str,
        algorithm_id: &str,
    ) -> Option<&AlgorithmDescriptor> {
        self.get_algorithm(algorithm_id)
            .filter(|descriptor| descriptor.applies_to(game_id))
    }

    /// Empty or missing id resolves to the catalog default; anything else must name an
    /// enabled algorithm applicable to `game_id`.
    pub fn resolve_algorithm_selection(
        &self,
        game_id: &str,
        algorithm_id: Option<&str>,
    ) -> Result<ResolvedAlgorithm<'_>, AlgorithmSelectionError> {
        let requested = algorithm_id.map(str::trim).unwrap_or_default();
        let algorithm = if requested.is_empty() {
            self.get_algorithm(&self.default_id)
        } else {
            self.resolve_algorithm_for_event(game_id, requested)
        };
        match algorithm {
            Some(algorithm) => Ok(ResolvedAlgorithm {
                algorithm_id: algorithm.id.clone(),
                game_id: game_id.to_string(),
                algorithm,
            }),
            None => Err(AlgorithmSelectionError::UnknownAssignmentAlgorithm {
                algorithm_id: requested.to_string(),
                game_id: game_id.to_string(),
            }),
        }
    }
}

/// Wire shape of a selection outcome, as returned by the API.
pub fn selection_payload(
    result: &Result<ResolvedAlgorithm<'_>, AlgorithmSelectionError>,
) -> serde_json::Value {
    match result {
        Ok(resolved) => json!({
            "success": true,
            "algorithmId": resolved.algorithm_id,
            "gameId": resolved.game_id,
            "algorithm": resolved.algorithm,
        }),
        Err(err) => {
            let AlgorithmSelectionError::UnknownAssignmentAlgorithm {
                algorithm_id,
                game_id,
            } = err;
            json!({
                "success": false,
                "error": err.kind(),
                "algorithmId": algorithm_id,
                "gameId": game_id,
            })
        }
    }
}
