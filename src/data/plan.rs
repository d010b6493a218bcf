//! Event plan snapshot: the stored selections, limits and algorithm choice for one event.
//! Written by whatever owns persistence; rallypoint only reads it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assignment::normalize::TeamLimitOverrides;
use crate::assignment::AssignmentRequest;
use crate::data::directory::PlayerDirectory;
use crate::data::selection::Selection;
use crate::error::{DataError, DataResult};

pub const DEFAULT_PLAN_PATH: &str = "data/event_plan.json";
pub const DEFAULT_GAME_ID: &str = "desert_storm";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPlan {
    #[serde(default = "default_game_id", alias = "gameId")]
    pub game_id: String,
    #[serde(default, alias = "algorithmId", skip_serializing_if = "Option::is_none")]
    pub algorithm_id: Option<String>,
    #[serde(default, alias = "assignmentAlgorithm", skip_serializing_if = "Option::is_none")]
    pub assignment_mode: Option<String>,
    #[serde(default)]
    pub limits: TeamLimitOverrides,
    #[serde(default)]
    pub selections: Vec<Selection>,
}

fn default_game_id() -> String {
    DEFAULT_GAME_ID.to_string()
}

impl EventPlan {
    /// Borrow this plan as an engine request against `directory`.
    pub fn request<'a>(&'a self, directory: &'a PlayerDirectory) -> AssignmentRequest<'a> {
        AssignmentRequest {
            game_id: &self.game_id,
            algorithm_id: self.algorithm_id.as_deref(),
            assignment_mode: self.assignment_mode.as_deref(),
            selections: &self.selections,
            directory,
            limits: &self.limits,
        }
    }
}

pub fn load_event_plan(path: impl AsRef<Path>) -> DataResult<EventPlan> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
