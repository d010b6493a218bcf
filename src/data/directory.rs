//! Player directory: name-keyed attributes read from `data/players.json`.
//! The directory is a snapshot; assignment copies entries out of it and never holds references.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

pub const DEFAULT_DIRECTORY_PATH: &str = "data/players.json";

/// A selectable participant with the attributes used for ranking and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub power: f64,
    #[serde(default, alias = "secondaryStat")]
    pub secondary_stat: f64,
    #[serde(default, alias = "troop")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub power: f64,
    pub secondary_stat: f64,
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    players: Vec<Candidate>,
}

/// Name -> attributes. A later record with the same name replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    by_name: HashMap<String, PlayerAttributes>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, attributes: PlayerAttributes) {
        self.by_name.insert(name.into(), attributes);
    }

    pub fn get(&self, name: &str) -> Option<&PlayerAttributes> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Copy of the named entry as a [Candidate], or None when the name is unknown.
    pub fn candidate(&self, name: &str) -> Option<Candidate> {
        self.by_name.get(name).map(|attributes| Candidate {
            name: name.to_string(),
            power: attributes.power,
            secondary_stat: attributes.secondary_stat,
            category: attributes.category.clone(),
        })
    }
}

impl FromIterator<Candidate> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let by_name = iter
            .into_iter()
            .map(|candidate| {
                (
                    candidate.name,
                    PlayerAttributes {
                        power: candidate.power,
                        secondary_stat: candidate.secondary_stat,
                        category: candidate.category,
                    },
                )
            })
            .collect();
        Self { by_name }
    }
}

/// Raw player records in file order, duplicates included. Used by validation.
pub fn load_player_records(path: impl AsRef<Path>) -> DataResult<Vec<Candidate>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_player_records(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_player_records(raw: &str) -> Result<Vec<Candidate>, serde_json::Error> {
    let parsed: DirectoryFile = serde_json::from_str(raw)?;
    Ok(parsed.players)
}

pub fn load_player_directory(path: impl AsRef<Path>) -> DataResult<PlayerDirectory> {
    let records = load_player_records(path.as_ref())?;
    tracing::debug!(
        path = %path.as_ref().display(),
        players = records.len(),
        "loaded player directory"
    );
    Ok(records.into_iter().collect())
}
