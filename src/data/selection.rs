use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Roster role. Anything that is not exactly "starter" is a substitute, including
/// `null` and non-string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Starter,
    Substitute,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Substitute => "substitute",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Self::from).unwrap_or(Self::Substitute))
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        if value == "starter" {
            Self::Starter
        } else {
            Self::Substitute
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Substitute
}

impl Selection {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn starter(name: impl Into<String>) -> Self {
        Self::new(name, Role::Starter)
    }

    pub fn substitute(name: impl Into<String>) -> Self {
        Self::new(name, Role::Substitute)
    }
}
