//! Fallbacks for untrusted event settings: assignment mode and role-limit overrides.
//! Both functions are total; bad input resolves to a default, never to an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MAX_TOTAL: usize = 30;
pub const DEFAULT_MAX_STARTERS: usize = 20;
pub const DEFAULT_MAX_SUBSTITUTES: usize = 10;

/// Legacy two-valued assignment setting stored with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentMode {
    Balanced,
    Aggressive,
}

impl AssignmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }

    /// Registry id of the placement strategy backing this mode.
    pub fn algorithm_id(&self) -> &'static str {
        match self {
            Self::Balanced => crate::assignment::registry::BALANCED_ROUND_ROBIN,
            Self::Aggressive => crate::assignment::registry::AGGRESSIVE,
        }
    }
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the literal "aggressive" selects [AssignmentMode::Aggressive].
pub fn normalize_assignment_algorithm(value: Option<&str>) -> AssignmentMode {
    match value {
        Some("aggressive") => AssignmentMode::Aggressive,
        _ => AssignmentMode::Balanced,
    }
}

/// Per-team caps. `max_total` is the hard cap; the role caps bound each sub-pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLimits {
    pub max_total: usize,
    pub max_starters: usize,
    pub max_substitutes: usize,
}

impl Default for RoleLimits {
    fn default() -> Self {
        Self {
            max_total: DEFAULT_MAX_TOTAL,
            max_starters: DEFAULT_MAX_STARTERS,
            max_substitutes: DEFAULT_MAX_SUBSTITUTES,
        }
    }
}

impl RoleLimits {
    pub fn new(max_total: usize, max_starters: usize, max_substitutes: usize) -> Self {
        Self {
            max_total,
            max_starters,
            max_substitutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamLimits {
    pub team_a: RoleLimits,
    pub team_b: RoleLimits,
}

impl TeamLimits {
    /// Same limits for both teams.
    pub fn uniform(limits: RoleLimits) -> Self {
        Self {
            team_a: limits,
            team_b: limits,
        }
    }
}

/// Raw, possibly partial limit settings as stored or posted. Values stay untyped until
/// [build_role_limits] coerces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleLimitOverrides {
    #[serde(default, alias = "maxTotal", skip_serializing_if = "Option::is_none")]
    pub max_total: Option<Value>,
    #[serde(default, alias = "maxStarters", skip_serializing_if = "Option::is_none")]
    pub max_starters: Option<Value>,
    #[serde(default, alias = "maxSubstitutes", skip_serializing_if = "Option::is_none")]
    pub max_substitutes: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamLimitOverrides {
    #[serde(default, alias = "teamA")]
    pub team_a: RoleLimitOverrides,
    #[serde(default, alias = "teamB")]
    pub team_b: RoleLimitOverrides,
}

pub fn build_role_limits(overrides: &RoleLimitOverrides) -> RoleLimits {
    RoleLimits {
        max_total: coerce_limit(overrides.max_total.as_ref()).unwrap_or(DEFAULT_MAX_TOTAL),
        max_starters: coerce_limit(overrides.max_starters.as_ref()).unwrap_or(DEFAULT_MAX_STARTERS),
        max_substitutes: coerce_limit(overrides.max_substitutes.as_ref())
            .unwrap_or(DEFAULT_MAX_SUBSTITUTES),
    }
}

pub fn build_team_limits(overrides: &TeamLimitOverrides) -> TeamLimits {
    TeamLimits {
        team_a: build_role_limits(&overrides.team_a),
        team_b: build_role_limits(&overrides.team_b),
    }
}

/// Numbers and numeric strings coerce; negatives clamp to zero and fractions truncate.
fn coerce_limit(value: Option<&Value>) -> Option<usize> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    if !number.is_finite() {
        return None;
    }
    // Saturating float-to-int cast: negatives become 0.
    Some(number.trunc() as usize)
}
