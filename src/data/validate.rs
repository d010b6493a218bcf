use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{DataError, DataResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub player_count: usize,
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Check a player directory file. Read/parse failures are errors; content problems land in
/// the report. Duplicate names are errors because the later record silently wins at load time.
pub fn validate_player_directory(path: impl AsRef<Path>) -> DataResult<ValidationReport> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: Value = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(validate_player_payload(&payload))
}

pub fn validate_player_payload(payload: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    let Some(entries) = payload.get("players").and_then(Value::as_array) else {
        report.push(
            ValidationSeverity::Error,
            "players",
            "expected top-level { players: [...] }",
        );
        return report;
    };
    report.player_count = entries.len();

    let mut seen_names = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let base_context = format!("players[{index}]");
        let Some(object) = entry.as_object() else {
            report.push(ValidationSeverity::Error, base_context, "expected object");
            continue;
        };

        match object.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => {
                if name.trim() != name {
                    report.push(
                        ValidationSeverity::Warning,
                        format!("{base_context}.name"),
                        format!("name '{name}' has surrounding whitespace; selections must match exactly"),
                    );
                }
                if !seen_names.insert(name.to_string()) {
                    report.push(
                        ValidationSeverity::Error,
                        format!("{base_context}.name"),
                        format!("duplicate name '{name}'"),
                    );
                }
            }
            _ => report.push(
                ValidationSeverity::Error,
                format!("{base_context}.name"),
                "missing non-empty 'name'",
            ),
        }

        validate_metric(&mut report, object, &base_context, "power", &["power"]);
        validate_metric(
            &mut report,
            object,
            &base_context,
            "secondary_stat",
            &["secondary_stat", "secondaryStat"],
        );

        let has_category = ["category", "troop"]
            .iter()
            .any(|key| object.get(*key).and_then(Value::as_str).is_some_and(|v| !v.trim().is_empty()));
        if !has_category {
            report.push(
                ValidationSeverity::Info,
                format!("{base_context}.category"),
                "no category; exported as empty",
            );
        }
    }

    report
}

fn validate_metric(
    report: &mut ValidationReport,
    object: &Map<String, Value>,
    base_context: &str,
    label: &str,
    keys: &[&str],
) {
    let context = format!("{base_context}.{label}");
    let Some(value) = keys.iter().find_map(|key| object.get(*key)) else {
        report.push(
            ValidationSeverity::Warning,
            context,
            format!("missing '{label}', ranked as 0"),
        );
        return;
    };
    match value.as_f64() {
        Some(number) if number < 0.0 => report.push(
            ValidationSeverity::Warning,
            context,
            format!("negative {label} {number}"),
        ),
        Some(_) => {}
        None => report.push(
            ValidationSeverity::Error,
            context,
            format!("expected number for '{label}'"),
        ),
    }
}
