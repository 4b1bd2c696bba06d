// src/config/overrides.rs

//! Environment-variable overrides keyed by field path.
//!
//! A field path such as `build.cmd` maps to the variable `BUILD__CMD`:
//! uppercase, with `.` replaced by [`ENV_KEY_SEPARATOR`]. There is no prefix.

use serde_json::{Map, Value};
use tracing::debug;

use crate::env::Environment;
use crate::errors::{ConfigError, Result};
use crate::types::parse_duration;

pub const ENV_KEY_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Bool,
    /// Whitespace-separated list.
    List,
    /// Integer nanoseconds or a duration string.
    Duration,
}

/// Every overridable field of the schema.
pub const FIELDS: &[(&str, FieldKind)] = &[
    ("root", FieldKind::Str),
    ("tmp_dir", FieldKind::Str),
    ("build.cmd", FieldKind::Str),
    ("build.bin", FieldKind::Str),
    ("build.full_bin", FieldKind::Str),
    ("build.log", FieldKind::Str),
    ("build.include_ext", FieldKind::List),
    ("build.exclude_dir", FieldKind::List),
    ("build.include_dir", FieldKind::List),
    ("build.exclude_file", FieldKind::List),
    ("build.delay", FieldKind::Int),
    ("build.stop_on_error", FieldKind::Bool),
    ("build.send_interrupt", FieldKind::Bool),
    ("build.kill_delay", FieldKind::Duration),
    ("color.main", FieldKind::Str),
    ("color.watcher", FieldKind::Str),
    ("color.build", FieldKind::Str),
    ("color.runner", FieldKind::Str),
    ("color.app", FieldKind::Str),
    ("log.time", FieldKind::Bool),
    ("misc.clean_on_exit", FieldKind::Bool),
];

/// Environment variable name for a dotted field path.
pub fn env_key(field_path: &str) -> String {
    field_path.to_uppercase().replace('.', ENV_KEY_SEPARATOR)
}

/// Overlay every set (non-empty) override variable onto a parsed document.
pub fn apply_env_overrides(doc: &mut Value, env: &dyn Environment) -> Result<()> {
    for (field, kind) in FIELDS {
        let var = env_key(field);
        let Some(raw) = env.non_empty_var(&var) else {
            continue;
        };

        debug!(%var, field, "applying environment override");
        let value = coerce(&var, &raw, *kind)?;
        set_field(doc, field, value).map_err(|message| ConfigError::EnvOverride {
            var: var.clone(),
            message,
        })?;
    }
    Ok(())
}

fn coerce(var: &str, raw: &str, kind: FieldKind) -> Result<Value> {
    let invalid = |message: String| ConfigError::EnvOverride {
        var: var.to_string(),
        message,
    };

    match kind {
        FieldKind::Str => Ok(Value::String(raw.to_string())),
        FieldKind::Int => raw
            .trim()
            .parse::<u64>()
            .map(Value::from)
            .map_err(|e| invalid(format!("expected a non-negative integer, got {raw:?} ({e})"))),
        FieldKind::Bool => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| invalid(format!("expected a boolean, got {raw:?}"))),
        FieldKind::List => Ok(Value::Array(
            raw.split_whitespace()
                .map(|s| Value::String(s.to_string()))
                .collect(),
        )),
        FieldKind::Duration => {
            let trimmed = raw.trim();
            if let Ok(nanos) = trimmed.parse::<u64>() {
                return Ok(Value::from(nanos));
            }
            parse_duration(trimmed).map_err(invalid)?;
            Ok(Value::String(trimmed.to_string()))
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

fn set_field(doc: &mut Value, field: &str, value: Value) -> std::result::Result<(), String> {
    if doc.is_null() {
        *doc = Value::Object(Map::new());
    }

    let mut segments: Vec<&str> = field.split('.').collect();
    let Some(leaf) = segments.pop() else {
        return Ok(());
    };

    let mut node = doc;
    for segment in segments {
        let Value::Object(map) = node else {
            return Err(format!("cannot set `{field}`: parent is not a table"));
        };
        let child = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if child.is_null() {
            *child = Value::Object(Map::new());
        }
        node = child;
    }

    match node {
        Value::Object(map) => {
            map.insert(leaf.to_string(), value);
            Ok(())
        }
        _ => Err(format!("cannot set `{field}`: parent is not a table")),
    }
}
