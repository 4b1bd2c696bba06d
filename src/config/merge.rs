// src/config/merge.rs

//! Field-by-field merge of a loaded configuration over the defaults.
//!
//! Both sides are lifted to `serde_json::Value`; absent fields of the loaded
//! side are simply missing keys, so they inherit the default. Lists replace
//! the default list entirely.

use serde_json::Value;

use crate::config::model::{Config, PartialConfig};
use crate::errors::{ConfigError, Result};

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans are replaced entirely
/// - A null overlay keeps the base value
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Fill every absent field of `loaded` from `defaults`.
pub fn merge_with_defaults(loaded: &PartialConfig, defaults: &Config) -> Result<Config> {
    let base = serde_json::to_value(defaults).map_err(ConfigError::Merge)?;
    let overlay = serde_json::to_value(loaded).map_err(ConfigError::Merge)?;
    serde_json::from_value(deep_merge(base, overlay)).map_err(ConfigError::Merge)
}
