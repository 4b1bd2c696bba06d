// src/config/loader.rs

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::model::PartialConfig;
use crate::config::overrides::apply_env_overrides;
use crate::env::Environment;
use crate::errors::{ConfigError, Result};
use crate::fs::FileSystem;

/// Document syntax of a config source, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    /// `.toml`, and the legacy `.conf` name which holds TOML.
    Toml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "toml" | "conf" => Some(SourceFormat::Toml),
            _ => None,
        }
    }
}

/// Load a configuration source and apply environment overrides.
///
/// The result only holds what the file (or an override) sets; nothing is
/// defaulted here.
pub fn load_from_path(
    fs: &dyn FileSystem,
    env: &dyn Environment,
    path: &Path,
) -> Result<PartialConfig> {
    let format = SourceFormat::from_path(path).ok_or_else(|| ConfigError::Unsupported {
        path: path.to_path_buf(),
    })?;

    let contents = fs.read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let mut doc = parse_document(path, &contents, format)?;
    apply_env_overrides(&mut doc, env)?;

    let config: PartialConfig = serde_json::from_value(doc).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    debug!(?path, ?format, "loaded config source");
    Ok(config)
}

fn parse_document(path: &Path, contents: &str, format: SourceFormat) -> Result<Value> {
    let parse_err = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let doc: Value = match format {
        SourceFormat::Toml => toml::from_str(contents).map_err(|e| parse_err(e.into()))?,
        SourceFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| parse_err(e.into()))?,
    };

    match doc {
        Value::Null => Ok(Value::Object(Default::default())),
        Value::Object(mut map) => {
            // A key with no body (`build:` in YAML) reads as null; treat it
            // as absent so the section keeps its defaults.
            map.retain(|_, v| !v.is_null());
            Ok(Value::Object(map))
        }
        _ => Err(parse_err("top level of a config must be a table".into())),
    }
}
