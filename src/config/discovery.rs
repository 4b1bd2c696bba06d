// src/config/discovery.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::defaults::default_config;
use crate::config::loader::load_from_path;
use crate::config::model::PartialConfig;
use crate::env::{Environment, WORKING_DIR_VAR};
use crate::errors::ConfigError;
use crate::fs::FileSystem;
use crate::types::Platform;

pub const YAML_CONFIG_NAME: &str = ".relaunch.yaml";
pub const TOML_CONFIG_NAME: &str = ".relaunch.toml";
pub const LEGACY_CONFIG_NAME: &str = ".relaunch.conf";

/// Conventional file names, in probe order.
pub const CONFIG_NAMES: [&str; 3] = [YAML_CONFIG_NAME, TOML_CONFIG_NAME, LEGACY_CONFIG_NAME];

/// Where a discovered configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Discovered(PathBuf),
    Defaults,
}

/// Outcome of locating and loading a configuration source.
///
/// `config` is always usable. `error` is only set when an explicitly requested
/// file failed to load, in which case `config` holds the defaults.
#[derive(Debug)]
pub struct Discovery {
    pub config: PartialConfig,
    pub source: ConfigSource,
    pub error: Option<ConfigError>,
}

impl Discovery {
    fn defaults(platform: Platform, error: Option<ConfigError>) -> Self {
        Self {
            config: PartialConfig::from(default_config(platform)),
            source: ConfigSource::Defaults,
            error,
        }
    }
}

/// Locate and load the configuration source.
///
/// With an explicit path, that file is loaded and a failure is reported in
/// [`Discovery::error`]. Without one, the conventional names are probed in the
/// target directory and every failure falls through to the defaults.
pub fn discover(
    fs: &dyn FileSystem,
    env: &dyn Environment,
    platform: Platform,
    explicit: &str,
) -> Discovery {
    if !explicit.is_empty() {
        let path = PathBuf::from(explicit);
        return match load_from_path(fs, env, &path) {
            Ok(config) => {
                info!(?path, "using config file");
                Discovery {
                    config,
                    source: ConfigSource::Explicit(path),
                    error: None,
                }
            }
            Err(err) => Discovery::defaults(platform, Some(err)),
        };
    }

    let Some(dir) = target_dir(env) else {
        debug!("no target directory for config discovery; using defaults");
        return Discovery::defaults(platform, None);
    };

    for name in CONFIG_NAMES {
        let path = dir.join(name);
        if let Some(config) = probe(fs, env, &path) {
            if name == LEGACY_CONFIG_NAME {
                warn!(
                    "`{LEGACY_CONFIG_NAME}` will be deprecated soon, recommend using `{TOML_CONFIG_NAME}`."
                );
            }
            info!(?path, "using config file");
            return Discovery {
                config,
                source: ConfigSource::Discovered(path),
                error: None,
            };
        }
    }

    debug!(?dir, "no config file found; using defaults");
    Discovery::defaults(platform, None)
}

/// Directory searched for conventional names: the working-directory override
/// if set, else the current directory.
pub fn target_dir(env: &dyn Environment) -> Option<PathBuf> {
    if let Some(wd) = env.non_empty_var(WORKING_DIR_VAR) {
        return Some(PathBuf::from(wd));
    }
    match env.current_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            debug!(error = %format!("{err:#}"), "current directory unavailable");
            None
        }
    }
}

fn probe(fs: &dyn FileSystem, env: &dyn Environment, path: &Path) -> Option<PartialConfig> {
    if !fs.is_file(path) {
        debug!(?path, "config candidate not found");
        return None;
    }
    match load_from_path(fs, env, path) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(?path, error = %error_chain(&err), "ignoring unreadable config candidate");
            None
        }
    }
}

/// Render an error with its sources, `outer: inner: ...`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
