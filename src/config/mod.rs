// src/config/mod.rs

//! Configuration resolution for relaunch.
//!
//! Responsibilities:
//! - Define the schema and its partial (as-loaded) form (`model.rs`).
//! - Provide the built-in defaults (`defaults.rs`).
//! - Load a YAML/TOML source with environment overrides (`loader.rs`,
//!   `overrides.rs`).
//! - Find the source when no path is given (`discovery.rs`).
//! - Merge over defaults, adapt and normalize paths (`merge.rs`,
//!   `preprocess.rs`).
//! - Derived accessors on the final [`Config`] (`accessors.rs`).
//!
//! Presence, not zero-ness, decides inheritance: a field written in the file
//! keeps its value even if it is `false`, `0` or `""` (except `tmp_dir`, which
//! falls back to `"tmp"` when empty).

pub mod accessors;
pub mod defaults;
pub mod discovery;
pub mod loader;
pub mod merge;
pub mod model;
pub mod overrides;
pub mod preprocess;

use std::path::Path;
use std::sync::Arc;

pub use defaults::default_config;
pub use discovery::{ConfigSource, Discovery};
pub use loader::load_from_path;
pub use merge::{deep_merge, merge_with_defaults};
pub use model::{
    BuildSection, ColorSection, Config, LogSection, MiscSection, PartialBuild, PartialColor,
    PartialConfig, PartialLog, PartialMisc,
};

use crate::env::{Environment, ProcessEnvironment};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::types::Platform;

/// Runs the resolution pipeline against a filesystem, an environment and a
/// platform.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn Environment>,
    platform: Platform,
}

impl ConfigResolver {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn Environment>, platform: Platform) -> Self {
        Self { fs, env, platform }
    }

    /// Resolver over the real filesystem and process environment.
    pub fn from_process() -> Self {
        Self::new(
            Arc::new(RealFileSystem),
            Arc::new(ProcessEnvironment),
            Platform::current(),
        )
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<PartialConfig> {
        load_from_path(self.fs.as_ref(), self.env.as_ref(), path.as_ref())
    }

    pub fn discover(&self, explicit: &str) -> Discovery {
        discovery::discover(self.fs.as_ref(), self.env.as_ref(), self.platform, explicit)
    }

    pub fn finalize(&self, loaded: &PartialConfig) -> Result<Config> {
        preprocess::finalize(self.env.as_ref(), self.platform, loaded)
    }

    /// Discover, load and finalize.
    ///
    /// A failure to load an explicitly requested file is returned as an error;
    /// callers that prefer to continue on defaults can use
    /// [`ConfigResolver::discover`] and [`ConfigResolver::finalize`] directly.
    pub fn resolve(&self, explicit: &str) -> Result<Config> {
        let discovery = self.discover(explicit);
        if let Some(err) = discovery.error {
            return Err(err);
        }
        self.finalize(&discovery.config)
    }
}

/// Resolve the configuration for this process.
///
/// `path` is the explicit config path, or empty for discovery. May change the
/// process working directory (see [`preprocess::finalize`]).
pub fn init_config(path: &str) -> Result<Config> {
    ConfigResolver::from_process().resolve(path)
}
