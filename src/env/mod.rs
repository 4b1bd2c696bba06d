// src/env/mod.rs

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Name of the variable that overrides the working directory.
///
/// It selects the discovery directory and, during finalize, becomes the
/// project root and the current directory.
pub const WORKING_DIR_VAR: &str = "RELAUNCH_WD";

/// Ambient process state read (and, for the working directory, written)
/// during configuration resolution.
pub trait Environment: Send + Sync + Debug {
    /// Value of an environment variable, `None` if unset or not unicode.
    fn var(&self, key: &str) -> Option<String>;
    fn current_dir(&self) -> Result<PathBuf>;
    /// Changes the current directory. For [`ProcessEnvironment`] this is the
    /// process-wide working directory.
    fn set_current_dir(&self, path: &Path) -> Result<()>;
    fn home_dir(&self) -> Option<PathBuf>;

    /// Like [`Environment::var`], but treats an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// Implementation backed by `std::env` and `dirs`.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("reading current directory")
    }

    fn set_current_dir(&self, path: &Path) -> Result<()> {
        std::env::set_current_dir(path)
            .with_context(|| format!("changing current directory to {:?}", path))
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
