// src/env/mock.rs

use super::Environment;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    vars: HashMap<String, String>,
    cwd: Option<PathBuf>,
    home: Option<PathBuf>,
    // Directories `set_current_dir` accepts. Empty means any directory.
    dirs: HashSet<PathBuf>,
}

/// In-memory environment for tests: variables, a current directory and a home
/// directory that never touch the real process.
///
/// Clones share state, so a test can keep a handle and observe the current
/// directory after resolution moved it.
#[derive(Debug, Clone, Default)]
pub struct MockEnvironment {
    state: Arc<Mutex<MockState>>,
}

impl MockEnvironment {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let env = Self::default();
        env.state.lock().unwrap().cwd = Some(cwd.into());
        env
    }

    pub fn with_var(self, key: &str, value: &str) -> Self {
        self.set_var(key, value);
        self
    }

    pub fn with_home(self, home: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().home = Some(home.into());
        self
    }

    /// Restrict `set_current_dir` to directories registered here.
    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().dirs.insert(dir.into());
        self
    }

    pub fn set_var(&self, key: &str, value: &str) {
        let mut state = self.state.lock().unwrap();
        state.vars.insert(key.to_string(), value.to_string());
    }

    pub fn cwd(&self) -> Option<PathBuf> {
        self.state.lock().unwrap().cwd.clone()
    }
}

impl Environment for MockEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.state.lock().unwrap().vars.get(key).cloned()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .cwd
            .clone()
            .ok_or_else(|| anyhow!("current directory is not set"))
    }

    fn set_current_dir(&self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let target = match (&state.cwd, path.is_absolute()) {
            (Some(cwd), false) => cwd.join(path),
            _ => path.to_path_buf(),
        };
        if !state.dirs.is_empty() && !state.dirs.contains(&target) {
            return Err(anyhow!("No such directory: {:?}", target));
        }
        state.cwd = Some(target);
        Ok(())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.state.lock().unwrap().home.clone()
    }
}
