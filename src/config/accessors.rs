// src/config/accessors.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::model::Config;
use crate::paths::relative_to;

impl Config {
    /// `<root>/<tmp_dir>/<build.log>`.
    pub fn build_log_path(&self) -> PathBuf {
        self.tmp_path().join(&self.build.log)
    }

    pub fn build_delay(&self) -> Duration {
        Duration::from_millis(self.build.delay)
    }

    pub fn kill_delay(&self) -> Duration {
        self.build.kill_delay.as_duration()
    }

    /// Binary joined onto the root. A finalized `bin` is already absolute and
    /// is returned as is.
    pub fn bin_path(&self) -> PathBuf {
        self.root.join(&self.build.bin)
    }

    pub fn tmp_path(&self) -> PathBuf {
        self.root.join(&self.tmp_dir)
    }

    /// `path` relative to the root, for display.
    ///
    /// Never fails: returns an empty string when no relative form exists.
    pub fn rel(&self, path: impl AsRef<Path>) -> String {
        relative_to(&self.root, path.as_ref())
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Color tag per log surface.
    pub fn color_info(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("main", self.color.main.clone()),
            ("build", self.color.build.clone()),
            ("runner", self.color.runner.clone()),
            ("watcher", self.color.watcher.clone()),
        ])
    }
}
