#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use relaunch::config::{ConfigResolver, PartialConfig};
use relaunch::env::mock::MockEnvironment;
use relaunch::fs::RealFileSystem;
use relaunch::types::Platform;
use tempfile::TempDir;

/// A throwaway project directory with a mock environment whose current
/// directory points at it.
pub struct TempProject {
    dir: TempDir,
    env: MockEnvironment,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let env = MockEnvironment::new(dir.path());
        Self { dir, env }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the project and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    pub fn env(&self) -> &MockEnvironment {
        &self.env
    }

    pub fn resolver(&self, platform: Platform) -> ConfigResolver {
        ConfigResolver::new(
            Arc::new(RealFileSystem),
            Arc::new(self.env.clone()),
            platform,
        )
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `PartialConfig` to simplify test setup.
pub struct PartialConfigBuilder {
    config: PartialConfig,
}

impl PartialConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: PartialConfig::default(),
        }
    }

    pub fn root(mut self, root: &str) -> Self {
        self.config.root = Some(PathBuf::from(root));
        self
    }

    pub fn tmp_dir(mut self, tmp_dir: &str) -> Self {
        self.config.tmp_dir = Some(tmp_dir.to_string());
        self
    }

    pub fn bin(mut self, bin: &str) -> Self {
        self.config.build.bin = Some(bin.to_string());
        self
    }

    pub fn full_bin(mut self, full_bin: &str) -> Self {
        self.config.build.full_bin = Some(full_bin.to_string());
        self
    }

    pub fn exclude_dir(mut self, dirs: &[&str]) -> Self {
        self.config.build.exclude_dir = Some(dirs.iter().map(|d| d.to_string()).collect());
        self
    }

    pub fn delay(mut self, delay: u64) -> Self {
        self.config.build.delay = Some(delay);
        self
    }

    pub fn stop_on_error(mut self, val: bool) -> Self {
        self.config.build.stop_on_error = Some(val);
        self
    }

    pub fn build(self) -> PartialConfig {
        self.config
    }
}

impl Default for PartialConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
