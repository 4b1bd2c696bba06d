// src/config/model.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::KillDelay;

/// Fully resolved configuration handed to the watcher, builder, runner and
/// renderer.
///
/// Produced once by [`crate::config::ConfigResolver::finalize`] and only read
/// afterwards.
///
/// ```toml
/// root = "."
/// tmp_dir = "tmp"
///
/// [build]
/// cmd = "go build -o ./tmp/main ."
/// bin = "./tmp/main"
/// include_ext = ["go", "tpl", "tmpl", "html"]
/// exclude_dir = ["assets", "tmp", "vendor"]
/// delay = 1000
///
/// [color]
/// main = "magenta"
///
/// [log]
/// time = false
///
/// [misc]
/// clean_on_exit = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project root. Absolute once finalized.
    pub root: PathBuf,

    /// Working directory for build output and logs, relative to `root`.
    pub tmp_dir: String,

    pub build: BuildSection,
    pub color: ColorSection,
    pub log: LogSection,
    pub misc: MiscSection,
}

/// `[build]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSection {
    /// Shell command that rebuilds the program.
    pub cmd: String,

    /// Binary produced by `cmd`. Absolute once finalized.
    pub bin: String,

    /// Verbatim replacement for `bin` (may include arguments or env
    /// assignments). Never normalized.
    pub full_bin: String,

    /// Build log file name, placed inside `tmp_dir`.
    pub log: String,

    pub include_ext: Vec<String>,
    pub exclude_dir: Vec<String>,
    pub include_dir: Vec<String>,
    pub exclude_file: Vec<String>,

    /// Milliseconds to wait after a change before rebuilding.
    pub delay: u64,

    /// Keep the old binary running when the build fails.
    pub stop_on_error: bool,

    /// Send an interrupt before killing the app.
    pub send_interrupt: bool,

    /// Grace period between interrupt and kill.
    pub kill_delay: KillDelay,
}

/// `[color]` section: color tags per UI surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSection {
    pub main: String,
    pub watcher: String,
    pub build: String,
    pub runner: String,
    pub app: String,
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    /// Prefix log lines with a timestamp.
    pub time: bool,
}

/// `[misc]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscSection {
    /// Remove `tmp_dir` on exit.
    pub clean_on_exit: bool,
}

/// Configuration exactly as read from a source file plus environment
/// overrides.
///
/// `None` means the field was absent. Absent fields are filled from the
/// defaults when the configuration is finalized; present fields are kept even
/// when they hold a zero value such as `false` or `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmp_dir: Option<String>,
    pub build: PartialBuild,
    pub color: PartialColor,
    pub log: PartialLog,
    pub misc: PartialMisc,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialBuild {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_ext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_dir: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_dir: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_file: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_interrupt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_delay: Option<KillDelay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watcher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialMisc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_on_exit: Option<bool>,
}

impl From<Config> for PartialConfig {
    fn from(cfg: Config) -> Self {
        let Config {
            root,
            tmp_dir,
            build,
            color,
            log,
            misc,
        } = cfg;

        PartialConfig {
            root: Some(root),
            tmp_dir: Some(tmp_dir),
            build: PartialBuild {
                cmd: Some(build.cmd),
                bin: Some(build.bin),
                full_bin: Some(build.full_bin),
                log: Some(build.log),
                include_ext: Some(build.include_ext),
                exclude_dir: Some(build.exclude_dir),
                include_dir: Some(build.include_dir),
                exclude_file: Some(build.exclude_file),
                delay: Some(build.delay),
                stop_on_error: Some(build.stop_on_error),
                send_interrupt: Some(build.send_interrupt),
                kill_delay: Some(build.kill_delay),
            },
            color: PartialColor {
                main: Some(color.main),
                watcher: Some(color.watcher),
                build: Some(color.build),
                runner: Some(color.runner),
                app: Some(color.app),
            },
            log: PartialLog {
                time: Some(log.time),
            },
            misc: PartialMisc {
                clean_on_exit: Some(misc.clean_on_exit),
            },
        }
    }
}
