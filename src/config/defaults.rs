// src/config/defaults.rs

use std::path::PathBuf;

use crate::config::model::{BuildSection, ColorSection, Config, LogSection, MiscSection};
use crate::types::{KillDelay, Platform};

pub const DEFAULT_TMP_DIR: &str = "tmp";

pub const UNIX_BUILD_CMD: &str = "go build -o ./tmp/main .";
pub const UNIX_BUILD_BIN: &str = "./tmp/main";
pub const WINDOWS_BUILD_CMD: &str = "go build -o ./tmp/main.exe .";
pub const WINDOWS_BUILD_BIN: &str = r"tmp\main.exe";

/// Built-in configuration every loaded source is merged over.
pub fn default_config(platform: Platform) -> Config {
    let (cmd, bin) = match platform {
        Platform::Windows => (WINDOWS_BUILD_CMD, WINDOWS_BUILD_BIN),
        Platform::Unix => (UNIX_BUILD_CMD, UNIX_BUILD_BIN),
    };

    Config {
        root: PathBuf::from("."),
        tmp_dir: DEFAULT_TMP_DIR.to_string(),
        build: BuildSection {
            cmd: cmd.to_string(),
            bin: bin.to_string(),
            full_bin: String::new(),
            log: "build-errors.log".to_string(),
            include_ext: strings(&["go", "tpl", "tmpl", "html"]),
            exclude_dir: strings(&["assets", "tmp", "vendor"]),
            include_dir: Vec::new(),
            exclude_file: Vec::new(),
            delay: 1000,
            stop_on_error: true,
            send_interrupt: false,
            kill_delay: KillDelay::default(),
        },
        color: ColorSection {
            main: "magenta".to_string(),
            watcher: "cyan".to_string(),
            build: "yellow".to_string(),
            runner: "green".to_string(),
            app: String::new(),
        },
        log: LogSection { time: false },
        misc: MiscSection {
            clean_on_exit: false,
        },
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
