// src/config/preprocess.rs

use std::path::Path;

use tracing::{debug, info};

use crate::config::defaults::{
    default_config, DEFAULT_TMP_DIR, UNIX_BUILD_BIN, UNIX_BUILD_CMD, WINDOWS_BUILD_BIN,
    WINDOWS_BUILD_CMD,
};
use crate::config::merge::merge_with_defaults;
use crate::config::model::{Config, PartialConfig};
use crate::env::{Environment, WORKING_DIR_VAR};
use crate::errors::{ConfigError, Result};
use crate::paths::{absolutize, clean_entry, expand_path};
use crate::types::Platform;

/// Turn a loaded configuration into the final one.
///
/// Steps, in order:
/// 1. merge over the defaults
/// 2. apply the working-directory override (`RELAUNCH_WD`)
/// 3. expand `root` to an absolute path
/// 4. clean `build.exclude_dir` entries
/// 5. adapt to the platform
/// 6. resolve `build.bin`, or take `build.full_bin` verbatim
///
/// Side effect: when `RELAUNCH_WD` is set, the environment's current directory
/// is changed to it. With [`crate::env::ProcessEnvironment`] that is the
/// process working directory.
pub fn finalize(
    env: &dyn Environment,
    platform: Platform,
    loaded: &PartialConfig,
) -> Result<Config> {
    let mut cfg = merge_with_defaults(loaded, &default_config(platform))?;

    if let Some(wd) = env.non_empty_var(WORKING_DIR_VAR) {
        // Anchor a relative override to the directory we start from.
        let wd = absolutize(Path::new(&wd), env)?;
        env.set_current_dir(&wd)
            .map_err(|e| ConfigError::WorkingDir {
                path: wd.clone(),
                source: e.into(),
            })?;
        info!(?wd, "working directory overridden by {WORKING_DIR_VAR}");
        cfg.root = wd;
    }

    cfg.root = expand_path(&cfg.root, env)?;
    if cfg.tmp_dir.is_empty() {
        cfg.tmp_dir = DEFAULT_TMP_DIR.to_string();
    }

    for dir in cfg.build.exclude_dir.iter_mut() {
        *dir = clean_entry(dir);
    }

    adapt_to_platform(&mut cfg, platform);

    if !cfg.build.full_bin.is_empty() {
        debug!(full_bin = %cfg.build.full_bin, "full_bin replaces bin");
        cfg.build.bin = cfg.build.full_bin.clone();
        return Ok(cfg);
    }

    cfg.build.bin = absolutize(Path::new(&cfg.build.bin), env)?
        .to_string_lossy()
        .into_owned();

    debug!(root = ?cfg.root, bin = %cfg.build.bin, "configuration finalized");
    Ok(cfg)
}

/// Host-specific corrections applied before the binary path is resolved.
///
/// On Windows the unix defaults are swapped for their `.exe` variants and a
/// `./dir/app` binary becomes `dir\app`, since `cmd.exe` does not run `./`
/// relative paths.
///
/// Only the built-in defaults gain an `.exe` suffix. A `bin` set by the user
/// is kept as written apart from the `./` rewrite, so it must name the
/// executable exactly.
pub fn adapt_to_platform(cfg: &mut Config, platform: Platform) {
    if !platform.is_windows() {
        return;
    }

    if cfg.build.cmd == UNIX_BUILD_CMD {
        cfg.build.cmd = WINDOWS_BUILD_CMD.to_string();
    }
    if cfg.build.bin == UNIX_BUILD_BIN {
        cfg.build.bin = WINDOWS_BUILD_BIN.to_string();
    }

    if let Some(rest) = cfg
        .build
        .bin
        .strip_prefix("./")
        .or_else(|| cfg.build.bin.strip_prefix(".\\"))
    {
        cfg.build.bin = rest.replace('/', "\\");
    }
}
