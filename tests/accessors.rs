#![cfg(unix)]

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use relaunch::config::{Config, ConfigResolver, PartialConfig};
use relaunch::env::mock::MockEnvironment;
use relaunch::fs::mock::MockFileSystem;
use relaunch::types::{KillDelay, Platform};

type TestResult = Result<(), Box<dyn Error>>;

fn finalized_defaults() -> Result<Config, Box<dyn Error>> {
    let resolver = ConfigResolver::new(
        Arc::new(MockFileSystem::new()),
        Arc::new(MockEnvironment::new("/proj")),
        Platform::Unix,
    );
    Ok(resolver.finalize(&PartialConfig::default())?)
}

#[test]
fn derived_paths_hang_off_root() -> TestResult {
    let cfg = finalized_defaults()?;

    assert_eq!(cfg.tmp_path(), PathBuf::from("/proj/tmp"));
    assert_eq!(
        cfg.build_log_path(),
        PathBuf::from("/proj/tmp/build-errors.log")
    );
    assert_eq!(cfg.bin_path(), PathBuf::from("/proj/tmp/main"));
    Ok(())
}

#[test]
fn bin_path_joins_relative_bin_onto_root() -> TestResult {
    let mut cfg = finalized_defaults()?;
    cfg.build.bin = "dist/app".to_string();

    assert_eq!(cfg.bin_path(), PathBuf::from("/proj/dist/app"));
    Ok(())
}

#[test]
fn delays_convert_to_durations() -> TestResult {
    let mut cfg = finalized_defaults()?;
    assert_eq!(cfg.build_delay(), Duration::from_millis(1000));
    assert_eq!(cfg.kill_delay(), Duration::ZERO);

    cfg.build.delay = 0;
    cfg.build.kill_delay = KillDelay(Duration::from_millis(500));
    assert_eq!(cfg.build_delay(), Duration::ZERO);
    assert_eq!(cfg.kill_delay(), Duration::from_millis(500));
    Ok(())
}

#[test]
fn rel_is_relative_to_root() -> TestResult {
    let cfg = finalized_defaults()?;

    assert_eq!(cfg.rel("/proj/cmd/server/main.go"), "cmd/server/main.go");
    assert_eq!(cfg.rel("/proj"), ".");
    assert_eq!(cfg.rel("/other/file.go"), "../other/file.go");
    Ok(())
}

#[test]
fn rel_degrades_to_empty_string() -> TestResult {
    let cfg = finalized_defaults()?;

    assert_eq!(cfg.rel("relative/file.go"), "");
    Ok(())
}

#[test]
fn color_info_maps_four_surfaces() -> TestResult {
    let mut cfg = finalized_defaults()?;
    cfg.color.app = "white".to_string();

    let colors = cfg.color_info();

    assert_eq!(colors.len(), 4);
    assert_eq!(colors["main"], "magenta");
    assert_eq!(colors["watcher"], "cyan");
    assert_eq!(colors["build"], "yellow");
    assert_eq!(colors["runner"], "green");
    assert!(!colors.contains_key("app"));
    Ok(())
}

#[test]
fn resolved_config_round_trips_through_json() -> TestResult {
    let cfg = finalized_defaults()?;

    let json = serde_json::to_string(&cfg)?;
    let back: Config = serde_json::from_str(&json)?;

    assert_eq!(back, cfg);
    Ok(())
}
