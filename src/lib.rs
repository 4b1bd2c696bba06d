// src/lib.rs

pub mod cli;
pub mod config;
pub mod env;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{Config, ConfigResolver};

/// High-level entry point used by `main.rs`.
///
/// Resolves the configuration for the current process (discovery, merge,
/// platform adaptation, path normalization) and prints it. The watcher,
/// builder and runner consume the same [`Config`].
pub fn run(args: CliArgs) -> Result<()> {
    let resolver = ConfigResolver::from_process();
    let cfg = resolver
        .resolve(&args.config)
        .context("resolving configuration")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg).context("serializing configuration")?
        );
        return Ok(());
    }

    print_summary(&cfg);
    Ok(())
}

/// Human-readable view of the resolved configuration and derived paths.
fn print_summary(cfg: &Config) {
    println!("relaunch configuration");
    println!("  root = {}", cfg.root.display());
    println!("  tmp_dir = {}", cfg.tmp_dir);
    println!();

    println!("build:");
    println!("  cmd: {}", cfg.build.cmd);
    println!("  bin: {}", cfg.build.bin);
    if !cfg.build.full_bin.is_empty() {
        println!("  full_bin: {}", cfg.build.full_bin);
    }
    println!("  log: {}", cfg.build_log_path().display());
    println!("  include_ext: {:?}", cfg.build.include_ext);
    println!("  exclude_dir: {:?}", cfg.build.exclude_dir);
    if !cfg.build.include_dir.is_empty() {
        println!("  include_dir: {:?}", cfg.build.include_dir);
    }
    if !cfg.build.exclude_file.is_empty() {
        println!("  exclude_file: {:?}", cfg.build.exclude_file);
    }
    println!("  delay: {:?}", cfg.build_delay());
    println!("  stop_on_error: {}", cfg.build.stop_on_error);
    println!("  send_interrupt: {}", cfg.build.send_interrupt);
    println!("  kill_delay: {:?}", cfg.kill_delay());
    println!();

    println!("color:");
    for (surface, color) in cfg.color_info() {
        println!("  {surface}: {color}");
    }
    if !cfg.color.app.is_empty() {
        println!("  app: {}", cfg.color.app);
    }
    println!();

    println!("log.time = {}", cfg.log.time);
    println!("misc.clean_on_exit = {}", cfg.misc.clean_on_exit);

    debug!("summary printed");
}
