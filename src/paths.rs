// src/paths.rs

//! Path helpers used while finalizing a configuration.
//!
//! Everything here is lexical: paths are never canonicalized through the
//! filesystem, so symlinks are preserved and nothing has to exist on disk.

use std::path::{Component, Path, PathBuf};

use crate::env::Environment;
use crate::errors::{ConfigError, Result};

/// Lexically clean a path.
///
/// Drops `.` segments and trailing separators, folds `name/..` pairs and
/// collapses `..` directly under the root. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}

/// Clean a user-written path entry (e.g. an `exclude_dir` item).
pub fn clean_entry(entry: &str) -> String {
    clean_path(Path::new(entry.trim()))
        .to_string_lossy()
        .into_owned()
}

/// Expand a root path into an absolute, cleaned path.
///
/// `~` and `~/...` resolve against the home directory; other relative paths
/// resolve against the current directory.
pub fn expand_path(path: &Path, env: &dyn Environment) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    if raw == "~" || raw.starts_with("~/") || raw.starts_with("~\\") {
        let home = env.home_dir().ok_or_else(|| ConfigError::Path {
            path: path.to_path_buf(),
            message: "home directory is unknown".to_string(),
        })?;
        let rest = raw[1..].trim_start_matches(['/', '\\']);
        return Ok(clean_path(&home.join(rest)));
    }

    absolutize(path, env)
}

/// Make `path` absolute against the current directory, then clean it.
pub fn absolutize(path: &Path, env: &dyn Environment) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }

    let cwd = env.current_dir().map_err(|e| ConfigError::Path {
        path: path.to_path_buf(),
        message: format!("{e:#}"),
    })?;
    Ok(clean_path(&cwd.join(path)))
}

/// Compute `target` relative to `base`, using `..` where needed.
///
/// Returns `None` when one path is absolute and the other is not, when they
/// live under different prefixes, or when `base` climbs above its start.
pub fn relative_to(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = clean_path(base);
    let target = clean_path(target);
    if base.is_absolute() != target.is_absolute() || base.has_root() != target.has_root() {
        return None;
    }

    let base_comps: Vec<Component<'_>> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let target_comps: Vec<Component<'_>> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = base_comps
        .iter()
        .zip(target_comps.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let prefixed = |comps: &[Component<'_>]| matches!(comps.first(), Some(Component::Prefix(_)));
    if common == 0 && (prefixed(&base_comps) || prefixed(&target_comps)) {
        return None;
    }

    let base_rest = &base_comps[common..];
    if base_rest.contains(&Component::ParentDir) {
        return None;
    }

    let mut out = PathBuf::new();
    for _ in base_rest {
        out.push("..");
    }
    for comp in &target_comps[common..] {
        out.push(comp.as_os_str());
    }

    if out.as_os_str().is_empty() {
        return Some(PathBuf::from("."));
    }
    Some(out)
}
