//! Input path expansion: files, directories and glob patterns.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::is_source_file;

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

pub fn compile_ignores(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '--ignore': \"{}\"", pattern))
        })
        .collect()
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| name == *dir)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_source_file(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => warn!("Cannot access path: {}", e),
        }
    }
}

fn expand_glob(pattern: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let paths = glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;

    for path in paths {
        match path {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) if path.is_dir() => walk_dir(&path, files),
            Ok(_) => {}
            Err(e) => warn!("Cannot access path: {}", e),
        }
    }
    Ok(())
}

/// Expand CLI inputs into a deduplicated list of files, in input order.
///
/// Explicit file paths are kept whatever their extension; directories and
/// globs only yield source files.
pub fn collect_files(inputs: &[String], ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            walk_dir(path, &mut files);
        } else if is_glob(input) {
            expand_glob(input, &mut files)?;
        } else {
            bail!("Path does not exist: {}", input);
        }
    }

    let mut seen = HashSet::new();
    files.retain(|file| {
        if ignores.iter().any(|pattern| pattern.matches_path(file)) {
            debug!(file = %file.display(), "ignored");
            return false;
        }
        seen.insert(file.clone())
    });

    Ok(files)
}
