use crate::constants::{DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES};
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

/// names excluded from comparison, fixed for the lifetime of a run
#[derive(Debug)]
pub struct IgnoreConfig {
    /// file base names to drop from both file sets
    pub files: HashSet<String>,
    /// directory names pruned during traversal
    pub dirs: HashSet<String>,
}

impl IgnoreConfig {
    /// combine the built-in ignore sets with comma-separated additions
    pub fn build(no_defaults: bool, extra_files: &str, extra_dirs: &str) -> Self {
        let mut files = HashSet::new();
        let mut dirs = HashSet::new();

        if !no_defaults {
            files.extend(DEFAULT_IGNORE_FILES.iter().map(ToString::to_string));
            dirs.extend(DEFAULT_IGNORE_DIRS.iter().map(ToString::to_string));
        }

        files.extend(parse_ignore_list(extra_files));
        dirs.extend(parse_ignore_list(extra_dirs));

        Self { files, dirs }
    }
}

/// split a comma-separated ignore list into names, trimming whitespace
/// and dropping empty segments
pub fn parse_ignore_list(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// base names of entries that the ignore set will remove, sorted for display
pub fn ignored_names(files: &BTreeSet<PathBuf>, ignore_files: &HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .filter(|name| ignore_files.contains(*name))
        .map(ToString::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// drop entries whose base name is in the ignore set (exact match, not glob)
pub fn retain_unignored(files: &mut BTreeSet<PathBuf>, ignore_files: &HashSet<String>) {
    files.retain(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| !ignore_files.contains(name))
    });
}
