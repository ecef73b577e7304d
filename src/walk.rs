use anyhow::{Context, Result, bail};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// recursively collect regular files under root, relative to root,
/// pruning any directory below the root whose name is in the ignore set
pub fn walk_files(root: &Path, ignore_dirs: &HashSet<String>) -> Result<BTreeSet<PathBuf>> {
    if !root.is_dir() {
        bail!("{} is not a valid directory", root.display());
    }

    let mut files = BTreeSet::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignore_dirs));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to traverse {}", root.display()))?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("walked outside {}", root.display()))?;
            files.insert(relative.to_path_buf());
        }
    }

    Ok(files)
}

/// the root itself (depth 0) is never pruned, whatever it is named
fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &HashSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.contains(name))
}
