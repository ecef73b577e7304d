use crate::diff::{self, DiffBlock};
use crate::ignore::{self, IgnoreConfig};
use crate::walk;
use crate::{status, warning};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// outcome of comparing the common files of two trees
#[derive(Debug)]
pub struct Comparison {
    /// true when every common file matched (or there were none)
    pub identical: bool,
    /// one block per differing file, in traversal order
    pub diffs: Vec<DiffBlock>,
}

/// walk both trees, filter ignored names, and diff every common file
pub fn compare_directories(
    template_dir: &Path,
    client_dir: &Path,
    ignores: &IgnoreConfig,
    context: usize,
) -> Result<Comparison> {
    if !template_dir.is_dir() {
        bail!("template path {} is not a valid directory", template_dir.display());
    }
    if !client_dir.is_dir() {
        bail!("client path {} is not a valid directory", client_dir.display());
    }

    let mut template_files = walk::walk_files(template_dir, &ignores.dirs)?;
    let mut client_files = walk::walk_files(client_dir, &ignores.dirs)?;

    // report what the ignore set strips from the client before removal
    let ignored = ignore::ignored_names(&client_files, &ignores.files);
    if !ignored.is_empty() {
        warning!("ignoring files: {}", ignored.join(", "));
    }
    ignore::retain_unignored(&mut template_files, &ignores.files);
    ignore::retain_unignored(&mut client_files, &ignores.files);

    let common: Vec<PathBuf> = template_files.intersection(&client_files).cloned().collect();
    if common.is_empty() {
        status!("no common files found");
        return Ok(Comparison {
            identical: true,
            diffs: Vec::new(),
        });
    }

    let progress = ProgressBar::new(common.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("comparing {pos}/{len} {wide_bar}")
            .expect("invalid progress template"),
    );

    let mut diffs = Vec::new();
    for relative_path in &common {
        let template_path = template_dir.join(relative_path);
        let client_path = client_dir.join(relative_path);

        // whole-file reads, both handles closed before the next pair
        let template_text = fs::read_to_string(&template_path)
            .with_context(|| format!("failed to read {}", template_path.display()))?;
        let client_text = fs::read_to_string(&client_path)
            .with_context(|| format!("failed to read {}", client_path.display()))?;

        if template_text != client_text {
            progress.suspend(|| warning!("found differences in {}", relative_path.display()));
            diffs.push(diff::unified_diff(
                &client_text,
                &template_text,
                &client_path,
                &template_path,
                relative_path,
                context,
            ));
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(Comparison {
        identical: diffs.is_empty(),
        diffs,
    })
}

#[cfg(test)]
mod tests;
