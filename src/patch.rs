use crate::constants::{PATCH_FILE_PREFIX, PATCH_FILE_SUFFIX};
use crate::diff::DiffBlock;
use crate::status;
use anyhow::{Context, Result, bail};
use std::io::Write;
use std::process::Command;

/// applies a unified patch document to the files it names
///
/// production code uses [`GitApply`]; tests substitute a fake that records
/// the patch text and returns a configurable status
pub trait PatchTool {
    fn apply(&self, patch: &str) -> Result<()>;
}

/// applies patches by shelling out to `git apply`
///
/// uses the git binary rather than an in-process library so the result
/// matches what an operator running `git apply` by hand would get
pub struct GitApply;

impl PatchTool for GitApply {
    fn apply(&self, patch: &str) -> Result<()> {
        // the patch lives in a uniquely named file in the current working
        // directory and is removed when the handle drops, success or failure
        let mut patch_file = tempfile::Builder::new()
            .prefix(PATCH_FILE_PREFIX)
            .suffix(PATCH_FILE_SUFFIX)
            .tempfile_in(".")
            .context("failed to create temporary patch file")?;
        patch_file
            .write_all(patch.as_bytes())
            .context("failed to write temporary patch file")?;
        patch_file
            .flush()
            .context("failed to flush temporary patch file")?;

        // diff headers carry full paths, so -p0 keeps them intact and
        // --unsafe-paths allows targets outside any enclosing repository
        let output = Command::new("git")
            .arg("apply")
            .arg("--unsafe-paths")
            .arg("-p0")
            .arg(patch_file.path())
            .output()
            .context("failed to run git apply")?;

        if !output.status.success() {
            bail!(
                "git apply failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }
}

/// concatenate the diff blocks into a single patch document and hand it to
/// the tool. an empty sequence succeeds without invoking anything
pub fn apply_diffs(diffs: &[DiffBlock], tool: &dyn PatchTool) -> Result<()> {
    if diffs.is_empty() {
        status!("no diffs to apply");
        return Ok(());
    }

    let patch: String = diffs.iter().map(|block| block.text.as_str()).collect();
    tool.apply(&patch)
}
