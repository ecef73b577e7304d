mod cli;
mod compare;
mod constants;
mod diff;
mod ignore;
mod patch;
mod ui;
mod walk;

use crate::cli::Cli;
use crate::diff::DiffBlock;
use crate::ignore::IgnoreConfig;
use crate::patch::GitApply;
use anyhow::{Result, bail};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ignores = IgnoreConfig::build(cli.no_default_ignores, &cli.ignore_files, &cli.ignore_dirs);

    let comparison = compare::compare_directories(
        &cli.template_directory,
        &cli.client_directory,
        &ignores,
        cli.context,
    )?;

    if comparison.identical {
        status!(
            "success: {} and {} match",
            cli.template_directory.display(),
            cli.client_directory.display()
        );
        return Ok(());
    }

    display_diffs(&comparison.diffs);

    if cli.apply_diffs {
        patch::apply_diffs(&comparison.diffs, &GitApply)?;
        status!("successfully applied all patches");
        return Ok(());
    }

    let file_count = comparison.diffs.len();
    let file_word = if file_count == 1 { "file" } else { "files" };
    bail!("found differences in {file_count} {file_word}; re-run with --apply-diffs to update the client")
}

/// print each diff block for the operator
fn display_diffs(diffs: &[DiffBlock]) {
    for block in diffs {
        info!();
        info!("{}", block.render_colored().trim_end());
    }
}
