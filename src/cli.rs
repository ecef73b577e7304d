use crate::constants::DEFAULT_CONTEXT;
use clap::Parser;
use std::path::PathBuf;

/// congruency: compare files common to a template and a client directory,
/// optionally patching the client back into line with the template
#[derive(Parser, Debug)]
#[command(name = "congruency", about, long_about = None)]
pub struct Cli {
    /// template directory path to compare
    #[arg(short = 't', long)]
    pub template_directory: PathBuf,

    /// client directory path to compare
    #[arg(short = 'c', long)]
    pub client_directory: PathBuf,

    /// comma-separated list of additional file names to ignore
    #[arg(short = 'i', long, default_value = "")]
    pub ignore_files: String,

    /// comma-separated list of additional directory names to ignore
    #[arg(short = 'd', long, default_value = "")]
    pub ignore_dirs: String,

    /// disable the default ignore lists for both files and directories
    #[arg(long)]
    pub no_default_ignores: bool,

    /// apply the differences to the client directory using git apply
    #[arg(long)]
    pub apply_diffs: bool,

    /// number of context lines in generated diffs
    #[arg(short = 'U', long, default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
