use colored::Colorize;
use similar::TextDiff;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// unified-diff text covering one file common to both trees
#[derive(Debug)]
pub struct DiffBlock {
    /// path relative to the compared roots, for reporting
    pub path: PathBuf,
    /// unified diff document, from = client content, to = template content
    pub text: String,
}

impl DiffBlock {
    /// colourise the diff for terminal display: removals red, additions
    /// green, hunk headers cyan, file headers bold
    pub fn render_colored(&self) -> String {
        let mut output = String::new();
        for line in self.text.lines() {
            if line.starts_with("---") || line.starts_with("+++") {
                let _ = writeln!(output, "{}", line.bold());
            } else if line.starts_with("@@") {
                let _ = writeln!(output, "{}", line.cyan());
            } else if line.starts_with('+') {
                let _ = writeln!(output, "{}", line.green());
            } else if line.starts_with('-') {
                let _ = writeln!(output, "{}", line.red());
            } else {
                let _ = writeln!(output, "{line}");
            }
        }
        output
    }
}

/// unified diff of the client file against the template file, labeled with
/// their full paths. applying the result moves the client content toward
/// the template content
pub fn unified_diff(
    client_text: &str,
    template_text: &str,
    client_path: &Path,
    template_path: &Path,
    relative_path: &Path,
    context: usize,
) -> DiffBlock {
    let diff = TextDiff::from_lines(client_text, template_text);
    let text = diff
        .unified_diff()
        .context_radius(context)
        .header(
            &client_path.display().to_string(),
            &template_path.display().to_string(),
        )
        .to_string();

    DiffBlock {
        path: relative_path.to_path_buf(),
        text,
    }
}
