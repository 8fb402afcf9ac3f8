//! Decides where an edited document goes: back over the source file, to a
//! separate file, or to stdout as a preview.

use crate::error::ImageRefError;
use crate::storage::write_markdown;
use similar::TextDiff;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Replace the source file.
    #[default]
    InPlace,
    /// Write to another file and leave the source alone.
    File(PathBuf),
    /// Print the whole document, write nothing.
    DryRun,
    /// Print a unified diff of the pending change, write nothing.
    Diff,
}

impl OutputMode {
    /// `true` when the document (or its diff) is printed instead of saved.
    pub fn is_preview(&self) -> bool {
        matches!(self, OutputMode::DryRun | OutputMode::Diff)
    }
}

/// The `--output` / `--dry-run` / `--diff` flags shared by both tools.
#[cfg(feature = "cli")]
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the output to a new file instead of modifying the original.
    #[arg(
        short,
        long,
        value_name = "OUTPUT_PATH",
        conflicts_with_all = ["dry_run", "diff"]
    )]
    pub output: Option<PathBuf>,

    /// Print the resulting document without writing any files.
    #[arg(long, conflicts_with = "diff")]
    pub dry_run: bool,

    /// Show a diff of the pending changes instead of writing files.
    #[arg(long)]
    pub diff: bool,
}

#[cfg(feature = "cli")]
impl OutputArgs {
    pub fn mode(&self) -> OutputMode {
        if self.dry_run {
            OutputMode::DryRun
        } else if self.diff {
            OutputMode::Diff
        } else if let Some(path) = &self.output {
            OutputMode::File(path.clone())
        } else {
            OutputMode::InPlace
        }
    }
}

/// Delivers `rendered` according to `mode`. Previews are written to `stdout`.
pub fn finalize_output<W: Write>(
    mode: &OutputMode,
    source: &Path,
    original: &str,
    rendered: &str,
    stdout: &mut W,
) -> Result<(), ImageRefError> {
    let stdout_err = |source: std::io::Error| ImageRefError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    };

    match mode {
        OutputMode::InPlace => write_markdown(source, rendered),
        OutputMode::File(path) => write_markdown(path, rendered),
        OutputMode::DryRun => stdout.write_all(rendered.as_bytes()).map_err(stdout_err),
        OutputMode::Diff => {
            let diff = TextDiff::from_lines(original, rendered)
                .unified_diff()
                .header("original", "modified")
                .to_string();
            stdout.write_all(diff.as_bytes()).map_err(stdout_err)
        }
    }
}
