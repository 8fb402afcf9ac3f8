//! Defines the command-line interface for img2md.

use clap::Parser;
use md_img64_lib::output::OutputArgs;
use md_img64_lib::reference::DEFAULT_DESCRIPTION;

#[derive(Parser, Debug)]
#[command(
    name = "img2md",
    version,
    about = "Embed an image into a Markdown file as an inline Base64 reference."
)]
pub struct Cli {
    /// The Markdown file to modify. [default: prompts for it]
    #[arg(long = "md-dir", value_name = "MD_PATH")]
    pub md_dir: Option<String>,

    /// The image file to embed. [default: prompts for it]
    #[arg(long = "img-dir", value_name = "IMG_PATH")]
    pub img_dir: Option<String>,

    /// Insert the image reference before this line (1-indexed). [default: end of document]
    #[arg(short = 'n', value_name = "LINE", allow_negative_numbers = true)]
    pub line: Option<i64>,

    /// Alt text for the image.
    #[arg(
        long,
        value_name = "TEXT",
        default_value = DEFAULT_DESCRIPTION,
        allow_hyphen_values = true
    )]
    pub describe: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Maps `-n` onto a 1-based target line. Zero and negative values mean the
/// top of the document.
pub fn target_line(line: Option<i64>) -> Option<usize> {
    line.map(|n| usize::try_from(n.max(1)).unwrap_or(usize::MAX))
}
