//! Defines the command-line interface for base64-manager.

use clap::Parser;
use md_img64_lib::output::OutputArgs;

#[derive(Parser, Debug)]
#[command(
    name = "base64-manager",
    version,
    about = "List and remove Base64 image definitions in a Markdown file."
)]
pub struct Cli {
    /// The Markdown file to inspect. [default: prompts for it]
    #[arg(long = "md-dir", value_name = "MD_PATH")]
    pub md_dir: Option<String>,

    /// Image ids to delete, separated by spaces, commas or semicolons. [default: prompts for them]
    #[arg(long, value_name = "IDS", allow_hyphen_values = true, conflicts_with = "list")]
    pub idx: Option<String>,

    /// Only list the references found, do not delete anything.
    #[arg(long)]
    pub list: bool,

    /// List the references found as JSON. Implies --list.
    #[arg(long, conflicts_with = "idx")]
    pub json: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}
