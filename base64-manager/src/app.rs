use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use md_img64_lib::error::ImageRefError;
use md_img64_lib::output::finalize_output;
use md_img64_lib::prompt::prompt_line;
use md_img64_lib::selection::{parse_id_list, TargetSelection};
use md_img64_lib::storage::{clean_path_input, read_markdown};
use md_img64_lib::MarkdownDocument;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        md_dir,
        idx,
        list,
        json,
        output,
    } = Cli::parse();
    let mode = output.mode();

    let md_path = resolve_md_path(md_dir)?;
    let original = read_markdown(&md_path)?;
    let mut doc = MarkdownDocument::new(&original);
    let scan = doc.scan();
    log::debug!("Found {} distinct image ids in {}", scan.len(), md_path.display());

    if json {
        let report = serde_json::to_string_pretty(&scan.hits())
            .context("Failed to serialize the reference list")?;
        println!("{report}");
        return Ok(());
    }

    // Keep stdout clean for the document or diff when previewing.
    let report = Reporter {
        to_stderr: mode.is_preview(),
    };

    if scan.is_empty() {
        report.say(format!(
            "No Base64 image references found in {}.",
            md_path.display()
        ));
        return Ok(());
    }

    report.say(format!(
        "Found the following Base64 image references in {}:",
        md_path.display()
    ));
    for hit in scan.hits() {
        report.say(format!("- {hit}"));
    }

    if list {
        return Ok(());
    }

    let requested = match idx {
        Some(raw) => parse_id_list(&raw),
        None => parse_id_list(&prompt_line(
            "Image ids to delete, separated by commas or spaces (Enter to skip)",
        )?),
    };
    if requested.is_empty() {
        report.say("No image ids specified, exiting.");
        return Ok(());
    }

    let selection = TargetSelection::resolve(requested, &scan);
    if !selection.unknown.is_empty() {
        log::debug!("Ignoring unknown ids: {:?}", selection.unknown);
        eprintln!(
            "Warning: the following image ids were not found and will be ignored: {}",
            join(&selection.unknown)
        );
    }
    if selection.is_empty() {
        report.say("Nothing to delete.");
        return Ok(());
    }

    let removed = doc.remove_ids(&selection.valid);

    finalize_output(
        &mode,
        &md_path,
        &original,
        &doc.render(),
        &mut io::stdout().lock(),
    )
    .with_context(|| format!("References were not removed from {}", md_path.display()))?;

    report.say(format!(
        "Removed {} Base64 reference(s): {}",
        removed.len(),
        join(&removed)
    ));

    Ok(())
}

fn resolve_md_path(arg: Option<String>) -> anyhow::Result<PathBuf> {
    let raw = match arg {
        Some(raw) => raw,
        None => prompt_line("Markdown file path (--md-dir)")?,
    };

    let path = clean_path_input(&raw);
    if path.as_os_str().is_empty() {
        return Err(ImageRefError::MissingPath("Markdown file").into());
    }

    Ok(path)
}

fn join(ids: &BTreeSet<String>) -> String {
    ids.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

struct Reporter {
    to_stderr: bool,
}

impl Reporter {
    fn say(&self, message: impl Display) {
        if self.to_stderr {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }
}
