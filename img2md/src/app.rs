use crate::cli::{target_line, Cli};
use anyhow::Context;
use clap::Parser;
use md_img64_lib::error::ImageRefError;
use md_img64_lib::mime::mime_subtype_for_path;
use md_img64_lib::output::{finalize_output, OutputMode};
use md_img64_lib::prompt::prompt_line;
use md_img64_lib::storage::{clean_path_input, read_image_base64, read_markdown};
use md_img64_lib::{ImageInsertion, MarkdownDocument};
use std::io;
use std::path::{Path, PathBuf};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        md_dir,
        img_dir,
        line,
        describe,
        output,
    } = Cli::parse();
    let mode = output.mode();

    let md_path = resolve_path(md_dir, "Markdown file path (--md-dir)", "Markdown file")?;
    let img_path = resolve_path(img_dir, "Image file path (--img-dir)", "image file")?;

    // Validate both inputs before reading anything.
    if !md_path.exists() {
        return Err(ImageRefError::MarkdownNotFound(md_path).into());
    }
    if !img_path.exists() {
        return Err(ImageRefError::ImageNotFound(img_path).into());
    }

    let subtype = mime_subtype_for_path(&img_path)?;
    let payload = read_image_base64(&img_path)?;
    let original = read_markdown(&md_path)?;

    let mut doc = MarkdownDocument::new(&original);
    let outcome = doc.insert_image(&ImageInsertion {
        description: describe,
        subtype,
        payload,
        target_line: target_line(line),
    })?;
    log::debug!(
        "Placeholder for {} placed at line {}",
        outcome.id,
        outcome.placeholder_line
    );

    finalize_output(
        &mode,
        &md_path,
        &original,
        &doc.render(),
        &mut io::stdout().lock(),
    )
    .with_context(|| format!("Image was not saved into {}", md_path.display()))?;

    let summary = format!(
        "Inserted image into {}\nIndex ID: {}",
        written_path(&mode, &md_path).display(),
        outcome.id
    );
    if mode.is_preview() {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }

    Ok(())
}

/// Takes the path from the command line or, failing that, from a prompt.
fn resolve_path(
    arg: Option<String>,
    prompt: &str,
    what: &'static str,
) -> anyhow::Result<PathBuf> {
    let raw = match arg {
        Some(raw) => raw,
        None => prompt_line(prompt)?,
    };

    let path = clean_path_input(&raw);
    if path.as_os_str().is_empty() {
        return Err(ImageRefError::MissingPath(what).into());
    }

    Ok(path)
}

fn written_path<'a>(mode: &'a OutputMode, source: &'a Path) -> &'a Path {
    match mode {
        OutputMode::File(path) => path.as_path(),
        _ => source,
    }
}
