//! Whole-file reads and writes for Markdown documents and images.

use crate::error::ImageRefError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder as TempFileBuilder;

/// Turns a user-supplied path into a filesystem path, dropping surrounding
/// whitespace and any quote characters around it (as left behind by
/// "copy as path" in file managers).
pub fn clean_path_input(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(|c| c == '"' || c == '\''))
}

/// Reads a Markdown file as UTF-8.
pub fn read_markdown(path: &Path) -> Result<String, ImageRefError> {
    if !path.exists() {
        return Err(ImageRefError::MarkdownNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| ImageRefError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads an image file and returns its bytes as standard Base64.
pub fn read_image_base64(path: &Path) -> Result<String, ImageRefError> {
    if !path.exists() {
        return Err(ImageRefError::ImageNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| ImageRefError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(STANDARD.encode(bytes))
}

/// Replaces the contents of `path` with `content`.
///
/// The content is written to a temporary file next to the target and then
/// renamed over it, so a failed write leaves the original file as it was.
/// An existing target keeps its permissions; a read-only one is refused.
pub fn write_markdown(path: &Path, content: &str) -> Result<(), ImageRefError> {
    let write_err = |source: io::Error| ImageRefError::Write {
        path: path.to_path_buf(),
        source,
    };

    let existing_perms = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(write_err(err)),
    };
    if existing_perms.as_ref().is_some_and(|perms| perms.readonly()) {
        return Err(write_err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )));
    }

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".md-img64-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .map_err(write_err)?;

    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    if let Some(perms) = existing_perms {
        temp_file.as_file().set_permissions(perms).map_err(write_err)?;
    }

    temp_file
        .persist(path)
        .map_err(|persist_err| write_err(persist_err.error))?;

    log::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
