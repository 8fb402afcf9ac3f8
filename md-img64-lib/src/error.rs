//! Defines custom error types for the library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when embedding or removing Base64 images fails.
pub enum ImageRefError {
    #[error("No {0} path was provided.")]
    MissingPath(&'static str),

    #[error("Markdown file not found: {}", .0.display())]
    MarkdownNotFound(PathBuf),

    #[error("Image file not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("Image file has no extension, cannot determine its MIME subtype: {}", .0.display())]
    MissingImageExtension(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image index '{0}' does not fit in a 64-bit integer.")]
    IndexOverflow(String),

    #[error("Interactive prompt failed: {0}")]
    Prompt(String),
}
