//! Maps image file extensions to the subtype used in `data:image/<subtype>` URIs.

use crate::error::ImageRefError;
use std::path::Path;

/// Returns the MIME image subtype for a file extension.
///
/// The lookup is case-insensitive and tolerates a leading dot. Only `jpg` is
/// rewritten (to `jpeg`); every other extension is passed through as-is, so
/// `ico` stays `ico` rather than becoming `x-icon`.
pub fn mime_subtype(extension: &str) -> String {
    let ext = extension.trim_start_matches('.').to_lowercase();
    if ext == "jpg" {
        return "jpeg".to_string();
    }
    ext
}

/// Resolves the subtype from an image path's extension.
pub fn mime_subtype_for_path(path: &Path) -> Result<String, ImageRefError> {
    let subtype = path
        .extension()
        .map(|ext| mime_subtype(&ext.to_string_lossy()))
        .unwrap_or_default();

    if subtype.is_empty() {
        return Err(ImageRefError::MissingImageExtension(path.to_path_buf()));
    }

    Ok(subtype)
}
