//! Builds the text of a reference-style image: the placeholder shown inline and
//! the trailing definition line carrying the Base64 payload.

/// Prefix shared by every id the inserter allocates (`image-1`, `image-2`, ...).
pub const IMAGE_ID_PREFIX: &str = "image-";

/// Default alt text used when no description is given.
pub const DEFAULT_DESCRIPTION: &str = "Alt text";

/// Lines written between the document body and a new data line.
const DATA_BLOCK_HEADER: [&str; 5] = ["\n", "\n", "--------\n", "#\n", "\n"];

/// Returns the id text for a numeric index, e.g. `image-3`.
pub fn image_id(index: u64) -> String {
    format!("{IMAGE_ID_PREFIX}{index}")
}

/// Returns the inline placeholder line, terminator included.
///
/// ```
/// use md_img64_lib::reference::placeholder_line;
///
/// assert_eq!(placeholder_line(2, "A cat"), "![A cat][image-2]\n");
/// ```
pub fn placeholder_line(index: u64, description: &str) -> String {
    format!("![{description}][{}]\n", image_id(index))
}

/// Returns a definition line for an arbitrary id, terminator included.
pub fn data_line(id: &str, subtype: &str, payload: &str) -> String {
    format!("[{id}]:data:image/{subtype};base64,{payload}\n")
}

/// Returns every line of the block appended after the document body: two
/// blank lines, a `--------` rule, a bare `#`, a blank line and finally the
/// data line itself.
pub fn data_block_lines(index: u64, subtype: &str, payload: &str) -> Vec<String> {
    let mut lines: Vec<String> = DATA_BLOCK_HEADER.iter().map(|l| l.to_string()).collect();
    lines.push(data_line(&image_id(index), subtype, payload));
    lines
}
