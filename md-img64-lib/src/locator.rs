//! Locates image placeholders and Base64 data lines within a document.

use crate::error::ImageRefError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Matches `[image-<digits>]` anywhere in the text, placeholders and data lines alike.
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[image-([0-9]+)\]").expect("placeholder pattern is valid"));

/// Matches a whole data line such as `[image-1]:data:image/png;base64,iVBOR...`.
static DATA_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\[([^\]]+)\]:\s*data:image/[^;]+;base64,.*$")
        .expect("data line pattern is valid")
});

/// Returns the index the next inserted image should use: one past the highest
/// `[image-N]` found in `content`, or 1 when there is none.
///
/// Anything that is not a well-formed `[image-<digits>]` token is ignored.
/// Indices that do not fit in a `u64` are an error rather than being skipped,
/// since skipping them could hand out an id that is already taken.
pub fn next_image_index(content: &str) -> Result<u64, ImageRefError> {
    let mut highest: Option<u64> = None;

    for caps in PLACEHOLDER_PATTERN.captures_iter(content) {
        let digits = &caps[1];
        let value: u64 = digits
            .parse()
            .map_err(|_| ImageRefError::IndexOverflow(digits.to_string()))?;
        highest = Some(highest.map_or(value, |current| current.max(value)));
    }

    match highest {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ImageRefError::IndexOverflow(format!("{max} + 1"))),
    }
}

/// Returns the id of a data line, or `None` if the line is not one.
///
/// The line may still carry its terminator.
pub fn parse_data_line(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    DATA_LINE_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().trim())
}

/// Every data line found in a document, grouped by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRefScan {
    /// Id to the 0-based indices of the lines defining it, in document order.
    hits: BTreeMap<String, Vec<usize>>,
}

impl ImageRefScan {
    /// Returns `true` if no data line was found.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of distinct ids found.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.hits.contains_key(id)
    }

    /// Ids in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.hits.keys().map(String::as_str)
    }

    /// 0-based line indices for an id.
    pub fn line_indices(&self, id: &str) -> Option<&[usize]> {
        self.hits.get(id).map(Vec::as_slice)
    }

    /// The report entries, sorted by id, with 1-based line numbers.
    pub fn hits(&self) -> Vec<ImageRefHit> {
        self.hits
            .iter()
            .map(|(id, indices)| ImageRefHit {
                id: id.clone(),
                lines: indices.iter().map(|index| index + 1).collect(),
            })
            .collect()
    }
}

/// One id of a scan report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRefHit {
    pub id: String,
    /// 1-based line numbers.
    pub lines: Vec<usize>,
}

impl fmt::Display for ImageRefHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines.iter().map(usize::to_string).collect();
        write!(f, "{} (lines: {})", self.id, lines.join(","))
    }
}

/// Scans every line and records where each data line id occurs.
///
/// Ids are not required to be unique; repeated definitions are all tracked.
pub fn find_image_refs<S: AsRef<str>>(lines: &[S]) -> ImageRefScan {
    let mut hits: BTreeMap<String, Vec<usize>> = BTreeMap::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(id) = parse_data_line(line.as_ref()) {
            log::debug!("Found data line for '{id}' at line {}", index + 1);
            hits.entry(id.to_string()).or_default().push(index);
        }
    }

    ImageRefScan { hits }
}
