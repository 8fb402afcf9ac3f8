//! `md-img64-lib` holds the shared convention behind the `img2md` and
//! `base64-manager` tools: images embedded in Markdown as a reference-style
//! placeholder (`![alt][image-N]`) plus a trailing definition line carrying
//! the picture as a `data:` URI.
//!
//! The document is handled as a sequence of lines, each keeping its own
//! terminator, so rendering gives back the original bytes apart from the
//! edits that were applied.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use std::str::FromStr;
//!
//! use md_img64_lib::{ImageInsertion, MarkdownDocument};
//!
//! # fn demo() -> Result<(), md_img64_lib::error::ImageRefError> {
//! let mut document = MarkdownDocument::from_str("# Report\n\nSee below.\n").unwrap();
//!
//! let outcome = document.insert_image(&ImageInsertion {
//!     description: "Chart".into(),
//!     subtype: "png".into(),
//!     payload: "iVBORw0KGgo=".into(),
//!     target_line: Some(2),
//! })?;
//! assert_eq!(outcome.id, "image-1");
//! assert!(document.scan().contains("image-1"));
//!
//! let removed = document.remove_ids(&BTreeSet::from(["image-1".to_string()]));
//! assert_eq!(removed.len(), 1);
//! assert!(document.render().contains("![Chart][image-1]"));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod error;
pub mod locator;
pub mod mime;
pub mod output;
pub mod prompt;
pub mod reference;
pub mod selection;
pub mod splicer;
pub mod storage;

use crate::error::ImageRefError;
use crate::locator::{find_image_refs, next_image_index, ImageRefScan};
use crate::reference::{data_block_lines, image_id, placeholder_line, DEFAULT_DESCRIPTION};
use crate::splicer::{append_data_block, insert_placeholder};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// An in-memory Markdown document, stored line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    lines: Vec<String>,
}

/// Everything needed to embed one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInsertion {
    /// Alt text shown in the placeholder.
    pub description: String,
    /// MIME image subtype, e.g. `png` or `jpeg`.
    pub subtype: String,
    /// Standard Base64 of the image bytes.
    pub payload: String,
    /// 1-based line to insert the placeholder before; `None` appends it.
    pub target_line: Option<usize>,
}

impl Default for ImageInsertion {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            subtype: String::new(),
            payload: String::new(),
            target_line: None,
        }
    }
}

/// Result of [`MarkdownDocument::insert_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// The numeric index that was allocated.
    pub index: u64,
    /// The id text, e.g. `image-3`.
    pub id: String,
    /// 1-based line number of the placeholder.
    pub placeholder_line: usize,
}

impl MarkdownDocument {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Renders the document back to text.
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Embeds an image: allocates the next free index, places the
    /// placeholder and appends the data block at the end of the document.
    ///
    /// The document is left untouched if allocation fails.
    pub fn insert_image(
        &mut self,
        insertion: &ImageInsertion,
    ) -> Result<InsertOutcome, ImageRefError> {
        let index = next_image_index(&self.render())?;
        log::debug!("Allocated image index {index}");

        let placeholder = placeholder_line(index, &insertion.description);
        let block = data_block_lines(index, &insertion.subtype, &insertion.payload);

        let at = insert_placeholder(&mut self.lines, placeholder, insertion.target_line);
        append_data_block(&mut self.lines, block);

        Ok(InsertOutcome {
            index,
            id: image_id(index),
            placeholder_line: at + 1,
        })
    }

    /// Finds every data line in the document.
    pub fn scan(&self) -> ImageRefScan {
        find_image_refs(&self.lines)
    }

    /// Deletes the data lines of every id in `targets` and returns the ids
    /// that were actually present. Placeholders are left in place.
    pub fn remove_ids(&mut self, targets: &BTreeSet<String>) -> BTreeSet<String> {
        let (kept, removed) = splicer::remove_ids(&self.lines, targets);
        self.lines = kept;
        removed
    }
}

impl FromStr for MarkdownDocument {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
