//! Turns user input into the set of ids to delete.

use crate::locator::ImageRefScan;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static ID_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,;]+").expect("id separator pattern is valid"));

/// Splits a delimited id list on any run of whitespace, commas or semicolons.
///
/// ```
/// use md_img64_lib::selection::parse_id_list;
///
/// let ids = parse_id_list("image-1, image-3;;image-2  image-1");
/// assert_eq!(ids.into_iter().collect::<Vec<_>>(), ["image-1", "image-2", "image-3"]);
/// ```
pub fn parse_id_list(raw: &str) -> BTreeSet<String> {
    ID_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Requested ids split by whether the document defines them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSelection {
    /// Ids with at least one data line; these will be deleted.
    pub valid: BTreeSet<String>,
    /// Ids with no data line in the document.
    pub unknown: BTreeSet<String>,
}

impl TargetSelection {
    /// Partitions `requested` against the ids present in `scan`.
    pub fn resolve(requested: BTreeSet<String>, scan: &ImageRefScan) -> Self {
        let (valid, unknown) = requested.into_iter().partition(|id| scan.contains(id));
        Self { valid, unknown }
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::find_image_refs;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("  ,; \t", &[])]
    #[case("image-1", &["image-1"])]
    #[case("image-2,image-1", &["image-1", "image-2"])]
    #[case("a; b\tc\nd", &["a", "b", "c", "d"])]
    #[case("x,x , x", &["x"])]
    fn splits_on_whitespace_commas_and_semicolons(#[case] raw: &str, #[case] expected: &[&str]) {
        let ids: Vec<String> = parse_id_list(raw).into_iter().collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn resolve_separates_unknown_ids() {
        let scan = find_image_refs(&[
            "[image-5]:data:image/png;base64,AA==\n",
            "[image-6]:data:image/png;base64,AA==\n",
        ]);

        let selection = TargetSelection::resolve(parse_id_list("image-5 image-9"), &scan);

        assert_eq!(selection.valid.into_iter().collect::<Vec<_>>(), ["image-5"]);
        assert_eq!(selection.unknown.into_iter().collect::<Vec<_>>(), ["image-9"]);
    }

    #[test]
    fn resolve_with_only_unknown_ids_is_empty() {
        let scan = find_image_refs(&["[image-5]:data:image/png;base64,AA==\n"]);
        let selection = TargetSelection::resolve(parse_id_list("image-7"), &scan);
        assert!(selection.is_empty());
    }
}
