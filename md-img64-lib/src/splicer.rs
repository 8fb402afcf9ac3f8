//! Line-level mutations: placing a placeholder, appending the data block and
//! excising data lines.

use crate::locator::parse_data_line;
use std::collections::BTreeSet;

/// Terminates the last line if it lacks a newline, so appended content does
/// not run into it.
pub fn ensure_trailing_newline(lines: &mut [String]) {
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }
}

/// Inserts `placeholder` before the 1-based `target` line, or appends it when
/// no target is given or the target lies past the end of the document.
///
/// A target of `0` is treated as the first line. Returns the 0-based index
/// the placeholder ended up at.
pub fn insert_placeholder(
    lines: &mut Vec<String>,
    placeholder: String,
    target: Option<usize>,
) -> usize {
    ensure_trailing_newline(lines);

    let insert_at = match target {
        Some(line_number) => line_number.saturating_sub(1).min(lines.len()),
        None => lines.len(),
    };

    lines.insert(insert_at, placeholder);
    insert_at
}

/// Appends the data block after every existing line.
pub fn append_data_block(lines: &mut Vec<String>, block: Vec<String>) {
    ensure_trailing_newline(lines);
    lines.extend(block);
}

/// Drops every data line whose id is in `targets`, keeping all other lines
/// untouched and in order. Returns the kept lines and the ids that were
/// actually removed.
///
/// Placeholders referring to a removed id are not data lines and therefore
/// survive.
pub fn remove_ids<S: AsRef<str>>(
    lines: &[S],
    targets: &BTreeSet<String>,
) -> (Vec<String>, BTreeSet<String>) {
    let mut kept = Vec::with_capacity(lines.len());
    let mut removed = BTreeSet::new();

    for line in lines {
        let line = line.as_ref();
        match parse_data_line(line) {
            Some(id) if targets.contains(id) => {
                removed.insert(id.to_string());
            }
            _ => kept.push(line.to_string()),
        }
    }

    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split_inclusive('\n').map(str::to_string).collect()
    }

    fn ids(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn ensure_trailing_newline_only_touches_unterminated_last_line() {
        let mut doc = lines("one\ntwo");
        ensure_trailing_newline(&mut doc);
        assert_eq!(doc.concat(), "one\ntwo\n");

        let mut doc = lines("one\n");
        ensure_trailing_newline(&mut doc);
        assert_eq!(doc.concat(), "one\n");

        let mut doc: Vec<String> = Vec::new();
        ensure_trailing_newline(&mut doc);
        assert!(doc.is_empty());
    }

    #[test]
    fn placeholder_goes_before_the_target_line() {
        let mut doc = lines("a\nb\nc\n");
        let at = insert_placeholder(&mut doc, "P\n".into(), Some(2));
        assert_eq!(at, 1);
        assert_eq!(doc.concat(), "a\nP\nb\nc\n");
    }

    #[test]
    fn placeholder_target_one_and_zero_go_to_the_top() {
        let mut doc = lines("a\nb\n");
        insert_placeholder(&mut doc, "P\n".into(), Some(1));
        assert_eq!(doc.concat(), "P\na\nb\n");

        let mut doc = lines("a\nb\n");
        insert_placeholder(&mut doc, "P\n".into(), Some(0));
        assert_eq!(doc.concat(), "P\na\nb\n");
    }

    #[test]
    fn placeholder_target_past_the_end_appends() {
        let mut doc = lines("a\nb");
        let at = insert_placeholder(&mut doc, "P\n".into(), Some(99));
        assert_eq!(at, 2);
        assert_eq!(doc.concat(), "a\nb\nP\n");
    }

    #[test]
    fn placeholder_without_target_appends() {
        let mut doc = lines("a\nb\n");
        insert_placeholder(&mut doc, "P\n".into(), None);
        assert_eq!(doc.concat(), "a\nb\nP\n");
    }

    #[test]
    fn unterminated_last_line_is_fixed_even_for_mid_document_inserts() {
        let mut doc = lines("a\nb");
        insert_placeholder(&mut doc, "P\n".into(), Some(1));
        assert_eq!(doc.concat(), "P\na\nb\n");
    }

    #[test]
    fn data_block_is_appended_last() {
        let mut doc = lines("a");
        append_data_block(&mut doc, vec!["\n".into(), "[x]:data:image/png;base64,AA==\n".into()]);
        assert_eq!(doc.concat(), "a\n\n[x]:data:image/png;base64,AA==\n");
    }

    #[test]
    fn remove_ids_keeps_placeholders_and_other_ids() {
        let doc = lines(
            "# Title\n\
             ![five][image-5]\n\
             ![six][image-6]\n\
             [image-5]:data:image/png;base64,AAAA\n\
             [image-6]:data:image/png;base64,BBBB\n",
        );

        let (kept, removed) = remove_ids(&doc, &ids(&["image-5"]));

        assert_eq!(removed, ids(&["image-5"]));
        assert_eq!(
            kept.concat(),
            "# Title\n![five][image-5]\n![six][image-6]\n[image-6]:data:image/png;base64,BBBB\n"
        );
    }

    #[test]
    fn remove_ids_drops_every_duplicate_definition() {
        let doc = lines(
            "[dup]:data:image/png;base64,AA==\n\
             text\n\
             [dup]:data:image/gif;base64,BB==\n",
        );

        let (kept, removed) = remove_ids(&doc, &ids(&["dup"]));

        assert_eq!(kept, vec!["text\n".to_string()]);
        assert_eq!(removed, ids(&["dup"]));
    }

    #[test]
    fn remove_ids_reports_only_ids_it_found() {
        let doc = lines("[a]:data:image/png;base64,AA==\n");
        let (kept, removed) = remove_ids(&doc, &ids(&["a", "missing"]));
        assert!(kept.is_empty());
        assert_eq!(removed, ids(&["a"]));
    }
}
