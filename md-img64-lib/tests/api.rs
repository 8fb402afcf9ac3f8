use insta::assert_snapshot;
use md_img64_lib::locator::next_image_index;
use md_img64_lib::selection::{parse_id_list, TargetSelection};
use md_img64_lib::{ImageInsertion, MarkdownDocument};
use std::str::FromStr;

fn insertion(description: &str, target_line: Option<usize>) -> ImageInsertion {
    ImageInsertion {
        description: description.to_string(),
        subtype: "png".to_string(),
        payload: "iVBORw0KGgo=".to_string(),
        target_line,
    }
}

#[test]
fn inserted_image_is_the_only_new_scan_hit() {
    let mut doc = MarkdownDocument::from_str(
        "# Notes\n\n![old][image-4]\n\n[image-4]:data:image/gif;base64,R0lGOD==\n",
    )
    .unwrap();
    let before = doc.scan();

    let outcome = doc.insert_image(&insertion("New", Some(2))).unwrap();
    let after = doc.scan();

    let new_ids: Vec<&str> = after.ids().filter(|id| !before.contains(id)).collect();
    assert_eq!(new_ids, [outcome.id.as_str()]);
    assert_eq!(outcome.id, "image-5");
}

#[test]
fn insert_before_target_line() {
    let content = "# Title\n\nFirst paragraph.\n\nSecond paragraph.";
    let mut doc = MarkdownDocument::from_str(content).unwrap();

    let outcome = doc.insert_image(&insertion("Diagram", Some(3))).unwrap();

    assert_eq!(outcome.placeholder_line, 3);
    assert_snapshot!(doc.render(), @r###"# Title

![Diagram][image-1]
First paragraph.

Second paragraph.


--------
#

[image-1]:data:image/png;base64,iVBORw0KGgo=
"###);
}

#[test]
fn target_past_the_end_appends_placeholder() {
    let mut doc = MarkdownDocument::from_str("line one\nline two").unwrap();

    let outcome = doc.insert_image(&insertion("Alt text", Some(50))).unwrap();

    assert_eq!(outcome.placeholder_line, 3);
    assert!(doc
        .render()
        .starts_with("line one\nline two\n![Alt text][image-1]\n\n\n--------\n"));
}

#[test]
fn deleting_one_id_leaves_everything_else() {
    let content = "![five][image-5]\n\
                   ![six][image-6]\n\
                   \n\
                   [image-5]:data:image/png;base64,AAAA\n\
                   [image-6]:data:image/png;base64,BBBB\n";
    let mut doc = MarkdownDocument::from_str(content).unwrap();

    let selection = TargetSelection::resolve(parse_id_list("image-5"), &doc.scan());
    let removed = doc.remove_ids(&selection.valid);

    assert_eq!(removed.len(), 1);
    assert_eq!(
        doc.render(),
        "![five][image-5]\n![six][image-6]\n\n[image-6]:data:image/png;base64,BBBB\n"
    );
    // The orphaned placeholder still reserves its index.
    assert_eq!(next_image_index(&doc.render()).unwrap(), 7);
}

#[test]
fn unknown_only_selection_changes_nothing() {
    let content = "[image-5]:data:image/png;base64,AAAA\n";
    let doc = MarkdownDocument::from_str(content).unwrap();

    let selection = TargetSelection::resolve(parse_id_list("image-9"), &doc.scan());

    assert!(selection.is_empty());
    assert_eq!(selection.unknown.into_iter().collect::<Vec<_>>(), ["image-9"]);
    assert_eq!(doc.render(), content);
}
