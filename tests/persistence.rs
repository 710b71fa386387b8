//! Integration tests for `save`.

#![allow(clippy::unwrap_used)]

use std::fs;

use tagtree::{attrs, save, serialize, Tree};

#[test]
fn test_save_writes_serialized_output() {
    let mut tree = Tree::new("svg", attrs![width: "10px", height: "10px"]);
    tree.append_element(tree.root(), "circle", attrs![cx: 5, cy: 5, r: 4]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");
    save(&tree, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), serialize(&tree));
}

#[test]
fn test_save_truncates_existing_file() {
    let tree = Tree::new("g", attrs![]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");
    fs::write(&path, "a much longer pre-existing payload").unwrap();
    save(&tree, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "<g />\n");
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let tree = Tree::new("g", attrs![]);

    let dir = tempfile::tempdir().unwrap();
    // The parent directory does not exist, so the open itself fails and no
    // file is created.
    let path = dir.path().join("missing").join("out.svg");
    let err = save(&tree, &path).unwrap_err();

    assert_eq!(err.path, path);
    assert!(err.to_string().contains("out.svg"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(!path.exists());
}
