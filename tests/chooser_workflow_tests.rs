mod common;

use common::*;
use dumpchooser::chooser::{DeleteError, DirectoryError, DirectoryView, SelectionError};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_entries_are_sorted_permutation_of_disk() {
    init_logging();
    let temp_dir = create_dump_dir(&["zeta.mfd", "alpha.dump", "Beta.mfd", "10.mfd", "9.mfd"]);

    let view = DirectoryView::open(temp_dir.path()).unwrap();

    assert_eq!(view.entries(), files_on_disk(temp_dir.path()).as_slice());
    assert_eq!(
        view.entries(),
        &["10.mfd", "9.mfd", "Beta.mfd", "alpha.dump", "zeta.mfd"]
    );
}

#[test]
fn test_refresh_is_idempotent() {
    let temp_dir = create_dump_dir(&["b.mfd", "a.mfd", "c.mfd"]);
    let mut view = DirectoryView::open(temp_dir.path()).unwrap();
    let first = view.entries().to_vec();

    view.refresh().unwrap();
    assert_eq!(view.entries(), first.as_slice());
    view.refresh().unwrap();
    assert_eq!(view.entries(), first.as_slice());
}

#[test]
fn test_open_error_kinds() {
    let temp_dir = create_dump_dir(&["card.mfd"]);

    assert!(matches!(
        DirectoryView::open(temp_dir.path().join("nope")),
        Err(DirectoryError::NotFound(_))
    ));
    assert!(matches!(
        DirectoryView::open(temp_dir.path().join("card.mfd")),
        Err(DirectoryError::NotADirectory(_))
    ));
    assert!(matches!(
        DirectoryView::open(temp_dir.path().join("card.mfd").join("sub")),
        Err(DirectoryError::NotFound(_))
    ));
}

#[test]
fn test_choose_delete_workflow() {
    init_logging();
    let temp_dir = create_dump_dir(&["a.mfd", "b.mfd", "c.mfd"]);
    let mut view = DirectoryView::open(temp_dir.path()).unwrap();

    // Pick the middle file
    view.select(1).unwrap();
    let chosen = view.chosen().unwrap();
    assert_eq!(chosen.filename, "b.mfd");
    assert_eq!(fs::read(&chosen.path).unwrap(), b"b.mfd");

    // Delete it; selection falls back to the first file
    assert_eq!(view.delete_selected().unwrap(), "b.mfd");
    assert_eq!(view.entries(), &["a.mfd", "c.mfd"]);
    assert_eq!(view.selected_index(), Some(0));
    assert_eq!(files_on_disk(temp_dir.path()), vec!["a.mfd", "c.mfd"]);

    // Delete everything
    view.delete_selected().unwrap();
    view.delete_selected().unwrap();
    assert!(view.is_empty());
    assert_eq!(view.selected_index(), None);
    assert_eq!(view.chosen_path(), Err(SelectionError::NoSelection));
}

#[test]
fn test_delete_on_empty_directory_touches_nothing() {
    let temp_dir = create_dump_dir(&[]);
    fs::create_dir(temp_dir.path().join("keep")).unwrap();

    let mut view = DirectoryView::open(temp_dir.path()).unwrap();
    assert!(view.is_empty());
    assert!(matches!(view.delete_selected(), Err(DeleteError::NoSelection)));
    assert!(temp_dir.path().join("keep").is_dir());
}

#[test]
fn test_external_change_needs_refresh() {
    let temp_dir = create_dump_dir(&["a.mfd"]);
    let mut view = DirectoryView::open(temp_dir.path()).unwrap();

    write_dump(temp_dir.path(), "b.mfd", b"new");
    // Snapshot, not a watch
    assert_eq!(view.entries(), &["a.mfd"]);

    view.refresh().unwrap();
    assert_eq!(view.entries(), &["a.mfd", "b.mfd"]);
}

#[test]
fn test_select_out_of_range() {
    let temp_dir = create_dump_dir(&["a.mfd"]);
    let mut view = DirectoryView::open(temp_dir.path()).unwrap();

    assert_eq!(
        view.select(1),
        Err(SelectionError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(view.selected_index(), Some(0));
}
