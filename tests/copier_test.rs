use std::fs;

use folio::copier::{copy_tree, ensure_dir, CopyOutcome};
use tempfile::TempDir;

#[test]
fn test_copy_directory_recursively() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("public/images");
    fs::create_dir_all(source.join("gallery/2023")).unwrap();
    fs::write(source.join("logo.svg"), "<svg/>").unwrap();
    fs::write(source.join("gallery/2023/harbour.jpg"), b"\xff\xd8\xff").unwrap();
    fs::create_dir_all(source.join("empty")).unwrap();

    let dest = temp_dir.path().join("dist/images");
    let outcome = copy_tree(&source, &dest).unwrap();

    assert_eq!(outcome, CopyOutcome::Directory { files: 2 });
    assert_eq!(fs::read_to_string(dest.join("logo.svg")).unwrap(), "<svg/>");
    assert_eq!(fs::read(dest.join("gallery/2023/harbour.jpg")).unwrap(), b"\xff\xd8\xff");
    assert!(dest.join("empty").is_dir());
}

#[test]
fn test_copy_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("404.html");
    fs::write(&source, "new").unwrap();
    let dest = temp_dir.path().join("dist/404.html");
    fs::create_dir_all(dest.parent().unwrap()).unwrap();
    fs::write(&dest, "old").unwrap();

    assert_eq!(copy_tree(&source, &dest).unwrap(), CopyOutcome::File);
    assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
}

#[test]
fn test_missing_source_leaves_destination_absent() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("dist/.nojekyll");

    let outcome = copy_tree(temp_dir.path().join(".nojekyll"), &dest).unwrap();
    assert_eq!(outcome, CopyOutcome::Missing);
    assert!(!dest.exists());
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("a/b/c");

    ensure_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}
