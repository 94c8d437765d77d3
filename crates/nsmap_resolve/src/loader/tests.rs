use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn fs_loader_keeps_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("User.php");
    fs::write(&path, "class User {}").unwrap();

    let mut loader = FsLoader::new();
    assert!(loader.exists(&path));
    loader.load(&path).unwrap();

    assert_eq!(loader.source(&path), Some(b"class User {}".as_slice()));
    assert_eq!(loader.len(), 1);
    assert_eq!(loader.paths(), vec![path.as_path()]);
}

#[test]
fn directories_do_not_exist_as_sources() {
    let temp_dir = TempDir::new().unwrap();
    let loader = FsLoader::new();

    assert!(!loader.exists(temp_dir.path()));
    assert!(!loader.exists(&temp_dir.path().join("missing.php")));
}

#[test]
fn missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.php");

    let mut loader = FsLoader::new();
    let err = loader.load(&path).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.php"));
    assert!(loader.is_empty());
}

#[test]
fn non_utf8_source_loads_as_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cafe.php");
    let content = b"<?php // caf\xe9\n";
    fs::write(&path, content).unwrap();

    let mut loader = FsLoader::new();
    assert!(loader.exists(&path));
    loader.load(&path).unwrap();
    assert_eq!(loader.source(&path), Some(content.as_slice()));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_not_a_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Gone.php");
    std::os::unix::fs::symlink(temp_dir.path().join("nowhere.php"), &path).unwrap();

    let mut loader = FsLoader::new();
    assert!(!loader.exists(&path));
    assert!(matches!(loader.load(&path), Err(LoadError::Io { .. })));
}

#[test]
fn rejected_error_names_path_and_reason() {
    let err = LoadError::Rejected {
        path: PathBuf::from("/src/User.php"),
        reason: "blocked".to_string(),
    };
    assert_eq!(err.to_string(), "loader rejected `/src/User.php`: blocked");
}
