/*!
 * Tests for file system helpers
 */

use tempfile::tempdir;
use ytchapters::file_utils::FileManager;

#[test]
fn test_fileManager_writeThenRead_shouldRoundTrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chapters.txt");

    FileManager::write_to_file(&path, "00:00 Intro\n03:00 Main Topic").unwrap();
    let content = FileManager::read_to_string(&path).unwrap();

    assert_eq!(content, "00:00 Intro\n03:00 Main Topic");
}

#[test]
fn test_fileManager_writeToFile_shouldCreateParentDirectories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/out/chapters.txt");

    FileManager::write_to_file(&path, "00:00 Intro").unwrap();

    assert!(FileManager::file_exists(&path));
}

#[test]
fn test_fileManager_fileExists_missingFile_shouldReturnFalse() {
    let dir = tempdir().unwrap();

    assert!(!FileManager::file_exists(dir.path().join("absent.txt")));
}

#[test]
fn test_fileManager_readToString_missingFile_shouldFailWithPathContext() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let error = FileManager::read_to_string(&path).unwrap_err();

    assert!(format!("{:#}", error).contains("absent.txt"));
}

#[test]
fn test_fileManager_ensureDir_existingDir_shouldBeIdempotent() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a/b");

    FileManager::ensure_dir(&nested).unwrap();
    FileManager::ensure_dir(&nested).unwrap();

    assert!(nested.is_dir());
}
