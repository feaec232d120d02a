// tests/integration_tests/error_handling_test.rs
use super::common::{create_test_bytes, create_test_file};
use anyhow::Result;
use tempfile::TempDir;
use wordstat::{ScanError, SkipReason, aggregate_directory};

#[test]
fn test_missing_root_fails_the_scan() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nowhere");

    match aggregate_directory(&missing, true) {
        Err(ScanError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_file_as_root_fails_the_scan() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "plain.txt", "words")?;

    let err = aggregate_directory(&temp_dir.path().join("plain.txt"), false)
        .expect_err("a file is not a directory");
    assert!(matches!(err, ScanError::NotADirectory { .. }));
    assert!(err.to_string().contains("plain.txt"));
    Ok(())
}

#[test]
fn test_undecodable_file_does_not_abort_the_scan() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "1.txt", "first file")?;
    create_test_bytes(temp_dir.path(), "2.txt", b"\xc3\x28 broken")?;
    create_test_file(temp_dir.path(), "3.txt", "third and longest")?;

    let result = aggregate_directory(temp_dir.path(), true)?;

    assert_eq!(result.files_analyzed(), 2);
    assert!(result.get("2.txt").is_none());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].reason, SkipReason::InvalidUtf8);
    assert_eq!(result.overall_longest_word, "longest");
    assert_eq!(result.overall_shortest_word, "and");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "ok.txt", "still counted")?;
    std::os::unix::fs::symlink(
        temp_dir.path().join("gone.txt"),
        temp_dir.path().join("dangling.txt"),
    )?;

    let result = aggregate_directory(temp_dir.path(), true)?;

    assert_eq!(result.files_analyzed(), 1);
    assert!(result.get("ok.txt").is_some());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].reason, SkipReason::Inaccessible);
    Ok(())
}
