//! Lookup of the position export inside the manufacturing directory.

use crate::config::{CSV_EXTENSION, POS_MARKER};
use crate::error::{FixError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Whether a file name looks like a KiCad all-sides position export.
pub fn is_position_export(name: &str) -> bool {
    name.ends_with(CSV_EXTENSION) && name.contains(POS_MARKER)
}

/// Output name for an export: the first `-all-pos` occurrence removed.
pub fn derive_output_name(input_name: &str) -> String {
    input_name.replacen(POS_MARKER, "", 1)
}

/// Find the position export in `dir`.
///
/// Matching regular files are ordered by name and the first one wins. Any
/// others are reported and left untouched.
pub fn find_position_file(dir: &Path) -> Result<PathBuf> {
    let mut candidates: Vec<String> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks; directories and dangling links are not candidates.
        if !entry.path().is_file() {
            continue;
        }
        // Non-UTF-8 names can't carry the marker in a meaningful way.
        if let Some(name) = entry.file_name().to_str() {
            if is_position_export(name) {
                candidates.push(name.to_string());
            }
        }
    }

    candidates.sort();
    let mut candidates = candidates.into_iter();
    let selected = candidates.next().ok_or_else(|| FixError::NoMatchingFile {
        dir: dir.to_path_buf(),
    })?;

    let ignored: Vec<String> = candidates.collect();
    if !ignored.is_empty() {
        warn!(
            "Multiple position files found, using {} and ignoring: {}",
            selected,
            ignored.join(", ")
        );
    }

    Ok(dir.join(selected))
}

/// Delete the converted export.
///
/// Failure is reported as [`FixError::RemoveFailed`]; the written output is
/// left alone either way.
pub fn remove_position_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|source| FixError::RemoveFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Removed {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_position_export() {
        assert!(is_position_export("Board-all-pos.csv"));
        assert!(is_position_export("Board-all-pos-front.csv"));
        assert!(!is_position_export("Board-all-pos.pos"));
        assert!(!is_position_export("Board-top-pos.csv"));
        assert!(!is_position_export("Board-all-pos.CSV"));
    }

    #[test]
    fn test_derive_output_name() {
        assert_eq!(derive_output_name("Board-all-pos-front.csv"), "Board-front.csv");
        assert_eq!(derive_output_name("Board-all-pos.csv"), "Board.csv");
        assert_eq!(
            derive_output_name("a-all-pos-all-pos.csv"),
            "a-all-pos.csv"
        );
    }

    #[test]
    fn test_find_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Board-bom.csv"), "x").unwrap();
        let result = find_position_file(dir.path());
        assert!(matches!(result, Err(FixError::NoMatchingFile { .. })));
    }

    #[test]
    fn test_find_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("old-all-pos.csv")).unwrap();
        let result = find_position_file(dir.path());
        assert!(matches!(result, Err(FixError::NoMatchingFile { .. })));
    }

    #[test]
    fn test_find_picks_first_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b-all-pos.csv"), "x").unwrap();
        std::fs::write(dir.path().join("a-all-pos.csv"), "x").unwrap();
        std::fs::write(dir.path().join("a-bom.csv"), "x").unwrap();
        let found = find_position_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("a-all-pos.csv"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_follows_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("export.txt");
        std::fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("B-all-pos.csv")).unwrap();
        let found = find_position_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("B-all-pos.csv"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_skips_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.csv"), dir.path().join("B-all-pos.csv"))
            .unwrap();
        let result = find_position_file(dir.path());
        assert!(matches!(result, Err(FixError::NoMatchingFile { .. })));
    }

    #[test]
    fn test_remove_position_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("B-all-pos.csv");
        std::fs::write(&path, "x").unwrap();
        remove_position_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_failure_is_reported_separately() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("B.csv");
        std::fs::write(&output, "Designator,Mid X,Mid Y,Layer,Rotation\r\n").unwrap();
        let path = dir.path().join("B-all-pos.csv");

        let err = remove_position_file(&path).unwrap_err();

        assert!(matches!(err, FixError::RemoveFailed { .. }));
        assert_eq!(err.code(), crate::error::ErrorCode::Io);
        assert!(err.user_message().starts_with("Error processing file: Failed to remove"));
        assert!(output.exists());
    }

    #[test]
    fn test_find_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_position_file(&dir.path().join("Manufacturing"));
        assert!(matches!(result, Err(FixError::Io(_))));
    }
}
