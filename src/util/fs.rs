//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Remove a directory and all its contents, if it exists.
///
/// Returns `true` if there was something to remove.
pub fn remove_dir_all_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(path)
        .with_context(|| format!("failed to remove directory: {}", path.display()))?;
    Ok(true)
}

/// Ensure a directory exists, creating it if necessary.
///
/// Returns `true` if the directory had to be created.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))?;
    Ok(true)
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Every file under `root`, depth-first, ordered by file name.
///
/// Symlinks to files are listed under their own name. Symlinked
/// directories are not descended into.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", root.display()))?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Join the components of a relative path with `/`, whatever the host separator.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_reports_creation() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");

        assert!(ensure_dir(&dir).unwrap());
        assert!(dir.is_dir());
        assert!(!ensure_dir(&dir).unwrap());
    }

    #[test]
    fn test_remove_dir_all_if_exists() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("builds");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("file.txt"), "x").unwrap();

        assert!(remove_dir_all_if_exists(&dir).unwrap());
        assert!(!dir.exists());

        // Absence is fine
        assert!(!remove_dir_all_if_exists(&dir).unwrap());
    }

    #[test]
    fn test_walk_files_only_returns_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("lib").join("b.so"), "").unwrap();
        fs::write(root.join("lib").join("a.a"), "").unwrap();
        fs::write(root.join("top.h"), "").unwrap();

        let files: Vec<_> = walk_files(root)
            .unwrap()
            .iter()
            .map(|p| to_slash_path(&relative_path(root, p)))
            .collect();
        assert_eq!(files, ["lib/a.a", "lib/b.so", "top.h"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_walk_files_keeps_file_symlinks() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let lib = root.join("lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("libdiscord-rpc.so.3"), "so").unwrap();
        symlink("libdiscord-rpc.so.3", lib.join("libdiscord-rpc.so")).unwrap();
        // dangling links and links to directories are not files
        symlink("missing.so", lib.join("dangling.so")).unwrap();
        symlink(&lib, root.join("lib-alias")).unwrap();

        let files: Vec<_> = walk_files(root)
            .unwrap()
            .iter()
            .map(|p| to_slash_path(&relative_path(root, p)))
            .collect();
        assert_eq!(files, ["lib/libdiscord-rpc.so", "lib/libdiscord-rpc.so.3"]);
    }

    #[test]
    fn test_walk_files_missing_root() {
        let tmp = TempDir::new().unwrap();
        assert!(walk_files(&tmp.path().join("nope")).is_err());
    }

    #[test]
    fn test_to_slash_path() {
        let path = Path::new("osx-dynamic").join("lib").join("libdiscord-rpc.dylib");
        assert_eq!(to_slash_path(&path), "osx-dynamic/lib/libdiscord-rpc.dylib");
    }
}
