//! File system utilities for packaging.
//!
//! Provides safe file operations with automatic directory creation and
//! idempotent cleanup semantics.

use crate::packager::error::{Error, ErrorExt, Result};
use std::io;
use std::path::Path;
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        // Try removal, ignore NotFound (idempotent)
        match fs::remove_dir_all(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes every entry under `path`, keeping the directory itself.
///
/// A missing directory is treated as already empty; the children of a
/// directory that does not exist are an empty set.
pub async fn remove_dir_children(path: &Path) -> Result<()> {
    let mut entries = match fs::read_dir(path).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(Error::Fs {
                operation: "listing directory".to_string(),
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("listing directory", path)?
    {
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .fs_context("inspecting entry", &entry_path)?;

        if file_type.is_dir() {
            fs::remove_dir_all(&entry_path)
                .await
                .fs_context("removing directory", &entry_path)?;
        } else {
            fs::remove_file(&entry_path)
                .await
                .fs_context("removing file", &entry_path)?;
        }
    }

    Ok(())
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails with [`Error::NotFound`] if the source path does not exist, and
/// with [`Error::GenericError`] if it is not a regular file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::NotFound {
            operation: "copying file".to_string(),
            path: from.to_path_buf(),
        });
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn touch(path: &PathBuf) {
        std::fs::write(path, b"x").unwrap();
    }

    #[tokio::test]
    async fn remove_dir_children_keeps_the_directory() {
        let td = tempfile::tempdir().unwrap();
        let dir = td.path().join("out");
        std::fs::create_dir(&dir).unwrap();
        touch(&dir.join("stale.txt"));
        std::fs::create_dir(dir.join("nested")).unwrap();
        touch(&dir.join("nested").join("deep.txt"));

        remove_dir_children(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn remove_dir_children_on_missing_dir_is_a_noop() {
        let td = tempfile::tempdir().unwrap();
        let missing = td.path().join("does-not-exist");

        remove_dir_children(&missing).await.unwrap();

        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn copy_file_missing_source_is_not_found() {
        let td = tempfile::tempdir().unwrap();
        let missing = td.path().join("missing.html");
        let dest = td.path().join("out").join("missing.html");

        let err = copy_file(&missing, &dest).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn copy_file_creates_destination_parents() {
        let td = tempfile::tempdir().unwrap();
        let src = td.path().join("Changes.html");
        std::fs::write(&src, b"<html></html>").unwrap();
        let dest = td.path().join("releases").join("Changes.html");

        copy_file(&src, &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"<html></html>");
    }
}
