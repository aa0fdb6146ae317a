//! Zip archive creation for addon source trees.

use crate::packager::error::{Error, ErrorExt, Result};
use crate::packager::settings::Settings;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compresses the addon folder into a zip archive in the release directory.
///
/// Entry paths are relative to the addon root, so the addon folder name is
/// the top-level entry of the archive. Entries are written in sorted order
/// with a fixed modification time, making repeat runs over unchanged inputs
/// byte-identical.
///
/// Fails with [`Error::NotFound`] before the output file is created when the
/// addon folder does not exist, so no partial archive appears in the release
/// directory.
pub async fn archive_addon(settings: &Settings) -> Result<PathBuf> {
    let addon_dir = settings.addon_dir();
    if !addon_dir.is_dir() {
        return Err(Error::NotFound {
            operation: "archiving addon".to_string(),
            path: addon_dir,
        });
    }

    let addon_root = settings.addon_root().to_path_buf();
    let archive_path = settings.archive_path();
    log::info!(
        "Archiving {} -> {}",
        addon_dir.display(),
        archive_path.display()
    );

    // Clone paths for move into blocking closure
    let output = archive_path.clone();

    // Offload blocking traversal and compression to the dedicated thread pool
    tokio::task::spawn_blocking(move || write_zip(&addon_root, &addon_dir, &output))
        .await
        .map_err(|e| Error::GenericError(format!("archive task panicked: {}", e)))??;

    Ok(archive_path)
}

fn write_zip(addon_root: &Path, addon_dir: &Path, output: &Path) -> Result<()> {
    let file = File::create(output).fs_context("creating archive file", output)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    // Collect then sort for deterministic entry ordering
    let mut entries: Vec<_> = walkdir::WalkDir::new(addon_dir)
        .follow_links(false)
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.path().to_path_buf());

    for entry in entries {
        debug_assert!(entry.path().starts_with(addon_root));
        let rel_path = entry.path().strip_prefix(addon_root)?;
        let name = entry_name(rel_path);

        if entry.file_type().is_dir() {
            writer.add_directory(name, options.clone())?;
        } else if entry.file_type().is_file() {
            let mut entry_options = options.clone();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                entry_options =
                    entry_options.unix_permissions(entry.metadata()?.permissions().mode());
            }

            writer.start_file(name, entry_options)?;
            let mut input = File::open(entry.path()).fs_context("opening entry", entry.path())?;
            io::copy(&mut input, &mut writer).map_err(|e| Error::ArchiveError(e.into()))?;
        }
        // Symlinks are not followed and get no entry of their own.
    }

    writer.finish()?;
    Ok(())
}

/// Zip entry separators are `/` on every platform.
fn entry_name(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
