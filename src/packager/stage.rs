//! Release directory cleaning and changelog staging.

use crate::packager::error::{Context, Error, Result};
use crate::packager::settings::Settings;
use crate::packager::utils;
use std::path::PathBuf;

/// Resets the release directory.
///
/// The directory is created when missing; otherwise every prior entry under
/// it is removed. The directory itself always survives the clean.
pub async fn clean_release_dir(settings: &Settings) -> Result<()> {
    let release_dir = settings.release_dir();
    log::info!("Cleaning release directory {}", release_dir.display());

    utils::fs::create_dir_all(release_dir, false).await?;
    utils::fs::remove_dir_children(release_dir).await
}

/// Copies the changelog into the release directory, preserving its file name.
///
/// A same-named file already present in the release directory is overwritten.
/// Fails with [`Error::NotFound`] when the changelog source does not exist,
/// aborting the run before any archive is produced.
pub async fn stage_changelog(settings: &Settings) -> Result<PathBuf> {
    let changelog = settings.changelog_path();
    if !changelog.exists() {
        return Err(Error::NotFound {
            operation: "staging changelog".to_string(),
            path: changelog.to_path_buf(),
        });
    }

    let file_name = changelog
        .file_name()
        .context("changelog path has no file name")?;
    let dest = settings.release_dir().join(file_name);

    log::info!(
        "Staging changelog {} -> {}",
        changelog.display(),
        dest.display()
    );
    utils::fs::copy_file(changelog, &dest).await?;
    Ok(dest)
}
