//! Main packager orchestration and coordination.
//!
//! This module provides the [`Packager`] orchestrator that runs the
//! packaging steps in order and collects the artifact result.

use crate::packager::error::{ErrorExt, Result};
use crate::packager::settings::Settings;
use crate::packager::{archive, checksum, stage};
use std::path::PathBuf;

/// A packaged release artifact.
#[derive(Debug, Clone)]
pub struct PackagedArtifact {
    /// Path of the produced archive inside the release directory.
    pub path: PathBuf,

    /// Archive size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 checksum of the archive.
    pub checksum: String,
}

/// Release packager orchestrator.
///
/// Runs the packaging pass: clean the release directory, stage the
/// changelog, archive the addon folder, then stat and checksum the result.
///
/// # Examples
///
/// ```no_run
/// use addon_packager::packager::{Packager, Settings};
///
/// # async fn example(settings: Settings) -> addon_packager::packager::Result<()> {
/// let packager = Packager::new(settings);
/// let artifact = packager.package().await?;
/// println!("Created: {}", artifact.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Executes the full packaging pass.
    ///
    /// Steps run strictly in order - clean, stage changelog, archive. The
    /// first failing step aborts the run; later steps are not attempted and
    /// no partial output is rolled back.
    ///
    /// # Returns
    ///
    /// A [`PackagedArtifact`] describing the archive. Success guarantees the
    /// archive exists at [`Settings::archive_path`].
    pub async fn package(&self) -> Result<PackagedArtifact> {
        stage::clean_release_dir(&self.settings).await?;
        stage::stage_changelog(&self.settings).await?;
        let path = archive::archive_addon(&self.settings).await?;

        // Artifact metadata
        let metadata = tokio::fs::metadata(&path)
            .await
            .fs_context("reading artifact metadata", &path)?;
        let checksum = checksum::calculate_sha256(&path).await?;

        log::info!(
            "Packaged {} ({} bytes, sha256 {})",
            path.display(),
            metadata.len(),
            checksum
        );

        Ok(PackagedArtifact {
            path,
            size: metadata.len(),
            checksum,
        })
    }
}
