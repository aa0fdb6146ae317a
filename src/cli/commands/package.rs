//! Package command execution.
//!
//! Drives the packaging pipeline and reports the produced artifact.

use crate::bail;
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::packager::{Packager, SettingsBuilder};
use path_absolutize::Absolutize;
use std::path::Path;

/// Runs the packaging pipeline for the given arguments.
///
/// Exit code 0 guarantees the archive exists in the release directory.
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let settings = SettingsBuilder::new()
        .release_dir(&args.release_dir)
        .changelog_path(&args.changelog)
        .addon_root(&args.addon_root)
        .addon_name(&args.addon_name)
        .build()?;

    let _ = config.section("Packaging addon release");
    let _ = config.verbose_println(&format!(
        "Release directory: {}",
        display_path(settings.release_dir())
    ));
    let _ = config.verbose_println(&format!(
        "Changelog: {}",
        display_path(settings.changelog_path())
    ));
    let _ = config.verbose_println(&format!("Addon: {}", display_path(&settings.addon_dir())));

    let _ = config.progress(&format!(
        "Cleaning {}, staging changelog, archiving {}",
        settings.release_dir().display(),
        settings.addon_name()
    ));

    let packager = Packager::new(settings);
    let artifact = packager.package().await?;

    // Success must leave the artifact on disk.
    if !artifact.path.is_file() {
        bail!(
            "archive missing after packaging: {}",
            artifact.path.display()
        );
    }

    let _ = config.success(&format!(
        "Created {} ({} bytes)",
        artifact.path.display(),
        artifact.size
    ));
    let _ = config.indent(&format!("SHA256: {}", artifact.checksum));

    Ok(0)
}

/// Absolute form of a path for display, falling back to the raw path.
fn display_path(path: &Path) -> String {
    path.absolutize()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
