//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Central configuration for the packager, constructed via [`SettingsBuilder`].
/// Holds the release output directory, the changelog source, and the addon
/// location, plus the derivation of the archive name.
///
/// # Examples
///
/// ```no_run
/// use addon_packager::packager::SettingsBuilder;
///
/// # fn example() -> addon_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .release_dir("releases/repository")
///     .changelog_path("releases/Changes.html")
///     .addon_root("Addons")
///     .addon_name("TCPServer_For_Softimage.xsiaddon")
///     .build()?;
///
/// assert_eq!(settings.archive_file_name(), "TCPServer_For_Softimage.zip");
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
#[derive(Clone, Debug)]
pub struct Settings {
    /// Release output directory.
    ///
    /// Cleaned then repopulated on each run.
    release_dir: PathBuf,

    /// Changelog file copied verbatim into the release directory.
    changelog_path: PathBuf,

    /// Directory containing addon folders.
    ///
    /// Archive entry paths are relative to this directory.
    addon_root: PathBuf,

    /// Name of the addon folder under `addon_root` to archive.
    addon_name: String,
}

impl Settings {
    /// Returns the release output directory.
    pub fn release_dir(&self) -> &Path {
        &self.release_dir
    }

    /// Returns the changelog source path.
    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }

    /// Returns the addon root directory.
    pub fn addon_root(&self) -> &Path {
        &self.addon_root
    }

    /// Returns the addon folder name.
    pub fn addon_name(&self) -> &str {
        &self.addon_name
    }

    /// Returns the full path of the addon folder to archive.
    pub fn addon_dir(&self) -> PathBuf {
        self.addon_root.join(&self.addon_name)
    }

    /// Returns the archive file name derived from the addon name.
    ///
    /// The addon folder's extension is stripped before appending `.zip`
    /// ("Foo.xsiaddon" becomes "Foo.zip"); a name without an extension is
    /// used as-is.
    pub fn archive_file_name(&self) -> String {
        let stem = Path::new(&self.addon_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.addon_name.clone());
        format!("{stem}.zip")
    }

    /// Returns the full output path of the release archive.
    pub fn archive_path(&self) -> PathBuf {
        self.release_dir.join(self.archive_file_name())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        release_dir: PathBuf,
        changelog_path: PathBuf,
        addon_root: PathBuf,
        addon_name: String,
    ) -> Self {
        Self {
            release_dir,
            changelog_path,
            addon_root,
            addon_name,
        }
    }
}
