//! Builder for constructing Settings.

use super::Settings;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building packager settings with validation.
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
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    release_dir: Option<PathBuf>,
    changelog_path: Option<PathBuf>,
    addon_root: Option<PathBuf>,
    addon_name: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the release output directory.
    ///
    /// This directory is cleaned and repopulated on each run.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn release_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.release_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the changelog source path.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn changelog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.changelog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the addon root directory.
    ///
    /// Archive entry paths are computed relative to this directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn addon_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.addon_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the addon folder name to archive.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn addon_name<S: Into<String>>(mut self, name: S) -> Self {
        self.addon_name = Some(name.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `release_dir`
    /// - `changelog_path`
    /// - `addon_root`
    /// - `addon_name`
    pub fn build(self) -> crate::packager::Result<Settings> {
        use crate::packager::error::Context;

        Ok(Settings::new(
            self.release_dir.context("release_dir is required")?,
            self.changelog_path.context("changelog_path is required")?,
            self.addon_root.context("addon_root is required")?,
            self.addon_name.context("addon_name is required")?,
        ))
    }
}
