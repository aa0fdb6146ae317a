//! Release packaging orchestration and coordination.
//!
//! # Overview
//!
//! The packager:
//! 1. Reads configuration from [`Settings`]
//! 2. Cleans the release directory
//! 3. Stages the changelog into it
//! 4. Archives the addon folder into a zip
//! 5. Calculates checksum and metadata, returning a [`PackagedArtifact`]
//!
//! Steps run strictly in order; the first failure aborts the run and later
//! steps are not attempted.
//!
//! # Example
//!
//! ```no_run
//! use addon_packager::packager::{Packager, SettingsBuilder};
//!
//! # async fn example() -> addon_packager::packager::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .release_dir("releases/repository")
//!     .changelog_path("releases/Changes.html")
//!     .addon_root("Addons")
//!     .addon_name("TCPServer_For_Softimage.xsiaddon")
//!     .build()?;
//!
//! let artifact = Packager::new(settings).package().await?;
//! println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `stage` - release directory cleaning and changelog staging
//! - `archive` - zip creation for the addon source tree
//! - `checksum` - SHA256 checksum calculation for artifacts
//! - `orchestrator` - the [`Packager`] struct driving the steps

pub mod error;

mod archive;
mod checksum;
mod orchestrator;
mod settings;
mod stage;
mod utils;

pub use error::{Error, Result};
pub use orchestrator::{PackagedArtifact, Packager};
pub use settings::{Settings, SettingsBuilder};
