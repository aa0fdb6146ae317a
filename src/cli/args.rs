//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling.

use clap::Parser;
use std::path::PathBuf;

/// Release packager for addon repositories
#[derive(Parser, Debug)]
#[command(
    name = "addon_packager",
    version,
    about = "Release packager for addon repositories",
    long_about = "Resets the release directory, stages the changelog, and zips the addon folder.

All paths default to the layout of an addon repository checkout; every flag
can also be supplied through its environment variable.

Usage:
  addon_packager
  addon_packager --release-dir ./releases/repository --changelog ./releases/Changes.html
  addon_packager --addon-root ./Addons --addon-name TCPServer_For_Softimage.xsiaddon

Exit code 0 = archive guaranteed to exist in the release directory."
)]
pub struct Args {
    /// Release output directory, cleaned then repopulated
    #[arg(
        short = 'r',
        long,
        value_name = "DIR",
        default_value = "./releases/repository",
        env = "ADDON_PACKAGER_RELEASE_DIR"
    )]
    pub release_dir: PathBuf,

    /// Changelog file copied into the release directory
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        default_value = "./releases/Changes.html",
        env = "ADDON_PACKAGER_CHANGELOG"
    )]
    pub changelog: PathBuf,

    /// Directory containing addon folders
    #[arg(
        short = 'a',
        long,
        value_name = "DIR",
        default_value = "./Addons",
        env = "ADDON_PACKAGER_ADDON_ROOT"
    )]
    pub addon_root: PathBuf,

    /// Addon folder under the addon root to archive
    #[arg(
        short = 'n',
        long,
        value_name = "NAME",
        default_value = "TCPServer_For_Softimage.xsiaddon",
        env = "ADDON_PACKAGER_ADDON_NAME"
    )]
    pub addon_name: String,

    /// Print verbose progress output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.addon_name.is_empty() {
            return Err("Addon name cannot be empty".to_string());
        }

        // The addon name is a single folder name under the addon root
        if self.addon_name.contains('/') || self.addon_name.contains('\\') {
            return Err(format!(
                "Addon name must be a bare folder name, got a path: {}",
                self.addon_name
            ));
        }
        if self.addon_name == "." || self.addon_name == ".." {
            return Err(format!("Invalid addon name: {}", self.addon_name));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
