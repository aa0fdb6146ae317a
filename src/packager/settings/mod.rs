//! Configuration structures for packaging operations.
//!
//! This module provides the configuration types for a packaging run:
//! the four input paths, the derived archive location, and a builder
//! pattern for constructing settings.

mod builder;
mod core;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
