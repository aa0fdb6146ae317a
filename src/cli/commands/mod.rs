//! Command execution functions for packaging operations.

// Submodules
pub mod package;
