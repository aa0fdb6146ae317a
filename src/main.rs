//! Addon Packager - release packaging for addon repositories.
//!
//! This binary resets a release directory, stages the changelog, and
//! compresses the addon folder into a zip archive with proper error
//! handling and artifact verification.

mod cli;
mod error;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
