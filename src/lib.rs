//! Wordforge - targeted password wordlist generation
//!
//! A CLI tool for expanding a small set of seed tokens (names, dates,
//! keywords) into a deduplicated candidate wordlist through case
//! transformation, symbol/number injection, and positional combination.
//! Intended for authorized credential-audit work only.

pub mod engine;
pub mod error;
pub mod output;
pub mod seeds;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordforgeError};
pub use types::{
    CaseProfile, CombinerProfile, GenerationReport, LengthWindow, MutationConfig, NumberProfile,
    SortOrder,
};

// Re-export main functionality
pub use engine::MutationEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
