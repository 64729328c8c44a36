// kiwispell - rewrites American and British English spelling as New Zealand English

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod casing;
mod cli;
pub mod config;
mod converter;
pub mod lexicon;
pub mod mapping;
mod normalize;
pub mod server;
pub mod service;
mod suffix;
mod util;
mod walker;

// Re-export log macros for use throughout the crate
pub use tracing::{debug, error, info, trace, warn};

pub use casing::{match_case, match_phrase_case};
pub use config::Config;
pub use converter::Converter;
pub use normalize::{normalize, protect, Protected};
pub use service::{ConversionService, ConvertError, InitError, InitStatus};
pub use suffix::apply_ise_conversions;
pub use walker::walk;

/// Application entry point - parses the command line and runs it.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> std::process::ExitCode {
    cli::run()
}
