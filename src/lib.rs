//! # Loading Screenshot Finder
//!
//! Finds screenshots of the poem board that were captured while the page was
//! still showing its green loading placeholder, so they can be purged before
//! the archive is synced.
//!
//! ## Architecture
//! - `core` - Detection engine (decode, classify, scan, cleanup)
//! - `events` - Event-driven progress reporting
//! - `error` - Error types
//! - `cli` - Command-line interface (binary only)

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{LoadingFinderError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. Log output goes to
/// stderr so JSON reports on stdout stay clean.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
