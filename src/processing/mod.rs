//! Log processing pipeline.
//!
//! - [`extract`] - IPv4 literal extraction from a line
//! - [`classify`] - range membership and the invert policy
//! - [`scan`] - the line-by-line driver

mod classify;
mod extract;
mod scan;

// Re-export public functions
pub use classify::{classify, decide, is_match};
pub use extract::extract;
pub use scan::{scan, ScanStats};
