//! Domain models for greip.
//!
//! - [`CidrRange`] - a network prefix read from the range file
//! - [`RangeSet`] - the ordered table of ranges used for classification

mod ipv4;
mod range_set;

// Re-export public types
pub use ipv4::{parse_addr, CidrRange};
pub use range_set::RangeSet;
