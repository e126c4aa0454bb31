//! Range membership and the emit/suppress decision.

use crate::error::Result;
use crate::models::{parse_addr, RangeSet};
use colored::Colorize;
use std::net::Ipv4Addr;

/// True when any range contains `ip`, stopping at the first that does.
///
/// A range that fails its containment check is reported and treated as a
/// non-match; the remaining ranges are still tested.
pub fn is_match(ip: Ipv4Addr, ranges: &RangeSet) -> bool {
    ranges
        .iter()
        .filter_map(|range| match range.contains(ip) {
            Ok(hit) => Some(hit),
            Err(e) => {
                log::warn!("{skipped} {e}", skipped = "skipped".on_red());
                None
            }
        })
        .any(|hit| hit)
}

/// Combine a match result with the invert flag.
pub fn decide(matched: bool, invert: bool) -> bool {
    matched != invert
}

/// Decide whether `address` should be written to the output.
///
/// Returns [`GreipError::AddressParse`](crate::GreipError::AddressParse) when
/// `address` is not a dotted quad; callers skip such tokens.
pub fn classify(address: &str, ranges: &RangeSet, invert: bool) -> Result<bool> {
    let ip = parse_addr(address)?;
    let matched = is_match(ip, ranges);
    log::trace!("{address} matched={matched} invert={invert}");
    Ok(decide(matched, invert))
}
