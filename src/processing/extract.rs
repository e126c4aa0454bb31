//! IPv4 literal extraction from log lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Octets are 0-255 with no leading zero. Deliberately unanchored: a
    // literal inside a longer digit run still yields its inner match.
    static ref IPV4_RE: Regex = Regex::new(
        r"(?:(?:25[0-5]|(?:2[0-4]|1[0-9]|[1-9]|)[0-9])\.){3}(?:25[0-5]|(?:2[0-4]|1[0-9]|[1-9]|)[0-9])"
    )
    .expect("Invalid Regex?");
}

/// Find every dotted-quad literal in `line`, left to right.
///
/// Matches never overlap. The iterator borrows `line` and keeps no state
/// between calls.
pub fn extract(line: &str) -> impl Iterator<Item = &str> {
    IPV4_RE.find_iter(line).map(|m| m.as_str())
}
