//! The line-by-line scan that ties extraction and classification together.

use super::{classify, extract};
use crate::error::{GreipError, Result};
use crate::models::RangeSet;
use std::io::{BufRead, Write};

/// Counters for one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read from the log.
    pub lines: usize,
    /// Addresses extracted.
    pub addresses: usize,
    /// Addresses written to the output.
    pub emitted: usize,
    /// Tokens dropped because they did not parse as addresses.
    pub skipped: usize,
}

/// Scan `reader` and write each emitted address to `writer`, one per line.
///
/// Output order is discovery order and nothing is deduplicated. A read or
/// write failure stops the scan; output already written stays written.
pub fn scan<R, W>(
    mut reader: R,
    writer: &mut W,
    ranges: &RangeSet,
    invert: bool,
) -> Result<ScanStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ScanStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| GreipError::Read {
                what: "log file",
                source,
            })?;
        if n == 0 {
            break;
        }
        stats.lines += 1;

        // Addresses are ASCII, so invalid UTF-8 elsewhere on the line is harmless.
        let line = String::from_utf8_lossy(&buf);
        for address in extract(&line) {
            stats.addresses += 1;
            match classify(address, ranges, invert) {
                Ok(true) => {
                    writeln!(writer, "{}", address)?;
                    stats.emitted += 1;
                }
                Ok(false) => {}
                Err(e) => {
                    log::warn!("line {}: {}", stats.lines, e);
                    stats.skipped += 1;
                }
            }
        }
    }

    Ok(stats)
}
