//! greip: print the IPv4 addresses in a log that fall inside, or with
//! `-invert` outside, a list of CIDR ranges.

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod processing;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

pub use cli::Args;
pub use error::{GreipError, MalformedRange, Result};
pub use models::{CidrRange, RangeSet};
pub use processing::{classify, extract, scan, ScanStats};

/// Open the log named in `args`, or standard input for `-`.
pub fn open_log(args: &Args) -> Result<Box<dyn BufRead>> {
    if args.reads_stdin() {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(&args.log).map_err(|source| GreipError::Open {
        what: "log file",
        path: args.log.clone(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Load the ranges, then scan the log onto stdout.
///
/// The range file is closed before the log is opened, and nothing is read
/// from the log when the range file is bad. Stdout is line buffered, so each
/// address is written as soon as it is found.
pub fn run(args: &Args) -> Result<ScanStats> {
    let ranges = RangeSet::from_path(&args.cidr)?;
    log::info!("{} range(s) loaded from {}", ranges.len(), args.cidr);

    let reader = open_log(args)?;
    let mut out = io::stdout().lock();
    let stats = scan(reader, &mut out, &ranges, args.invert)?;
    out.flush()?;

    log::info!(
        "lines={} addresses={} emitted={} skipped={}",
        stats.lines,
        stats.addresses,
        stats.emitted,
        stats.skipped
    );
    Ok(stats)
}
