//! The table of CIDR ranges addresses are classified against.

use super::CidrRange;
use crate::error::{GreipError, MalformedRange, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ranges in the order they were read. Built once before the log scan and
/// read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<CidrRange>,
}

impl RangeSet {
    /// Parse one CIDR per line. Blank lines are skipped.
    ///
    /// Every malformed line is collected and returned together in
    /// [`GreipError::RangeParse`], so one run reports the whole problem.
    pub fn load<I, S>(lines: I) -> Result<RangeSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranges = Vec::new();
        let mut malformed = Vec::new();

        for (i, line) in lines.into_iter().enumerate() {
            let text = line.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            match CidrRange::new(text) {
                Ok(range) => {
                    log::trace!("range line {}: {}", i + 1, range);
                    ranges.push(range);
                }
                Err(e) => malformed.push(MalformedRange {
                    line: i + 1,
                    text: text.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if !malformed.is_empty() {
            return Err(GreipError::RangeParse(malformed));
        }
        log::debug!("loaded {} CIDR range(s)", ranges.len());
        Ok(RangeSet { ranges })
    }

    /// Read and parse every line of `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<RangeSet> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|source| GreipError::Read {
                what: "CIDR file",
                source,
            })?;
        RangeSet::load(lines)
    }

    /// Open, read and close the range file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RangeSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GreipError::Open {
            what: "CIDR file",
            path: path.display().to_string(),
            source,
        })?;
        RangeSet::from_reader(BufReader::new(file))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CidrRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl From<Vec<CidrRange>> for RangeSet {
    fn from(ranges: Vec<CidrRange>) -> Self {
        RangeSet { ranges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_keeps_order() {
        let set = RangeSet::load(["10.0.0.0/8", "192.168.0.0/16", "10.1.0.0/16"]).unwrap();
        let got: Vec<String> = set.iter().map(|r| r.to_string()).collect();
        assert_eq!(got, vec!["10.0.0.0/8", "192.168.0.0/16", "10.1.0.0/16"]);
    }

    #[test]
    fn test_load_skips_blank_and_trims() {
        let set = RangeSet::load(["", "   ", "\t10.0.0.0/8  ", ""]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_load_keeps_duplicates() {
        let set = RangeSet::load(["10.0.0.0/8", "10.0.0.0/8"]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_load_empty() {
        let set = RangeSet::load(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_reports_all_malformed() {
        let err = RangeSet::load(["10.0.0.0/8", "not-a-cidr", "", "1.2.3.4/99"]).unwrap_err();
        match err {
            GreipError::RangeParse(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].line, 2);
                assert_eq!(entries[0].text, "not-a-cidr");
                assert_eq!(entries[1].line, 4);
                assert_eq!(entries[1].text, "1.2.3.4/99");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_from_reader() {
        let input = Cursor::new("10.0.0.0/8\n\n172.16.0.0/12\r\n");
        let set = RangeSet::from_reader(input).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_path_missing() {
        let err = RangeSet::from_path("/nonexistent/greip/ranges.txt").unwrap_err();
        assert!(matches!(err, GreipError::Open { what: "CIDR file", .. }));
    }
}
