//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`CidrRange`] for representing a network prefix read from the
//! range file, along with the mask arithmetic used for containment tests.

use crate::error::GreipError;
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Parse a dotted-quad address, e.g. one found in a log line.
pub fn parse_addr(addr: &str) -> Result<Ipv4Addr, GreipError> {
    Ipv4Addr::from_str(addr).map_err(|_| GreipError::AddressParse(addr.to_string()))
}

/// A network prefix (`a.b.c.d/n`) loaded from the range file.
///
/// Host bits in `addr` are kept as written; containment only compares the
/// top `mask` bits.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct CidrRange {
    /// The base address as written.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl CidrRange {
    /// Create a new [`CidrRange`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<CidrRange, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or("Invalid address/mask")?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {}", addr))?;
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid prefix length {}", mask).into());
        }
        let mask: u8 = mask
            .parse()
            .map_err(|_| format!("Invalid prefix length {}", mask))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(CidrRange { addr, mask })
    }

    /// Test whether `ip` falls inside this range.
    ///
    /// The prefix length is validated again here, so a range built by hand
    /// with a bad mask reports an error instead of matching.
    pub fn contains(&self, ip: Ipv4Addr) -> Result<bool, GreipError> {
        let invalid = |_: Box<dyn Error>| GreipError::InvalidPrefix {
            range: format!("{}/{}", self.addr, self.mask),
            mask: self.mask,
        };
        let network = cut_addr(self.addr, self.mask).map_err(invalid)?;
        let candidate = cut_addr(ip, self.mask).map_err(invalid)?;
        Ok(network == candidate)
    }
}

impl FromStr for CidrRange {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrRange::new(s)
    }
}

impl std::fmt::Display for CidrRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
