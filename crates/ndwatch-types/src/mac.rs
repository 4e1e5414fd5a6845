//! MAC address type with safe parsing and formatting.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 48-bit link-layer (Ethernet) MAC address.
///
/// Equality, hashing and ordering are all defined over the raw six octets,
/// so the derived `Ord` gives the same total order as a byte-wise memory
/// compare. There is no normalization of any kind.
///
/// # Examples
///
/// ```
/// use ndwatch_types::MacAddress;
///
/// let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
/// assert_eq!(mac.to_string(), "00:11:22:33:44:55");
///
/// // Also supports hyphen-separated format
/// let mac2: MacAddress = "00-11-22-33-44-55".parse().unwrap();
/// assert_eq!(mac, mac2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// The broadcast MAC address (ff:ff:ff:ff:ff:ff).
    pub const BROADCAST: MacAddress = MacAddress([0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);

    /// The zero/null MAC address (00:00:00:00:00:00).
    pub const ZERO: MacAddress = MacAddress([0, 0, 0, 0, 0, 0]);

    /// Creates a new MAC address from raw bytes.
    pub const fn new(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }

    /// Returns the raw bytes of the MAC address.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Returns the six octets by value.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parses a colon-hex string without validating it.
    ///
    /// This is the trusted fast path for the capture pipeline: octets are
    /// read from the fixed offsets of the canonical `xx:xx:xx:xx:xx:xx`
    /// layout and anything that is not a hex digit contributes zero bits.
    /// Malformed or truncated input therefore yields meaningless octets,
    /// never a panic. Use [`FromStr`] wherever the input is not already
    /// known to be well-formed.
    pub fn parse_unchecked(s: &str) -> Self {
        const OFFSETS: [usize; 6] = [0, 3, 6, 9, 12, 15];

        let raw = s.as_bytes();
        let mut bytes = [0u8; 6];
        for (octet, off) in bytes.iter_mut().zip(OFFSETS) {
            let hi = raw.get(off).copied().unwrap_or(0);
            let lo = raw.get(off + 1).copied().unwrap_or(0);
            *octet = (hex_nibble(hi) << 4) | hex_nibble(lo);
        }
        MacAddress(bytes)
    }

    /// Returns true if this is a multicast address.
    ///
    /// A multicast address has the least significant bit of the first octet set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Returns true if this is a unicast address.
    pub const fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Returns true if this is a locally administered address.
    ///
    /// Locally administered addresses have the second least significant bit
    /// of the first octet set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Returns true if this is a universally administered address.
    pub const fn is_universal(&self) -> bool {
        !self.is_local()
    }

    /// Returns true if this is the broadcast address.
    pub const fn is_broadcast(&self) -> bool {
        self.0[0] == 0xff && self.0[1] == 0xff && self.0[2] == 0xff
            && self.0[3] == 0xff && self.0[4] == 0xff && self.0[5] == 0xff
    }

    /// Returns true if this is the zero address.
    pub const fn is_zero(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0
            && self.0[3] == 0 && self.0[4] == 0 && self.0[5] == 0
    }
}

/// Hex digit value; non-digits map to zero (unchecked-parse contract).
const fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Support both colon and hyphen separators
        let separator = if s.contains(':') { ':' } else { '-' };

        let parts: Vec<&str> = s.split(separator).collect();
        if parts.len() != 6 {
            return Err(ParseError::InvalidMacAddress(s.to_string()));
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 {
                return Err(ParseError::InvalidMacAddress(s.to_string()));
            }
            bytes[i] = u8::from_str_radix(part, 16)
                .map_err(|_| ParseError::InvalidMacAddress(s.to_string()))?;
        }

        Ok(MacAddress(bytes))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> String {
        mac.to_string()
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> [u8; 6] {
        mac.0
    }
}
