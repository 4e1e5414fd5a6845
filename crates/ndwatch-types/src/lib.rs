//! Common value types for IPv6 Neighbor Discovery monitoring.
//!
//! This crate provides type-safe representations of the network primitives
//! shared by the ndwatch identity-tracking core:
//!
//! - [`MacAddress`]: 48-bit link-layer hardware addresses

mod mac;

pub use mac::MacAddress;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),
}
