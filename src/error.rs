//! Error types for address, mask and network operations.

use thiserror::Error;

/// Errors returned by parsing and subnet calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ipv4Error {
    #[error("invalid IPv4 address format: {0:?}")]
    InvalidAddressFormat(String),

    #[error("invalid IPv4 mask format: {0:?}")]
    InvalidMaskFormat(String),

    #[error("mask bit {0} out of range [1, 30]")]
    MaskBitOutOfRange(i64),

    #[error("exceed max subnets count: {requested} subnets would need a prefix beyond /{max_prefix}")]
    SubnetCountExceeded { requested: usize, max_prefix: u8 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid network format, expected <address>/<mask>: {0:?}")]
    InvalidNetworkFormat(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Ipv4Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Ipv4Error::MaskBitOutOfRange(31).to_string(),
            "mask bit 31 out of range [1, 30]"
        );
        assert_eq!(
            Ipv4Error::InvalidAddressFormat("1.2.3".to_string()).to_string(),
            "invalid IPv4 address format: \"1.2.3\""
        );
        let err = Ipv4Error::SubnetCountExceeded {
            requested: 129,
            max_prefix: 30,
        };
        assert!(err.to_string().contains("129"));
    }
}
