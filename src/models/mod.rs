//! IPv4 value types.
//!
//! - [`Address`] - IPv4 host address and its [`IpClass`]
//! - [`Mask`] - Subnet mask with wildcard support
//! - [`Network`] - Address and mask pair

mod address;
mod mask;
mod network;
mod value;

// Re-export public types
pub use address::{Address, IpClass};
pub use mask::{Mask, MAX_MASK_BIT, MIN_MASK_BIT};
pub use network::Network;
pub use value::Ipv4Value;
