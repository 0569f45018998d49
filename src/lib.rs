//! IPv4 address, mask and network calculations.
//!
//! Parse dotted-decimal and CIDR notation, classify addresses, derive network
//! and broadcast addresses, test containment and split networks into subnets.
//!
//! # Modules
//! - [`models`] - Address, mask and network types
//! - [`processing`] - Subnet splitting and reserved ranges
//! - [`output`] - Summary and terminal formatting used by `ipcalc`
//! - [`error`] - Error type

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Ipv4Error, Result};
pub use models::{Address, IpClass, Ipv4Value, Mask, Network, MAX_MASK_BIT, MIN_MASK_BIT};
pub use processing::{LOOPBACK, PRIVATE_A, PRIVATE_B, PRIVATE_C};
