//! Reserved reference networks used to classify addresses.

use crate::models::{Address, Network};
use lazy_static::lazy_static;

fn reserved_network(cidr: &str) -> Network {
    log::trace!("init reserved network {cidr}");
    Network::create(cidr).expect("Invalid reserved network literal")
}

lazy_static! {
    /// Class A private range 10.0.0.0/8.
    pub static ref PRIVATE_A: Network = reserved_network("10.0.0.0/8");
    /// Class B private range 172.16.0.0/12.
    pub static ref PRIVATE_B: Network = reserved_network("172.16.0.0/12");
    /// Class C private range 192.168.0.0/16.
    pub static ref PRIVATE_C: Network = reserved_network("192.168.0.0/16");
    /// Loopback range 127.0.0.0/8.
    pub static ref LOOPBACK: Network = reserved_network("127.0.0.0/8");
}

/// True if `address` is in one of the three private ranges.
pub fn is_private(address: &Address) -> bool {
    [&*PRIVATE_A, &*PRIVATE_B, &*PRIVATE_C]
        .iter()
        .any(|net| net.contains(address))
}

pub fn is_loopback(address: &Address) -> bool {
    LOOPBACK.contains(address)
}
