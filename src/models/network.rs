//! IPv4 networks: an address paired with a mask.

use super::address::Address;
use super::mask::{Mask, MAX_MASK_BIT};
use super::value::Ipv4Value;
use crate::error::{Ipv4Error, Result};
use crate::processing::split;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// IPv4 network, a representative [`Address`] plus a [`Mask`].
///
/// The stored address does not have to be the network ID; comparisons use
/// the derived network ID and the mask length.
#[derive(Debug, Copy, Clone)]
pub struct Network {
    address: Address,
    mask: Mask,
}

impl Network {
    pub fn new(address: Address, mask: Mask) -> Network {
        Network { address, mask }
    }

    /// Create a network from `"A.B.C.D/n"` or `"A.B.C.D/M.M.M.M"`.
    ///
    /// The part after the first `/` is tried as a prefix length first and,
    /// if it is not an integer, as a dotted-decimal mask.
    ///
    /// # Examples
    /// ```
    /// use ipv4_calculator::Network;
    /// let net = Network::create("191.168.4.6/23").unwrap();
    /// assert_eq!(net.to_string(), "191.168.4.0/23");
    /// let net = Network::create("10.0.0.1/255.255.255.0").unwrap();
    /// assert_eq!(net.to_string(), "10.0.0.0/24");
    /// ```
    pub fn create(text: &str) -> Result<Network> {
        let (address_text, mask_text) = text
            .split_once('/')
            .ok_or_else(|| Ipv4Error::InvalidNetworkFormat(text.to_string()))?;

        let address = Address::parse(address_text)?;
        let mask = match mask_text.trim().parse::<i64>() {
            Ok(bits) => {
                let bits = u8::try_from(bits).map_err(|_| Ipv4Error::MaskBitOutOfRange(bits))?;
                Mask::from_bit_count(bits)?
            }
            Err(_) => Mask::parse(mask_text)?,
        };

        log::trace!("created network {address}/{} from {text:?}", mask.bit_count());
        Ok(Network { address, mask })
    }

    /// The representative address the network was built from.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Address with all host bits cleared.
    pub fn net_id(&self) -> Address {
        Address::from(self.address.value() & self.mask.prefix_value())
    }

    /// Address with all host bits set.
    pub fn broadcast(&self) -> Address {
        Address::from(self.address.value() | self.mask.wildcard().value())
    }

    /// Network ID plus one. Not range checked.
    pub fn first_usable(&self) -> Address {
        Address::from(self.net_id().value().wrapping_add(1))
    }

    /// Broadcast minus one. Not range checked.
    pub fn last_usable(&self) -> Address {
        Address::from(self.broadcast().value().wrapping_sub(1))
    }

    pub fn usable_range(&self) -> (Address, Address) {
        (self.first_usable(), self.last_usable())
    }

    /// True if `address` lies between the network ID and the broadcast, inclusive.
    pub fn contains(&self, address: &Address) -> bool {
        let value = address.value();
        self.net_id().value() <= value && value <= self.broadcast().value()
    }

    /// True if `self.net_id & inner.net_id == self.net_id`.
    ///
    /// Only network IDs are compared, the mask of `inner` is not consulted.
    pub fn includes(&self, inner: &Network) -> bool {
        let out_net = self.net_id().value();
        out_net & inner.net_id().value() == out_net
    }

    /// Same test as [`Network::includes`] with `outer` as the including network.
    pub fn is_subnet_of(&self, outer: &Network) -> bool {
        outer.includes(self)
    }

    /// Number of subnets available when splitting down to /30.
    ///
    /// Zero when the mask is already longer than /30.
    pub fn max_subnet_count(&self) -> u64 {
        MAX_MASK_BIT
            .checked_sub(self.mask.bit_count())
            .map_or(0, |free_bits| 1u64 << free_bits)
    }

    /// Split into the smallest power-of-two number of equal subnets that is
    /// at least `count`.
    ///
    /// The result may hold more networks than requested.
    pub fn split(&self, count: usize) -> Result<Vec<Network>> {
        split::split_network(self, count)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.net_id(), self.mask.bit_count())
    }
}

impl FromStr for Network {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self> {
        Network::create(s)
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Network) -> bool {
        self.net_id() == other.net_id() && self.mask.bit_count() == other.mask.bit_count()
    }
}

impl Eq for Network {}

impl Hash for Network {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.net_id().hash(state);
        self.mask.bit_count().hash(state);
    }
}

impl PartialOrd for Network {
    fn partial_cmp(&self, other: &Network) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Network {
    fn cmp(&self, other: &Network) -> Ordering {
        self.net_id()
            .cmp(&other.net_id())
            .then_with(|| self.mask.bit_count().cmp(&other.mask.bit_count()))
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::create(&s).map_err(de::Error::custom)
    }
}
