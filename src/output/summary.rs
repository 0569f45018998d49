//! Serializable summary of a network.

use crate::error::Result;
use crate::models::{Address, IpClass, Ipv4Value, Network};
use serde::Serialize;

/// Everything the `ipcalc` binary reports about a network.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    /// The network in `<net_id>/<bits>` form.
    pub network: Network,
    /// Address the network was created from.
    pub address: Address,
    pub class: IpClass,
    pub net_id: Address,
    pub net_id_hex: String,
    pub broadcast: Address,
    pub broadcast_hex: String,
    pub mask: String,
    pub mask_hex: String,
    pub mask_bits: u8,
    pub wildcard: String,
    pub first_usable: Address,
    pub last_usable: Address,
    pub is_private: bool,
    pub is_loopback: bool,
    pub max_subnet_count: u64,
    /// Subnets produced by a split, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetRow>>,
}

/// One subnet in a split listing.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubnetRow {
    pub network: Network,
    pub first_usable: Address,
    pub last_usable: Address,
    pub broadcast: Address,
}

impl From<&Network> for SubnetRow {
    fn from(network: &Network) -> Self {
        SubnetRow {
            network: *network,
            first_usable: network.first_usable(),
            last_usable: network.last_usable(),
            broadcast: network.broadcast(),
        }
    }
}

impl NetworkSummary {
    /// Build the summary, splitting into at least `split_count` subnets when given.
    pub fn new(network: &Network, split_count: Option<usize>) -> Result<NetworkSummary> {
        let address = network.address();
        let mask = network.mask();
        let net_id = network.net_id();
        let broadcast = network.broadcast();

        let subnets = match split_count {
            Some(count) => Some(network.split(count)?.iter().map(SubnetRow::from).collect()),
            None => None,
        };

        Ok(NetworkSummary {
            network: *network,
            address,
            class: address.classify(),
            net_id,
            net_id_hex: net_id.to_hex_string(),
            broadcast,
            broadcast_hex: broadcast.to_hex_string(),
            mask: mask.to_string(),
            mask_hex: mask.to_hex_string(),
            mask_bits: mask.bit_count(),
            wildcard: mask.wildcard().to_string(),
            first_usable: network.first_usable(),
            last_usable: network.last_usable(),
            is_private: address.is_private(),
            is_loopback: address.is_loopback(),
            max_subnet_count: network.max_subnet_count(),
            subnets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Ipv4Error;

    #[test]
    fn test_summary_fields() {
        let net = Network::create("191.168.4.6/23").unwrap();
        let summary = NetworkSummary::new(&net, None).unwrap();

        assert_eq!(summary.class, IpClass::B);
        assert_eq!(summary.net_id_hex, "0xBFA80400");
        assert_eq!(summary.broadcast_hex, "0xBFA805FF");
        assert_eq!(summary.mask, "255.255.254.0");
        assert_eq!(summary.wildcard, "0.0.1.255");
        assert_eq!(summary.mask_bits, 23);
        assert_eq!(summary.max_subnet_count, 128);
        assert!(!summary.is_private);
        assert!(summary.subnets.is_none());
    }

    #[test]
    fn test_summary_json() {
        let net = Network::create("10.0.0.1/255.255.255.0").unwrap();
        let summary = NetworkSummary::new(&net, Some(2)).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["network"], "10.0.0.0/24");
        assert_eq!(json["address"], "10.0.0.1");
        assert_eq!(json["class"], "A");
        assert_eq!(json["is_private"], true);
        assert_eq!(json["subnets"][1]["network"], "10.0.0.128/25");
        assert_eq!(json["subnets"][1]["last_usable"], "10.0.0.254");
    }

    #[test]
    fn test_summary_split_error() {
        let net = Network::create("10.0.0.0/29").unwrap();
        assert!(matches!(
            NetworkSummary::new(&net, Some(4)),
            Err(Ipv4Error::SubnetCountExceeded { .. })
        ));
    }
}
