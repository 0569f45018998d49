//! Splitting a network into equal power-of-two subnets.

use crate::error::{Ipv4Error, Result};
use crate::models::{Address, Ipv4Value, Mask, Network, MAX_MASK_BIT};

/// Extra prefix bits needed to get at least `count` subnets.
///
/// `log2(count)` for a power of two, otherwise its ceiling. `None` if the
/// next power of two does not fit in `usize`.
pub fn extra_mask_bits(count: usize) -> Option<u8> {
    count
        .checked_next_power_of_two()
        .map(|subnets| subnets.trailing_zeros() as u8)
}

/// Split `network` into `2^b` subnets where `2^b` is the smallest power of two
/// that is at least `count`.
///
/// # Arguments
/// * `network` - The network to split, only its network ID and mask are used
/// * `count` - Minimum number of subnets wanted
///
/// # Returns
/// * `Ok(Vec<Network>)` - Subnets in ascending address order
/// * `Err` - `InvalidArgument` for a zero count, `SubnetCountExceeded` when the
///   new prefix would pass /30
pub fn split_network(network: &Network, count: usize) -> Result<Vec<Network>> {
    if count == 0 {
        return Err(Ipv4Error::InvalidArgument(
            "split count must be at least 1".to_string(),
        ));
    }
    let exceeded = Ipv4Error::SubnetCountExceeded {
        requested: count,
        max_prefix: MAX_MASK_BIT,
    };

    let count_bits = extra_mask_bits(count).ok_or_else(|| exceeded.clone())?;
    let origin_bits = network.mask().bit_count();
    let max_sub_bits = MAX_MASK_BIT.saturating_sub(origin_bits);
    if max_sub_bits <= count_bits {
        log::debug!(
            "cannot split {network} into {count}: needs {count_bits} more bits, {max_sub_bits} available"
        );
        return Err(exceeded);
    }

    let new_bits = origin_bits + count_bits;
    let mask = Mask::from_bit_count(new_bits)?;
    let step = 1u32 << (32 - u32::from(new_bits));
    let base = network.net_id().value();

    log::debug!(
        "split {network} into {} subnets of /{new_bits} (requested {count})",
        1u32 << count_bits
    );

    let subnets = (0..1u32 << count_bits)
        .map(|i| Network::new(Address::from(base + i * step), mask))
        .collect();

    Ok(subnets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_mask_bits() {
        assert_eq!(extra_mask_bits(1), Some(0));
        assert_eq!(extra_mask_bits(2), Some(1));
        assert_eq!(extra_mask_bits(3), Some(2));
        assert_eq!(extra_mask_bits(6), Some(3));
        assert_eq!(extra_mask_bits(8), Some(3));
        assert_eq!(extra_mask_bits(129), Some(8));
        assert_eq!(extra_mask_bits(usize::MAX), None);
    }

    #[test]
    fn test_split_two() {
        let net = Network::create("191.168.4.6/23").unwrap();
        let subnets = split_network(&net, 2).unwrap();
        assert_eq!(subnets.len(), 2);
        assert_eq!(subnets[0].to_string(), "191.168.4.0/24");
        assert_eq!(subnets[1].to_string(), "191.168.5.0/24");
    }

    #[test]
    fn test_split_rounds_up_to_power_of_two() {
        let net = Network::create("191.168.4.6/23").unwrap();
        let subnets = split_network(&net, 6).unwrap();
        assert_eq!(subnets.len(), 8);
        for (i, subnet) in subnets.iter().enumerate() {
            assert_eq!(subnet.mask().bit_count(), 26);
            assert_eq!(
                subnet.net_id().value(),
                0xBFA80400 + (i as u32) * 64,
                "subnet {i}"
            );
            assert!(subnet.is_subnet_of(&net));
        }
        assert_eq!(subnets[7].broadcast(), net.broadcast());
    }

    #[test]
    fn test_split_one_keeps_network() {
        let net = Network::create("10.1.2.3/16").unwrap();
        let subnets = split_network(&net, 1).unwrap();
        assert_eq!(subnets, vec![net]);
    }

    #[test]
    fn test_split_exceeded() {
        let net = Network::create("191.168.4.6/23").unwrap();
        assert_eq!(
            split_network(&net, 129),
            Err(Ipv4Error::SubnetCountExceeded {
                requested: 129,
                max_prefix: 30
            })
        );
        assert!(split_network(&net, 64).is_ok());
        assert!(split_network(&net, 128).is_err());

        let narrow = Network::create("10.0.0.0/30").unwrap();
        assert!(split_network(&narrow, 1).is_err());
    }

    #[test]
    fn test_split_zero() {
        let net = Network::create("10.0.0.0/8").unwrap();
        assert!(matches!(
            split_network(&net, 0),
            Err(Ipv4Error::InvalidArgument(_))
        ));
    }
}
