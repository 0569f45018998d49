//! IPv4 subnet masks and wildcard masks.

use super::value::{parse_octets, Ipv4Value, RawValue};
use crate::error::{Ipv4Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Shortest prefix a [`Mask`] can be built from.
pub const MIN_MASK_BIT: u8 = 1;
/// Longest prefix a [`Mask`] can be built from; /31 and /32 are not represented.
pub const MAX_MASK_BIT: u8 = 30;

lazy_static! {
    // Shape only, octet range is checked on conversion.
    static ref MASK_RE: Regex =
        Regex::new(r"^\s*(?:\d{1,3}\.){3}\d{1,3}\s*$").expect("Invalid Regex?");
}

/// Subnet mask, optionally stored in its inverted (wildcard) form.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    raw: RawValue,
    inverted: bool,
}

impl Mask {
    /// Parse a dotted-decimal mask such as `"255.255.255.0"`.
    pub fn parse(text: &str) -> Result<Mask> {
        if !MASK_RE.is_match(text) {
            log::debug!("mask {text:?} does not match dotted-decimal shape");
            return Err(Ipv4Error::InvalidMaskFormat(text.to_string()));
        }
        let raw =
            parse_octets(text).ok_or_else(|| Ipv4Error::InvalidMaskFormat(text.to_string()))?;
        Ok(Mask {
            raw,
            inverted: false,
        })
    }

    /// Build a mask with the top `bits` bits set.
    ///
    /// # Examples
    /// ```
    /// use ipv4_calculator::Mask;
    /// assert_eq!(Mask::from_bit_count(30).unwrap().to_string(), "255.255.255.252");
    /// assert!(Mask::from_bit_count(31).is_err());
    /// ```
    pub fn from_bit_count(bits: u8) -> Result<Mask> {
        if !(MIN_MASK_BIT..=MAX_MASK_BIT).contains(&bits) {
            return Err(Ipv4Error::MaskBitOutOfRange(i64::from(bits)));
        }
        let right_len = 32 - u32::from(bits);
        Ok(Mask {
            raw: RawValue((u32::MAX >> right_len) << right_len),
            inverted: false,
        })
    }

    /// Prefix length of the mask, counted on its non-inverted form.
    ///
    /// Counts shifts until the value is exhausted, so it is only meaningful
    /// for contiguous masks. A non-contiguous mask gives an unspecified count.
    pub fn bit_count(&self) -> u8 {
        let value = self.prefix_value();
        if value == 0 {
            0
        } else {
            (32 - value.trailing_zeros()) as u8
        }
    }

    /// Bitwise complement flagged as inverted. Returns `self` if already inverted.
    pub fn wildcard(&self) -> Mask {
        if self.inverted {
            return *self;
        }
        Mask {
            raw: RawValue(!self.raw.0),
            inverted: true,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The mask value with the inversion undone.
    pub fn prefix_value(&self) -> u32 {
        if self.inverted {
            !self.raw.0
        } else {
            self.raw.0
        }
    }
}

impl Ipv4Value for Mask {
    fn value(&self) -> u32 {
        self.raw.0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl FromStr for Mask {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self> {
        Mask::parse(s)
    }
}

impl From<u32> for Mask {
    fn from(value: u32) -> Self {
        Mask {
            raw: RawValue(value),
            inverted: false,
        }
    }
}
