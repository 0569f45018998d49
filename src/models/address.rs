//! IPv4 host address and classful classification.

use super::value::{parse_octets, Ipv4Value, RawValue};
use crate::error::{Ipv4Error, Result};
use crate::processing::reserved;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    /// Four 0-255 segments, optionally surrounded by whitespace.
    static ref ADDRESS_RE: Regex = Regex::new(
        r"^\s*(?:(?:25[0-5]|2[0-4]\d|1\d{2}|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d{2}|[1-9]?\d)\s*$"
    )
    .expect("Invalid Regex?");
}

/// Classful network class, decided by the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IpClass {
    /// 0******* 0~127
    A,
    /// 10****** 128~191
    B,
    /// 110***** 192~223
    C,
    /// 1110**** 224~239
    D,
    /// 1111**** 240~255 reserved
    E,
}

impl IpClass {
    /// Class of an address whose first octet is `octet`.
    pub fn from_first_octet(octet: u8) -> IpClass {
        match octet {
            0..=127 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=255 => IpClass::E,
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
        };
        f.write_str(letter)
    }
}

/// IPv4 address stored as a raw 32-bit value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    raw: RawValue,
}

impl Address {
    /// Parse a dotted-decimal address such as `"10.0.0.1"`.
    ///
    /// # Examples
    /// ```
    /// use ipv4_calculator::{Address, Ipv4Value};
    /// let ip = Address::parse("10.0.0.1").unwrap();
    /// assert_eq!(ip.to_hex_string(), "0x0A000001");
    /// ```
    pub fn parse(text: &str) -> Result<Address> {
        if !ADDRESS_RE.is_match(text) {
            log::debug!("address {text:?} does not match dotted-decimal pattern");
            return Err(Ipv4Error::InvalidAddressFormat(text.to_string()));
        }
        let raw =
            parse_octets(text).ok_or_else(|| Ipv4Error::InvalidAddressFormat(text.to_string()))?;
        Ok(Address { raw })
    }

    /// Classful class of this address.
    pub fn classify(&self) -> IpClass {
        IpClass::from_first_octet(self.raw.octets()[0])
    }

    /// True for 10/8, 172.16/12 and 192.168/16.
    pub fn is_private(&self) -> bool {
        reserved::is_private(self)
    }

    /// True for 127/8.
    pub fn is_loopback(&self) -> bool {
        reserved::is_loopback(self)
    }
}

impl Ipv4Value for Address {
    fn value(&self) -> u32 {
        self.raw.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl FromStr for Address {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address {
            raw: RawValue(value),
        }
    }
}

impl From<Address> for u32 {
    fn from(address: Address) -> Self {
        address.raw.0
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::from(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(address: Address) -> Self {
        Ipv4Addr::from(address.raw.0)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
