//! Tezos account address

use crate::{
    base58,
    prefix::IdentifierKind,
    validate::{is_valid_implicit_address, is_valid_originated_address},
};
use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    /// tz1, tz2 or tz3 address controlled by a key pair
    Implicit(String),
    /// KT1 contract address
    Originated(String),
}

impl Address {
    pub const LEN: usize = 36;

    pub fn new<S: Into<String>>(address: S) -> anyhow::Result<Self> {
        let address: String = address.into();

        if is_valid_implicit_address(&address) {
            return Ok(Self::Implicit(address));
        }

        if is_valid_originated_address(&address) {
            return Ok(Self::Originated(address));
        }

        bail!("Invalid address: '{address}'")
    }

    pub fn inner(self) -> String {
        match self {
            Self::Implicit(address) | Self::Originated(address) => address,
        }
    }

    pub fn ref_inner(&self) -> &String {
        match self {
            Self::Implicit(address) | Self::Originated(address) => address,
        }
    }

    pub fn is_implicit(&self) -> bool {
        matches!(self, Self::Implicit(_))
    }

    pub fn is_originated(&self) -> bool {
        matches!(self, Self::Originated(_))
    }

    /// Kind of the address, `None` only if the inner string is invalid
    pub fn kind(&self) -> Option<IdentifierKind> {
        base58::decode(self.ref_inner())
            .ok()
            .and_then(|decoded| IdentifierKind::detect(&decoded))
    }
}

///////////
// serde //
///////////

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::utility::serde::to_str(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::utility::serde::from_str(deserializer)
    }
}

/////////////////
// conversions //
/////////////////

impl std::str::FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.inner()
    }
}

/////////////
// display //
/////////////

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ref_inner())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Address {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut payload = [0u8; 20];
        for byte in &mut payload {
            *byte = u8::arbitrary(g);
        }

        if bool::arbitrary(g) {
            let kind = g.choose(crate::prefix::IMPLICIT_ADDRESSES).expect("implicit kinds");
            Self::Implicit(base58::encode_kind(*kind, &payload))
        } else {
            Self::Originated(base58::encode_kind(IdentifierKind::Kt1, &payload))
        }
    }
}
