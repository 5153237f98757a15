//! Block and operation hash types

use crate::{
    address::Address,
    digest,
    prefix::IdentifierKind,
    validate::{is_valid_block_hash, is_valid_transaction_hash},
};
use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Serialize)]
pub struct BlockHash(pub String);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Serialize)]
pub struct OperationHash(pub String);

impl BlockHash {
    pub const LEN: usize = IdentifierKind::BlockHash.encoded_len();
    pub const PREFIX: &'static str = IdentifierKind::BlockHash.name();

    pub fn is_valid(input: &str) -> bool {
        is_valid_block_hash(input)
    }
}

impl OperationHash {
    pub const LEN: usize = IdentifierKind::OperationHash.encoded_len();
    pub const PREFIX: &'static str = IdentifierKind::OperationHash.name();

    pub fn is_valid(input: &str) -> bool {
        is_valid_transaction_hash(input)
    }

    /// Hash of a signed, forged operation given in hex
    pub fn from_signed_bytes(signed_bytes_hex: &str) -> anyhow::Result<Self> {
        Ok(Self(digest::transaction_id(signed_bytes_hex)?))
    }

    /// Address of the contract created by the origination at `index`
    pub fn originated_address(&self, index: u32) -> anyhow::Result<Address> {
        Ok(Address::Originated(digest::originated_address(
            &self.0, index,
        )?))
    }
}

///////////
// serde //
///////////

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::utility::serde::from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for OperationHash {
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

impl std::str::FromStr for BlockHash {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            bail!("Invalid block hash: {s}")
        }
    }
}

impl std::str::FromStr for OperationHash {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            bail!("Invalid operation hash: {s}")
        }
    }
}

/////////////
// display //
/////////////

impl std::fmt::Display for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for OperationHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
