//! Blake2b digests and the identifiers derived from them
//!
//! Transaction ids are the 32-byte digest of the exact signed bytes that are
//! broadcast. Originated (KT1) addresses are the 20-byte digest of the
//! transaction id payload followed by the big-endian origination index.

use crate::{
    base58::{self, DecodeError},
    prefix::IdentifierKind,
};
use blake2::{
    digest::consts::{U20, U32},
    Blake2b, Digest,
};
use thiserror::Error;

type Blake2b256 = Blake2b<U32>;
type Blake2b160 = Blake2b<U20>;

/// Derivation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("invalid transaction id {id}: {source}")]
    InvalidTransactionId {
        id: String,
        #[source]
        source: DecodeError,
    },
    #[error("invalid public key {key}")]
    InvalidPublicKey { key: String },
}

pub type Result<T> = std::result::Result<T, DeriveError>;

/// Unkeyed blake2b with a 32-byte output
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}

/// Unkeyed blake2b with a 20-byte output
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    Blake2b160::digest(data).into()
}

/// Decodes hex with an optional `0x` prefix
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(digits).map_err(|e| DeriveError::InvalidHex(format!("{e}: {input}")))
}

/// Operation hash (`o...`) of a signed, forged transaction given in hex
pub fn transaction_id(signed_bytes_hex: &str) -> Result<String> {
    let signed_bytes = decode_hex(signed_bytes_hex)?;
    let payload = blake2b_256(&signed_bytes);

    Ok(base58::encode_kind(IdentifierKind::OperationHash, &payload))
}

/// Address (`KT1...`) of the contract created by the origination at
/// `index` (zero-based, counting originations only) in transaction
/// `transaction_id`
pub fn originated_address(transaction_id: &str, index: u32) -> Result<String> {
    let mut bytes = base58::decode_with_prefix(transaction_id, IdentifierKind::OperationHash)
        .map_err(|source| DeriveError::InvalidTransactionId {
            id: transaction_id.to_string(),
            source,
        })?;
    bytes.extend_from_slice(&index.to_be_bytes());

    let payload = blake2b_160(&bytes);
    Ok(base58::encode_kind(IdentifierKind::Kt1, &payload))
}

/// Implicit address (`tz1`, `tz2`, `tz3`) controlled by the encoded public key
pub fn implicit_address(public_key: &str) -> Result<String> {
    let invalid = || DeriveError::InvalidPublicKey {
        key: public_key.to_string(),
    };
    let decoded = base58::decode(public_key).map_err(|_| invalid())?;
    let (key_kind, address_kind) = match IdentifierKind::detect(&decoded) {
        Some(kind @ IdentifierKind::Edpk) => (kind, IdentifierKind::Tz1),
        Some(kind @ IdentifierKind::Sppk) => (kind, IdentifierKind::Tz2),
        Some(kind @ IdentifierKind::P2pk) => (kind, IdentifierKind::Tz3),
        _ => return Err(invalid()),
    };

    let raw_key = &decoded[key_kind.prefix().len()..];
    Ok(base58::encode_kind(address_kind, &blake2b_160(raw_key)))
}
