//! Validation predicates
//!
//! All predicates are total: decode failures are reported as `false`.

use crate::{
    base58::decode_with_prefix,
    prefix::{IdentifierKind, IMPLICIT_ADDRESSES, PUBLIC_KEYS, SECRET_KEYS, SIGNATURES},
};

/// Checks for an optional `0x` prefix followed by a nonempty run of hex
/// digit pairs
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    !digits.is_empty() && digits.len() % 2 == 0 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Checks the prefix and payload length of `hash` against `kind`
pub fn is_valid_hash(hash: &str, kind: IdentifierKind) -> bool {
    match decode_with_prefix(hash, kind) {
        Ok(_) => true,
        Err(e) => {
            // secret keys never reach the log
            if kind.is_secret_key() {
                log::trace!("Invalid {kind}: {e}");
            } else {
                log::trace!("Invalid {kind} {hash}: {e}");
            }
            false
        }
    }
}

/// Same as [is_valid_hash]
pub fn is_valid_key(key: &str, kind: IdentifierKind) -> bool {
    is_valid_hash(key, kind)
}

fn is_valid_any(hash: &str, kinds: &[IdentifierKind]) -> bool {
    kinds.iter().any(|kind| is_valid_hash(hash, *kind))
}

/// tz1, tz2 or tz3 address
pub fn is_valid_implicit_address(address: &str) -> bool {
    is_valid_any(address, IMPLICIT_ADDRESSES)
}

/// KT1 address
pub fn is_valid_originated_address(address: &str) -> bool {
    is_valid_hash(address, IdentifierKind::Kt1)
}

pub fn is_valid_address(address: &str) -> bool {
    is_valid_implicit_address(address) || is_valid_originated_address(address)
}

pub fn is_valid_public_key(key: &str) -> bool {
    is_valid_any(key, PUBLIC_KEYS)
}

pub fn is_valid_secret_key(key: &str) -> bool {
    is_valid_any(key, SECRET_KEYS)
}

pub fn is_valid_signature(signature: &str) -> bool {
    is_valid_any(signature, SIGNATURES)
}

pub fn is_valid_block_hash(hash: &str) -> bool {
    is_valid_hash(hash, IdentifierKind::BlockHash)
}

pub fn is_valid_transaction_hash(hash: &str) -> bool {
    is_valid_hash(hash, IdentifierKind::OperationHash)
}

pub fn is_valid_protocol_hash(hash: &str) -> bool {
    is_valid_hash(hash, IdentifierKind::ProtocolHash)
}

pub fn is_valid_chain_id(chain_id: &str) -> bool {
    is_valid_hash(chain_id, IdentifierKind::ChainId)
}
