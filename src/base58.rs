//! Base58check codec for prefixed identifiers
//!
//! The checksum is the first 4 bytes of a double SHA-256 over
//! `prefix || payload`, appended before base58 encoding.

use crate::prefix::{IdentifierKind, SIGNATURES};
use thiserror::Error;

/// Base58check decode errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Character outside of the base58 alphabet
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidAlphabet { character: char, index: usize },
    /// Trailing 4 bytes do not match the recomputed checksum
    #[error("invalid base58 checksum")]
    ChecksumMismatch,
    /// Not enough bytes to hold a checksum
    #[error("base58 input too short")]
    TooShort,
    /// Leading bytes are not the expected prefix
    #[error("invalid {kind} prefix")]
    WrongPrefix { kind: IdentifierKind },
    /// Payload is not exactly the expected length
    #[error("invalid {kind} payload length: expected {expected} bytes, got {actual}")]
    WrongLength {
        kind: IdentifierKind,
        expected: usize,
        actual: usize,
    },
    #[error("malformed base58check input: {0}")]
    Malformed(String),
}

/// Caller-facing errors for key and signature decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unsupported {kind} key")]
    UnsupportedKey {
        kind: IdentifierKind,
        #[source]
        source: DecodeError,
    },
    #[error("unsupported signature")]
    UnsupportedSignature,
    /// Well-formed encoding of bytes that are not a valid curve key
    #[error("invalid {kind} key material")]
    InvalidKeyMaterial { kind: IdentifierKind },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Base58check encode `prefix || payload`
pub fn encode(prefix: &[u8], payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(prefix.len() + payload.len());
    raw.extend_from_slice(prefix);
    raw.extend_from_slice(payload);

    bs58::encode(raw).with_check().into_string()
}

/// Base58check encode `payload` with the prefix of `kind`
pub fn encode_kind(kind: IdentifierKind, payload: &[u8]) -> String {
    encode(kind.prefix(), payload)
}

/// Decode base58check text into `prefix || payload` (checksum stripped)
pub fn decode(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .with_check(None)
        .into_vec()
        .map_err(|e| from_bs58_error(text, e))
}

/// Decode base58check text, then strip and check the prefix and payload
/// length of `kind`
pub fn decode_with_prefix(text: &str, kind: IdentifierKind) -> Result<Vec<u8>> {
    let decoded = decode(text)?;
    let prefix = kind.prefix();

    if !decoded.starts_with(prefix) {
        return Err(DecodeError::WrongPrefix { kind });
    }

    let payload = &decoded[prefix.len()..];
    if payload.len() != kind.payload_len() {
        return Err(DecodeError::WrongLength {
            kind,
            expected: kind.payload_len(),
            actual: payload.len(),
        });
    }

    Ok(payload.to_vec())
}

/// Raw key bytes from an encoded key of the given kind
pub fn decode_key(text: &str, kind: IdentifierKind) -> std::result::Result<Vec<u8>, CodecError> {
    decode_with_prefix(text, kind).map_err(|source| {
        log::debug!("Unsupported {kind} key: {source}");
        CodecError::UnsupportedKey { kind, source }
    })
}

/// Raw 64 signature bytes from any of the signature encodings
/// (`sig`, `edsig`, `spsig1`, `p2sig`), with the matching prefix stripped
pub fn decode_signature(
    text: &str,
) -> std::result::Result<(IdentifierKind, [u8; 64]), CodecError> {
    for kind in SIGNATURES {
        if let Ok(payload) = decode_with_prefix(text, *kind) {
            let raw = payload
                .try_into()
                .map_err(|_| CodecError::UnsupportedSignature)?;
            return Ok((*kind, raw));
        }
    }

    log::debug!("Unsupported signature {text}");
    Err(CodecError::UnsupportedSignature)
}

fn from_bs58_error(text: &str, error: bs58::decode::Error) -> DecodeError {
    use bs58::decode::Error::*;

    match error {
        InvalidCharacter { character, index } => DecodeError::InvalidAlphabet { character, index },
        NonAsciiCharacter { index } => DecodeError::InvalidAlphabet {
            character: text
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        },
        InvalidChecksum { .. } => DecodeError::ChecksumMismatch,
        NoChecksum => DecodeError::TooShort,
        other => DecodeError::Malformed(other.to_string()),
    }
}
