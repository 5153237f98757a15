//! Watermarked message signing and verification
//!
//! Signed data is always `watermark || message`. The 32-byte blake2b digest
//! of that buffer is what the curve signs, so a signature made under one
//! watermark never verifies under another.

use crate::{
    base58::{self, CodecError},
    constants::*,
    context,
    digest::{self, blake2b_256},
    prefix::IdentifierKind,
};
use anyhow::bail;
use secp256k1::{ecdsa, Message, PublicKey, SecretKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Magic byte prepended to signed data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Watermark {
    Block,
    Endorsement,
    #[default]
    GenericOperation,
    Custom(
        #[serde(
            serialize_with = "crate::utility::serde::to_hex",
            deserialize_with = "crate::utility::serde::from_hex"
        )]
        Vec<u8>,
    ),
}

impl Watermark {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Block => &[BLOCK_WATERMARK],
            Self::Endorsement => &[ENDORSEMENT_WATERMARK],
            Self::GenericOperation => &[GENERIC_OPERATION_WATERMARK],
            Self::Custom(bytes) => bytes,
        }
    }
}

impl From<u8> for Watermark {
    fn from(value: u8) -> Self {
        match value {
            BLOCK_WATERMARK => Self::Block,
            ENDORSEMENT_WATERMARK => Self::Endorsement,
            GENERIC_OPERATION_WATERMARK => Self::GenericOperation,
            other => Self::Custom(vec![other]),
        }
    }
}

impl std::str::FromStr for Watermark {
    type Err = anyhow::Error;

    /// Accepts `block`, `endorsement`, `generic`, a decimal byte, or
    /// `0x`-prefixed hex bytes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Self::Block),
            "endorsement" => Ok(Self::Endorsement),
            "generic" => Ok(Self::GenericOperation),
            _ if s.starts_with("0x") => {
                let bytes = digest::decode_hex(s)?;
                match bytes.as_slice() {
                    [] => bail!("Empty watermark: {s}"),
                    [byte] => Ok(Self::from(*byte)),
                    _ => Ok(Self::Custom(bytes)),
                }
            }
            _ => Ok(Self::from(s.parse::<u8>()?)),
        }
    }
}

impl std::fmt::Display for Watermark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_bytes()))
    }
}

/// `r` and `s` halves of a 64-byte signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureMaterial {
    pub r: [u8; SIGNATURE_HALF_LEN],
    pub s: [u8; SIGNATURE_HALF_LEN],
}

impl SignatureMaterial {
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LEN]) -> Self {
        let mut r = [0; SIGNATURE_HALF_LEN];
        let mut s = [0; SIGNATURE_HALF_LEN];

        r.copy_from_slice(&bytes[..SIGNATURE_HALF_LEN]);
        s.copy_from_slice(&bytes[SIGNATURE_HALF_LEN..]);
        Self { r, s }
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0; SIGNATURE_LEN];

        bytes[..SIGNATURE_HALF_LEN].copy_from_slice(&self.r);
        bytes[SIGNATURE_HALF_LEN..].copy_from_slice(&self.s);
        bytes
    }

    /// ECDSA signature with `s` normalized to the lower half of the curve
    /// order, high-S signatures are accepted on verification
    fn to_ecdsa(self) -> Result<ecdsa::Signature, secp256k1::Error> {
        let mut signature = ecdsa::Signature::from_compact(&self.to_bytes())?;
        signature.normalize_s();
        Ok(signature)
    }
}

/// Signing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("missing private key")]
    MissingPrivateKey,
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    #[error("invalid message: {0}")]
    InvalidMessage(String),
    #[error("signer failure: {0}")]
    Signer(String),
}

/// Elliptic-curve signing capability
pub trait Signer {
    /// Signs the 32-byte `digest` with the raw `secret_key`
    fn sign(
        &self,
        secret_key: &[u8],
        digest: &[u8; DIGEST_LEN],
    ) -> Result<SignatureMaterial, SigningError>;
}

/// Deterministic (RFC 6979) secp256k1 signer
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Signer;

impl Signer for Secp256k1Signer {
    fn sign(
        &self,
        secret_key: &[u8],
        digest: &[u8; DIGEST_LEN],
    ) -> Result<SignatureMaterial, SigningError> {
        let secret_key =
            SecretKey::from_slice(secret_key).map_err(|e| SigningError::InvalidKey(e.to_string()))?;
        let message = Message::from_digest(*digest);
        let signature = context::context().sign_ecdsa(&message, &secret_key);

        Ok(SignatureMaterial::from_bytes(
            &signature.serialize_compact(),
        ))
    }
}

/// secp256k1 key pair, the secret key is optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: String,
    secret_key: Option<String>,
}

impl KeyPair {
    /// Key pair from an `spsk` encoded secret key
    pub fn from_secret_key(secret_key: &str) -> Result<Self, CodecError> {
        let kind = IdentifierKind::Spsk;
        let raw = base58::decode_key(secret_key, kind)?;
        let secret =
            SecretKey::from_slice(&raw).map_err(|_| CodecError::InvalidKeyMaterial { kind })?;
        let context = context::context();
        let public = PublicKey::from_secret_key(&*context, &secret);

        Ok(Self {
            public_key: base58::encode_kind(IdentifierKind::Sppk, &public.serialize()),
            secret_key: Some(secret_key.to_string()),
        })
    }

    /// Verification-only key pair from an `sppk` encoded public key
    pub fn from_public_key(public_key: &str) -> Result<Self, CodecError> {
        let kind = IdentifierKind::Sppk;
        let raw = base58::decode_key(public_key, kind)?;
        PublicKey::from_slice(&raw).map_err(|_| CodecError::InvalidKeyMaterial { kind })?;

        Ok(Self {
            public_key: public_key.to_string(),
            secret_key: None,
        })
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    /// tz2 address of the public key
    pub fn address(&self) -> Result<String, digest::DeriveError> {
        digest::implicit_address(&self.public_key)
    }
}

/// Result of signing a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    /// Signed message in hex
    pub bytes: String,

    /// Generic `sig` encoded signature
    pub sig: String,

    /// Curve specific `spsig1` encoded signature
    pub prefix_sig: String,

    /// Message followed by the raw signature, in hex
    pub sbytes: String,
}

/// Blake2b-256 of `watermark || message`
pub fn watermarked_digest(message: &[u8], watermark: &Watermark) -> [u8; DIGEST_LEN] {
    let mut bytes = Vec::with_capacity(watermark.as_bytes().len() + message.len());
    bytes.extend_from_slice(watermark.as_bytes());
    bytes.extend_from_slice(message);

    blake2b_256(&bytes)
}

/// Signs the hex `message` with the key pair's secret key
pub fn sign(
    key_pair: &KeyPair,
    message: &str,
    watermark: &Watermark,
) -> Result<SignResponse, SigningError> {
    sign_with(&Secp256k1Signer, key_pair, message, watermark)
}

/// Signs the hex `message` with the key pair's secret key through `signer`
pub fn sign_with<S: Signer + ?Sized>(
    signer: &S,
    key_pair: &KeyPair,
    message: &str,
    watermark: &Watermark,
) -> Result<SignResponse, SigningError> {
    let secret_key = key_pair
        .secret_key()
        .ok_or(SigningError::MissingPrivateKey)?;
    let raw_secret_key = base58::decode_key(secret_key, IdentifierKind::Spsk)
        .map_err(|e| SigningError::InvalidKey(e.to_string()))?;

    let message_bytes =
        digest::decode_hex(message).map_err(|e| SigningError::InvalidMessage(e.to_string()))?;
    let digest = watermarked_digest(&message_bytes, watermark);
    let signature = signer.sign(&raw_secret_key, &digest)?.to_bytes();

    let bytes = hex::encode(&message_bytes);
    Ok(SignResponse {
        sig: base58::encode_kind(IdentifierKind::Sig, &signature),
        prefix_sig: base58::encode_kind(IdentifierKind::Spsig, &signature),
        sbytes: format!("{bytes}{}", hex::encode(signature)),
        bytes,
    })
}

/// Verifies `signature` over the hex `message` against an `sppk` public key.
///
/// Malformed keys, signatures or messages are reported as `false`, the same
/// as a signature that does not match.
pub fn verify(message: &str, public_key: &str, signature: &str, watermark: &Watermark) -> bool {
    match try_verify(message, public_key, signature, watermark) {
        Ok(verified) => verified,
        Err(e) => {
            log::debug!("Unable to verify signature {signature}: {e}");
            false
        }
    }
}

fn try_verify(
    message: &str,
    public_key: &str,
    signature: &str,
    watermark: &Watermark,
) -> anyhow::Result<bool> {
    let raw_public_key = base58::decode_key(public_key, IdentifierKind::Sppk)?;
    let public_key = PublicKey::from_slice(&raw_public_key)?;

    let (_, raw_signature) = base58::decode_signature(signature)?;
    let signature = SignatureMaterial::from_bytes(&raw_signature).to_ecdsa()?;

    let message = digest::decode_hex(message)?;
    let digest = Message::from_digest(watermarked_digest(&message, watermark));

    Ok(context::context()
        .verify_ecdsa(&digest, &signature, &public_key)
        .is_ok())
}
