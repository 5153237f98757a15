//! Identifier kinds and their base58check prefixes
//!
//! Every human-readable Tezos value (addresses, hashes, keys, signatures)
//! is base58check encoded with a kind-specific byte prefix prepended to the
//! payload. The prefixes are chosen so that the encoded text starts with a
//! recognizable tag (`tz1`, `KT1`, `sppk`, ...), and each kind has a fixed
//! payload length.
//!
//! See https://gitlab.com/tezos/tezos/-/blob/master/src/lib_crypto/base58.ml

use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentifierKind {
    /// ed25519 public key hash
    Tz1,
    /// secp256k1 public key hash
    Tz2,
    /// p256 public key hash
    Tz3,
    /// originated contract hash
    Kt1,
    BlockHash,
    OperationHash,
    ProtocolHash,
    ChainId,
    /// Michelson script expression hash
    ScriptExpr,
    Edpk,
    Sppk,
    P2pk,
    /// ed25519 secret key (seed || public key)
    Edsk,
    /// ed25519 seed
    EdskSeed,
    Spsk,
    P2sk,
    /// curve-agnostic signature
    Sig,
    Edsig,
    Spsig,
    P2sig,
}

use IdentifierKind::*;

pub const IMPLICIT_ADDRESSES: &[IdentifierKind] = &[Tz1, Tz2, Tz3];
pub const PUBLIC_KEYS: &[IdentifierKind] = &[Edpk, Sppk, P2pk];
pub const SECRET_KEYS: &[IdentifierKind] = &[Edsk, EdskSeed, Spsk, P2sk];
pub const SIGNATURES: &[IdentifierKind] = &[Sig, Edsig, Spsig, P2sig];

pub const ALL: &[IdentifierKind] = &[
    Tz1,
    Tz2,
    Tz3,
    Kt1,
    BlockHash,
    OperationHash,
    ProtocolHash,
    ChainId,
    ScriptExpr,
    Edpk,
    Sppk,
    P2pk,
    Edsk,
    EdskSeed,
    Spsk,
    P2sk,
    Sig,
    Edsig,
    Spsig,
    P2sig,
];

impl IdentifierKind {
    /// Bytes prepended to the payload before base58check encoding
    pub const fn prefix(&self) -> &'static [u8] {
        match self {
            Tz1 => &[6, 161, 159],
            Tz2 => &[6, 161, 161],
            Tz3 => &[6, 161, 164],
            Kt1 => &[2, 90, 121],
            BlockHash => &[1, 52],
            OperationHash => &[5, 116],
            ProtocolHash => &[2, 170],
            ChainId => &[87, 82, 0],
            ScriptExpr => &[13, 44, 64, 27],
            Edpk => &[13, 15, 37, 217],
            Sppk => &[3, 254, 226, 86],
            P2pk => &[3, 178, 139, 127],
            Edsk => &[43, 246, 78, 7],
            EdskSeed => &[13, 15, 58, 7],
            Spsk => &[17, 162, 224, 201],
            P2sk => &[16, 81, 238, 189],
            Sig => &[4, 130, 43],
            Edsig => &[9, 245, 205, 134, 18],
            Spsig => &[13, 115, 101, 19, 63],
            P2sig => &[54, 240, 44, 52],
        }
    }

    /// Number of payload bytes following the prefix
    pub const fn payload_len(&self) -> usize {
        match self {
            Tz1 | Tz2 | Tz3 | Kt1 => 20,
            BlockHash | OperationHash | ProtocolHash | ScriptExpr => 32,
            ChainId => 4,
            Edpk => 32,
            Sppk | P2pk => 33,
            Edsk => 64,
            EdskSeed | Spsk | P2sk => 32,
            Sig | Edsig | Spsig | P2sig => 64,
        }
    }

    /// Length of the base58check text
    pub const fn encoded_len(&self) -> usize {
        match self {
            Tz1 | Tz2 | Tz3 | Kt1 => 36,
            BlockHash | OperationHash | ProtocolHash => 51,
            ChainId => 15,
            ScriptExpr | Edpk => 54,
            Sppk | P2pk => 55,
            Edsk => 98,
            EdskSeed | Spsk | P2sk => 54,
            Sig => 96,
            Edsig | Spsig => 99,
            P2sig => 98,
        }
    }

    /// Leading characters of the encoded text
    pub const fn name(&self) -> &'static str {
        match self {
            Tz1 => "tz1",
            Tz2 => "tz2",
            Tz3 => "tz3",
            Kt1 => "KT1",
            BlockHash => "B",
            OperationHash => "o",
            ProtocolHash => "P",
            ChainId => "Net",
            ScriptExpr => "expr",
            Edpk => "edpk",
            Sppk => "sppk",
            P2pk => "p2pk",
            Edsk | EdskSeed => "edsk",
            Spsk => "spsk",
            P2sk => "p2sk",
            Sig => "sig",
            Edsig => "edsig",
            Spsig => "spsig1",
            P2sig => "p2sig",
        }
    }

    /// Unique tag, same as [Self::name] except for the ed25519 seed
    pub const fn tag(&self) -> &'static str {
        match self {
            EdskSeed => "edsk-seed",
            _ => self.name(),
        }
    }

    pub fn is_implicit_address(&self) -> bool {
        IMPLICIT_ADDRESSES.contains(self)
    }

    pub fn is_public_key(&self) -> bool {
        PUBLIC_KEYS.contains(self)
    }

    pub fn is_secret_key(&self) -> bool {
        SECRET_KEYS.contains(self)
    }

    pub fn is_signature(&self) -> bool {
        SIGNATURES.contains(self)
    }

    /// Finds the kind of a decoded (checksum stripped) buffer.
    ///
    /// A kind matches when the buffer starts with its prefix and the rest is
    /// exactly its payload length. Prefixes of different lengths may overlap,
    /// so the longest matching prefix wins.
    pub fn detect(decoded: &[u8]) -> Option<Self> {
        ALL.iter()
            .filter(|kind| {
                decoded.starts_with(kind.prefix())
                    && decoded.len() - kind.prefix().len() == kind.payload_len()
            })
            .max_by_key(|kind| kind.prefix().len())
            .copied()
    }
}

///////////
// serde //
///////////

impl Serialize for IdentifierKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::utility::serde::to_str(self, serializer)
    }
}

impl<'de> Deserialize<'de> for IdentifierKind {
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

impl std::str::FromStr for IdentifierKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "tz1" => Tz1,
            "tz2" => Tz2,
            "tz3" => Tz3,
            "KT1" | "kt1" => Kt1,
            "B" | "block" => BlockHash,
            "o" | "operation" => OperationHash,
            "P" | "protocol" => ProtocolHash,
            "Net" | "chain" => ChainId,
            "expr" => ScriptExpr,
            "edpk" => Edpk,
            "sppk" => Sppk,
            "p2pk" => P2pk,
            "edsk" => Edsk,
            "edsk-seed" => EdskSeed,
            "spsk" => Spsk,
            "p2sk" => P2sk,
            "sig" => Sig,
            "edsig" => Edsig,
            "spsig1" | "spsig" => Spsig,
            "p2sig" => P2sig,
            _ => bail!("Unknown identifier kind: {s}"),
        };

        Ok(kind)
    }
}

/////////////
// display //
/////////////

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for IdentifierKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(ALL).expect("nonempty kinds")
    }
}
