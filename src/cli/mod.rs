use crate::{
    constants::DEFAULT_WATERMARK,
    digest,
    prefix::IdentifierKind,
    signature::{self, KeyPair, Watermark},
    validate,
};
use clap::Subcommand;
use log::{debug, LevelFilter};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct LogLevelFilter(pub LevelFilter);

impl std::str::FromStr for LogLevelFilter {
    type Err = <LevelFilter as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelFilter::from_str(s).map(Self)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self(LevelFilter::Warn)
    }
}

impl std::fmt::Display for LogLevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What `validate` checks a value against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateTarget {
    /// Implicit or originated address
    Address,
    PublicKey,
    SecretKey,
    Signature,
    Kind(IdentifierKind),
}

impl ValidateTarget {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Address => validate::is_valid_address(value),
            Self::PublicKey => validate::is_valid_public_key(value),
            Self::SecretKey => validate::is_valid_secret_key(value),
            Self::Signature => validate::is_valid_signature(value),
            Self::Kind(kind) => validate::is_valid_hash(value, *kind),
        }
    }
}

impl std::str::FromStr for ValidateTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "address" => Self::Address,
            "public-key" => Self::PublicKey,
            "secret-key" => Self::SecretKey,
            "signature" => Self::Signature,
            kind => Self::Kind(kind.parse()?),
        })
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a value against an identifier kind (tz1, KT1, B, o, ...) or a
    /// group (address, public-key, secret-key, signature)
    Validate {
        target: ValidateTarget,
        value: String,
    },
    /// Operation hash of signed, forged operation bytes
    TransactionId {
        /// Signed bytes in hex
        signed_bytes: String,
    },
    /// Address of a contract created by an origination
    OriginatedAddress {
        /// Operation hash of the origination
        transaction_id: String,
        /// Zero-based index among the originations of the operation
        #[arg(long, default_value_t = 0)]
        index: u32,
    },
    /// Implicit address controlled by a public key
    ImplicitAddress { public_key: String },
    /// Verify a secp256k1 signature over a watermarked message
    Verify {
        /// Message in hex
        message: String,
        /// sppk encoded public key
        public_key: String,
        signature: String,
        /// block, endorsement, generic, a byte, or 0x-prefixed hex
        #[arg(long, default_value_t = Watermark::from(DEFAULT_WATERMARK))]
        watermark: Watermark,
    },
    /// Sign a watermarked message with a secp256k1 secret key
    Sign {
        /// Message in hex
        message: String,
        /// spsk encoded secret key
        #[arg(long)]
        secret_key: String,
        /// block, endorsement, generic, a byte, or 0x-prefixed hex
        #[arg(long, default_value_t = Watermark::from(DEFAULT_WATERMARK))]
        watermark: Watermark,
    },
}

impl Command {
    /// Runs the command and renders its result, as JSON if `json`
    pub fn run(self, json: bool) -> anyhow::Result<String> {
        match self {
            Self::Validate { target, value } => render(&target.check(&value), json),
            Self::TransactionId { signed_bytes } => {
                render(&digest::transaction_id(&signed_bytes)?, json)
            }
            Self::OriginatedAddress {
                transaction_id,
                index,
            } => render(&digest::originated_address(&transaction_id, index)?, json),
            Self::ImplicitAddress { public_key } => {
                render(&digest::implicit_address(&public_key)?, json)
            }
            Self::Verify {
                message,
                public_key,
                signature,
                watermark,
            } => render(
                &signature::verify(&message, &public_key, &signature, &watermark),
                json,
            ),
            Self::Sign {
                message,
                secret_key,
                watermark,
            } => {
                let key_pair = KeyPair::from_secret_key(&secret_key)?;
                debug!("Signing with {}", key_pair.public_key());
                let response = signature::sign(&key_pair, &message, &watermark)?;

                if json {
                    Ok(serde_json::to_string(&response)?)
                } else {
                    Ok(serde_json::to_string_pretty(&response)?)
                }
            }
        }
    }
}

fn render<T>(value: &T, json: bool) -> anyhow::Result<String>
where
    T: Serialize + std::fmt::Display + ?Sized,
{
    if json {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(value.to_string())
    }
}
