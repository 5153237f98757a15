//! Common (de)serialization functions

use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/////////////
// strings //
/////////////

/// Deserialize from `str`
pub fn from_str<'de, T, D>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    String::deserialize(de)?
        .parse()
        .map_err(serde::de::Error::custom)
}

/// Serialize to `str`
pub fn to_str<T, S>(value: T, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: ToString,
{
    let s = value.to_string();
    ser.serialize_str(&s)
}

/////////
// hex //
/////////

/// Deserialize bytes from hex, `0x` prefix optional
pub fn from_hex<'de, D>(de: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(de)?;
    crate::digest::decode_hex(&s).map_err(serde::de::Error::custom)
}

/// Serialize bytes to `0x`-prefixed hex
pub fn to_hex<S>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    ser.serialize_str(&format!("0x{}", hex::encode(bytes)))
}
