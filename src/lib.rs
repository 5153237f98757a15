pub mod address;
pub mod base58;
pub mod cli;
pub mod constants;
pub mod context;
pub mod digest;
pub mod hash;
pub mod multisig;
pub mod prefix;
pub mod signature;
pub mod utility;
pub mod validate;
