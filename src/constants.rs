// version

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// watermarks

pub const BLOCK_WATERMARK: u8 = 0x01;
pub const ENDORSEMENT_WATERMARK: u8 = 0x02;
pub const GENERIC_OPERATION_WATERMARK: u8 = 0x03;

/// Used when signing and verifying unless told otherwise
pub const DEFAULT_WATERMARK: u8 = GENERIC_OPERATION_WATERMARK;

// curve constants

pub const SIGNATURE_LEN: usize = 64;
pub const SIGNATURE_HALF_LEN: usize = SIGNATURE_LEN / 2;
pub const DIGEST_LEN: usize = 32;
