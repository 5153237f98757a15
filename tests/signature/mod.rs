use crate::helpers::*;
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};
use tezos_codec::{
    base58::{self, CodecError},
    context,
    prefix::IdentifierKind,
    signature::{sign, verify, KeyPair, SignatureMaterial, Signer, SigningError, Watermark},
    validate::is_valid_secret_key,
};

/// Keeps every formatted log message of the test process
struct CapturingLogger {
    messages: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.messages.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    messages: Mutex::new(Vec::new()),
};

fn capture_logs() -> &'static CapturingLogger {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    &LOGGER
}

#[test]
fn key_pair() {
    let key_pair = KeyPair::from_secret_key(SECRET_KEY).unwrap();

    assert_eq!(key_pair.public_key(), PUBLIC_KEY);
    assert_eq!(key_pair.address().unwrap(), TZ2);
    assert_eq!(
        KeyPair::from_public_key(PUBLIC_KEY).unwrap().secret_key(),
        None
    );
}

#[test]
fn sign_and_verify_each_watermark() {
    let key_pair = KeyPair::from_secret_key(SECRET_KEY).unwrap();
    let watermarks = [
        Watermark::Block,
        Watermark::Endorsement,
        Watermark::GenericOperation,
        Watermark::Custom(vec![0x05, 0x01]),
    ];
    let message = "05010000000474657374";

    for watermark in &watermarks {
        let response = sign(&key_pair, message, watermark).unwrap();

        for other in &watermarks {
            assert_eq!(
                verify(message, PUBLIC_KEY, &response.sig, other),
                watermark == other,
                "signed with {watermark}, verified with {other}"
            );
        }
    }
}

#[test]
fn verify_is_total() {
    let watermark = Watermark::default();

    for (message, public_key, signature) in [
        ("", PUBLIC_KEY, SIGNATURE),
        ("00", "", SIGNATURE),
        ("00", PUBLIC_KEY, ""),
        ("00", TZ1, SIGNATURE),
        ("00", PUBLIC_KEY, BLOCK_HASH),
        ("0x", PUBLIC_KEY, SIGNATURE),
    ] {
        assert!(!verify(message, public_key, signature, &watermark));
    }
}

#[test]
fn verify_survives_teardown() {
    let key_pair = KeyPair::from_secret_key(SECRET_KEY).unwrap();
    let response = sign(&key_pair, "00", &Watermark::default()).unwrap();

    context::teardown();
    assert!(verify("00", PUBLIC_KEY, &response.sig, &Watermark::default()));
    assert!(context::is_initialized());
}

struct RejectingSigner;

impl Signer for RejectingSigner {
    fn sign(&self, _: &[u8], _: &[u8; 32]) -> Result<SignatureMaterial, SigningError> {
        Err(SigningError::Signer("hardware wallet declined".to_string()))
    }
}

#[test]
fn injected_signer_errors_propagate() {
    let key_pair = KeyPair::from_secret_key(SECRET_KEY).unwrap();

    assert_eq!(
        tezos_codec::signature::sign_with(&RejectingSigner, &key_pair, "00", &Watermark::Block),
        Err(SigningError::Signer("hardware wallet declined".to_string()))
    );
}

#[test]
fn malformed_secret_keys_stay_out_of_logs() {
    let logger = capture_logs();

    // one character off, fails the checksum
    let typo = format!("{}L", &SECRET_KEY[..SECRET_KEY.len() - 1]);
    // checksum-valid, one byte short
    let short = base58::encode_kind(IdentifierKind::Spsk, &[1; 31]);

    for secret_key in [&typo, &short] {
        assert!(matches!(
            KeyPair::from_secret_key(secret_key),
            Err(CodecError::UnsupportedKey {
                kind: IdentifierKind::Spsk,
                ..
            })
        ));
        assert!(!is_valid_secret_key(secret_key));
    }

    let messages = logger.messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg.contains("spsk")));
    for msg in messages.iter() {
        assert!(!msg.contains(&typo), "{msg}");
        assert!(!msg.contains(&short), "{msg}");
    }
}
