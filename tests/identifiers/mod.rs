use crate::helpers::*;
use tezos_codec::{
    address::Address,
    base58::{self, DecodeError},
    hash::{BlockHash, OperationHash},
    multisig::{MultisigError, MultisigTransfer},
    prefix::{IdentifierKind, ALL},
    validate::*,
};

#[test]
fn known_identifiers() {
    assert!(is_valid_address(TZ1));
    assert!(!is_valid_address("tz4aWXP237BLwNHJcCD4b3DutCevhqq2T1Z9"));

    assert!(is_valid_block_hash(BLOCK_HASH));
    assert!(!is_valid_block_hash(&format!("{BLOCK_HASH}abcdefghij")));

    assert!(is_valid_transaction_hash(TXN_HASH));
    assert!(!is_valid_transaction_hash(&format!("l{}", &TXN_HASH[1..])));

    assert!(is_valid_signature(SIGNATURE));
    assert!(!is_valid_signature(&SIGNATURE[..SIGNATURE.len() / 2]));
}

#[test]
fn detect_kind_of_known_identifiers() {
    let expect = [
        (TZ1, IdentifierKind::Tz1),
        (TZ2, IdentifierKind::Tz2),
        (BLOCK_HASH, IdentifierKind::BlockHash),
        (TXN_HASH, IdentifierKind::OperationHash),
        (SIGNATURE, IdentifierKind::Spsig),
        (PUBLIC_KEY, IdentifierKind::Sppk),
        (SECRET_KEY, IdentifierKind::Spsk),
    ];

    for (text, kind) in expect {
        let decoded = base58::decode(text).unwrap();
        assert_eq!(IdentifierKind::detect(&decoded), Some(kind), "{text}");
        assert_eq!(text.len(), kind.encoded_len(), "{text}");
        assert!(text.starts_with(kind.name()), "{text}");
    }
}

#[test]
fn every_kind_round_trips() {
    for kind in ALL {
        let payload: Vec<u8> = (0..kind.payload_len()).map(|i| i as u8).collect();
        let encoded = base58::encode_kind(*kind, &payload);

        assert!(is_valid_hash(&encoded, *kind), "{kind}");
        assert_eq!(base58::decode_with_prefix(&encoded, *kind), Ok(payload));
    }
}

#[test]
fn decode_errors() {
    assert_eq!(base58::decode(""), Err(DecodeError::TooShort));
    assert!(matches!(
        base58::decode("tz1lll"),
        Err(DecodeError::InvalidAlphabet { character: 'l', index: 3 })
    ));
    assert!(matches!(
        base58::decode_with_prefix(TZ1, IdentifierKind::Kt1),
        Err(DecodeError::WrongPrefix { .. })
    ));
}

#[test]
fn typed_identifiers() {
    let address: Address = TZ1.parse().unwrap();
    assert!(address.is_implicit());
    assert_eq!(address.to_string(), TZ1);

    let block_hash: BlockHash = BLOCK_HASH.parse().unwrap();
    assert_eq!(block_hash.0, BLOCK_HASH);

    let txn_hash: OperationHash = TXN_HASH.parse().unwrap();
    assert_eq!(
        txn_hash.originated_address(0).unwrap().to_string(),
        "KT194rkQu3mWbdCQQHTG39xqb5iaaAD3pqJm"
    );

    assert!(TXN_HASH.parse::<Address>().is_err());
    assert!(TZ1.parse::<BlockHash>().is_err());
}

#[test]
fn multisig_transfer_guard() {
    let contract = "KT194rkQu3mWbdCQQHTG39xqb5iaaAD3pqJm";

    let transfer = MultisigTransfer::new(contract, TZ2, 10, 3).unwrap();
    let json = serde_json::to_value(&transfer).unwrap();
    assert_eq!(json["contract"], contract);
    assert_eq!(json["destination"], TZ2);

    assert_eq!(
        MultisigTransfer::new(TZ1, TZ2, 10, 3),
        Err(MultisigError::InvalidContractAddress(TZ1.to_string()))
    );
    assert_eq!(
        MultisigTransfer::new(contract, BLOCK_HASH, 10, 3),
        Err(MultisigError::InvalidDestinationAddress(
            BLOCK_HASH.to_string()
        ))
    );
}
