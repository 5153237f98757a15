use crate::helpers::*;
use tezos_codec::{
    digest::{self, DeriveError},
    validate::{is_valid_implicit_address, is_valid_originated_address},
};

#[test]
fn transaction_id() {
    let id = digest::transaction_id(&"0123456789abcdef".repeat(4)).unwrap();
    assert_eq!(id, "op3QY3mT2vnzj2DHb6ZqEFVuAnNZDxXgS7TusH6BbrLHS5skpC8");

    // the id is a valid input to address derivation
    assert_eq!(
        digest::originated_address(&id, 0).unwrap(),
        "KT1PDi2gR8TV9DBbyGkqVdSSASWHGRkcDQmt"
    );
}

#[test]
fn originated_addresses_are_distinct_per_index() {
    let addresses: Vec<_> = (0..16)
        .map(|index| digest::originated_address(TXN_HASH, index).unwrap())
        .collect();

    for (i, address) in addresses.iter().enumerate() {
        assert!(is_valid_originated_address(address));
        assert!(!addresses[i + 1..].contains(address));
    }

    assert_eq!(addresses[0], "KT194rkQu3mWbdCQQHTG39xqb5iaaAD3pqJm");
    assert_eq!(addresses[1], "KT1Lw6Zz529EyaT5m2R8Mg11hPkULZtxP4cs");
}

#[test]
fn originated_address_of_non_operation_hash() {
    assert!(matches!(
        digest::originated_address(TZ1, 0),
        Err(DeriveError::InvalidTransactionId { .. })
    ));
}

#[test]
fn implicit_address_of_public_key() {
    let address = digest::implicit_address(PUBLIC_KEY).unwrap();

    assert_eq!(address, TZ2);
    assert!(is_valid_implicit_address(&address));
    assert!(matches!(
        digest::implicit_address(SECRET_KEY),
        Err(DeriveError::InvalidPublicKey { .. })
    ));
}
