//! Multisig wallet transfer parameters
//!
//! The Michelson data that multisig signers approve is produced elsewhere.
//! This only checks the addresses before they reach it.

use crate::address::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultisigError {
    #[error("Invalid contract address {0}. An originated account address was expected")]
    InvalidContractAddress(String),
    #[error("Invalid destination address {0}")]
    InvalidDestinationAddress(String),
}

/// Transfer of `amount` mutez out of a multisig wallet contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigTransfer {
    pub contract: Address,
    pub destination: Address,
    pub amount: u64,
    pub counter: u64,
}

impl MultisigTransfer {
    pub fn new(
        contract: &str,
        destination: &str,
        amount: u64,
        counter: u64,
    ) -> Result<Self, MultisigError> {
        let contract = match Address::new(contract) {
            Ok(address @ Address::Originated(_)) => address,
            _ => return Err(MultisigError::InvalidContractAddress(contract.to_string())),
        };
        let destination = Address::new(destination)
            .map_err(|_| MultisigError::InvalidDestinationAddress(destination.to_string()))?;

        Ok(Self {
            contract,
            destination,
            amount,
            counter,
        })
    }
}
