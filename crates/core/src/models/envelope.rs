use crate::prelude::*;

use serde::{Deserialize, Serialize};

pub type Sequence = u64;
pub type Amount = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub address: Vec<u8>,
    pub amount: Amount,
    /// Must be exactly one greater than the last sequence used by `address`.
    pub sequence: Sequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub address: Vec<u8>,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTx {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Debug)]
pub struct PrivAccount {
    pub address: Vec<u8>,
    pub pub_key: String,
    #[debug(skip)]
    pub priv_key: String,
}

/// What the signing endpoint receives: the unsigned transaction plus the
/// accounts allowed to sign it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    pub tx: SendTx,
    pub priv_accounts: Vec<PrivAccount>,
}

/// Parameters of the single blocking send-and-hold call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Debug)]
pub struct HoldRequest {
    #[debug(skip)]
    pub priv_key: String,
    pub to_address: Address,
    pub amount: Amount,
}

/// One transfer, built fresh per send and dropped once the attempt is over.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, derive_more::Display)]
#[display("Transfer {{ to: {}, amount: {}, sequence: {} }}", destination, amount, sequence)]
pub struct TransactionEnvelope {
    #[getset(get = "pub")]
    destination: Address,

    #[getset(get_copy = "pub")]
    amount: Amount,

    #[getset(get_copy = "pub")]
    sequence: Sequence,

    #[getset(get = "pub")]
    sign_request: SignRequest,
}

#[bon]
impl TransactionEnvelope {
    /// Exactly one input and one output, both at `destination`: the
    /// destination doubles as the signing input address.
    #[builder]
    pub fn transfer(
        destination: Address,
        amount: Amount,
        sequence: Sequence,
        keys: &KeyMaterial,
    ) -> Self {
        let address_bytes = destination.to_bytes();
        let tx = SendTx {
            inputs: vec![TxInput {
                address: address_bytes.clone(),
                amount,
                sequence,
            }],
            outputs: vec![TxOutput {
                address: address_bytes.clone(),
                amount,
            }],
        };
        let priv_accounts = vec![PrivAccount {
            address: address_bytes,
            pub_key: keys.public_key().clone(),
            priv_key: keys.private_key().clone(),
        }];
        Self {
            destination,
            amount,
            sequence,
            sign_request: SignRequest { tx, priv_accounts },
        }
    }

    pub fn hold_request(&self) -> HoldRequest {
        HoldRequest {
            priv_key: self
                .sign_request
                .priv_accounts
                .first()
                .map(|a| a.priv_key.clone())
                .unwrap_or_default(),
            to_address: self.destination.clone(),
            amount: self.amount,
        }
    }
}
