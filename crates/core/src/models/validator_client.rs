use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// A transaction as returned by the signing endpoint, ready to broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedTx(pub serde_json::Value);

/// Whatever the validator answered to a broadcast or hold call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receipt(pub serde_json::Value);

/// Connection to a single validator, owned by the RPC layer.
#[async_trait]
pub trait ValidatorClient: Send + Sync {
    /// Succeeds when the validator answers.
    async fn probe_liveness(&self) -> Result<(), RpcError>;

    async fn sign_tx(&self, request: &SignRequest) -> Result<SignedTx, RpcError>;

    async fn broadcast_tx(&self, signed: &SignedTx) -> Result<Receipt, RpcError>;

    /// Signs, broadcasts and returns only once the transaction is included.
    async fn send_and_hold(&self, request: &HoldRequest) -> Result<Receipt, RpcError>;
}
