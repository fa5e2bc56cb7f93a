use crate::prelude::*;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

pub const DEFAULT_RPC_PORT: u16 = 1337;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const METHOD_BLOCKCHAIN_INFO: &str = "burrow.getBlockchainInfo";
const METHOD_SIGN_TX: &str = "burrow.signTx";
const METHOD_BROADCAST_TX: &str = "burrow.broadcastTx";
const METHOD_SEND_AND_HOLD: &str = "burrow.sendAndHold";

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a, P> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<R> {
    result: Option<R>,
    error: Option<JsonRpcErrorObject>,
}

/// JSON-RPC 2.0 over HTTP to a validator's `/rpc` endpoint.
#[derive(Debug, Clone, Getters)]
pub struct JsonRpcClient {
    #[getset(get = "pub")]
    url: Url,
    http: reqwest::Client,
    next_id: Arc<AtomicU64>,
}

impl JsonRpcClient {
    pub fn new(url: Url) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            url,
            http,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// `http://{host}:{port}/rpc`
    pub fn rpc_url(host: &str, port: u16) -> Result<Url, ConfigError> {
        Url::parse(&format!("http://{host}:{port}/rpc")).map_err(|e| {
            ConfigError::ValidatorAddressInvalid {
                address: host.to_owned(),
                underlying: e.to_string(),
            }
        })
    }

    pub fn for_host(host: &str, port: u16) -> Result<Self, ConfigError> {
        Self::rpc_url(host, port).map(Self::new)
    }

    fn request<'a, P>(&self, method: &'a str, params: P) -> JsonRpcRequest<'a, P> {
        JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        }
    }

    async fn call<P, R>(&self, method: &str, params: P) -> Result<R, RpcError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let request = self.request(method, params);
        let response = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::Transport {
                url: self.url.to_string(),
                underlying: e.to_debug_string(),
            })?;
        let body = response
            .json::<JsonRpcResponse<R>>()
            .await
            .map_err(|e| RpcError::Decode {
                method: method.to_owned(),
                underlying: e.to_debug_string(),
            })?;
        into_result(method, body)
    }
}

fn into_result<R>(method: &str, response: JsonRpcResponse<R>) -> Result<R, RpcError> {
    if let Some(error) = response.error {
        return Err(RpcError::Remote {
            method: method.to_owned(),
            code: error.code,
            message: error.message,
        });
    }
    response.result.ok_or_else(|| RpcError::MissingResult {
        method: method.to_owned(),
    })
}

#[async_trait]
impl ValidatorClient for JsonRpcClient {
    async fn probe_liveness(&self) -> Result<(), RpcError> {
        self.call::<_, serde_json::Value>(METHOD_BLOCKCHAIN_INFO, serde_json::json!({}))
            .await
            .map(|_| ())
    }

    async fn sign_tx(&self, request: &SignRequest) -> Result<SignedTx, RpcError> {
        let result: serde_json::Value = self.call(METHOD_SIGN_TX, request).await?;
        // The signed transaction sits under `tx`, next to signing metadata.
        let signed = match result.get("tx") {
            Some(tx) => tx.clone(),
            None => result,
        };
        Ok(SignedTx(signed))
    }

    async fn broadcast_tx(&self, signed: &SignedTx) -> Result<Receipt, RpcError> {
        self.call(METHOD_BROADCAST_TX, serde_json::json!({ "tx": signed }))
            .await
            .map(Receipt)
    }

    async fn send_and_hold(&self, request: &HoldRequest) -> Result<Receipt, RpcError> {
        self.call(METHOD_SEND_AND_HOLD, request).await.map(Receipt)
    }
}
