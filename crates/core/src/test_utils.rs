use crate::prelude::*;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

pub fn test_keys() -> KeyMaterial {
    KeyMaterial::builder()
        .address("OWN")
        .public_key("PUB")
        .private_key("PRIV")
        .build()
}

/// Scriptable stand-in for a validator's RPC endpoint.
#[derive(Debug, Default)]
pub struct MockValidatorClient {
    /// Consumed front to back, one per probe; once empty every probe
    /// answers up unless built with `down`.
    probe_script: Mutex<VecDeque<bool>>,
    probe_default_down: AtomicBool,
    fail_sign: AtomicBool,
    fail_broadcast: AtomicBool,
    fail_hold: AtomicBool,
    sign_delay: Mutex<Option<Duration>>,

    probes: AtomicUsize,
    signs: AtomicUsize,
    broadcasts: AtomicUsize,
    holds: AtomicUsize,

    signed: Mutex<Vec<SignRequest>>,
    sign_started_at: Mutex<Vec<Instant>>,
    held: Mutex<Vec<HoldRequest>>,
}

impl MockValidatorClient {
    pub fn healthy() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn down() -> Arc<Self> {
        let client = Self::default();
        client.probe_default_down.store(true, Ordering::SeqCst);
        Arc::new(client)
    }

    /// Probe answers in order (`true` = up), then up forever.
    pub fn with_probe_script(script: impl IntoIterator<Item = bool>) -> Arc<Self> {
        let client = Self::default();
        *client.probe_script.lock().unwrap() = script.into_iter().collect();
        Arc::new(client)
    }

    pub fn fail_signing(&self) {
        self.fail_sign.store(true, Ordering::SeqCst);
    }

    /// Every `sign_tx` takes `delay` before answering.
    pub fn slow_signing(&self, delay: Duration) {
        *self.sign_delay.lock().unwrap() = Some(delay);
    }

    pub fn fail_broadcasting(&self) {
        self.fail_broadcast.store(true, Ordering::SeqCst);
    }

    pub fn fail_holding(&self) {
        self.fail_hold.store(true, Ordering::SeqCst);
    }

    pub fn probe_calls(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn sign_calls(&self) -> usize {
        self.signs.load(Ordering::SeqCst)
    }

    pub fn broadcast_calls(&self) -> usize {
        self.broadcasts.load(Ordering::SeqCst)
    }

    pub fn hold_calls(&self) -> usize {
        self.holds.load(Ordering::SeqCst)
    }

    pub fn signed_requests(&self) -> Vec<SignRequest> {
        self.signed.lock().unwrap().clone()
    }

    pub fn sign_started_at(&self) -> Vec<Instant> {
        self.sign_started_at.lock().unwrap().clone()
    }

    pub fn held_requests(&self) -> Vec<HoldRequest> {
        self.held.lock().unwrap().clone()
    }

    fn refused(method: &str) -> RpcError {
        RpcError::Transport {
            url: format!("mock://{method}"),
            underlying: "connection refused".to_owned(),
        }
    }
}

#[async_trait]
impl ValidatorClient for MockValidatorClient {
    async fn probe_liveness(&self) -> Result<(), RpcError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        let up = self
            .probe_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(!self.probe_default_down.load(Ordering::SeqCst));
        if up {
            Ok(())
        } else {
            Err(Self::refused("probe"))
        }
    }

    async fn sign_tx(&self, request: &SignRequest) -> Result<SignedTx, RpcError> {
        self.signs.fetch_add(1, Ordering::SeqCst);
        self.signed.lock().unwrap().push(request.clone());
        self.sign_started_at.lock().unwrap().push(Instant::now());
        let delay = *self.sign_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_sign.load(Ordering::SeqCst) {
            return Err(Self::refused("sign"));
        }
        let sequence = request.tx.inputs.first().map(|i| i.sequence);
        Ok(SignedTx(serde_json::json!({ "signed": sequence })))
    }

    async fn broadcast_tx(&self, signed: &SignedTx) -> Result<Receipt, RpcError> {
        self.broadcasts.fetch_add(1, Ordering::SeqCst);
        if self.fail_broadcast.load(Ordering::SeqCst) {
            return Err(Self::refused("broadcast"));
        }
        Ok(Receipt(serde_json::json!({ "broadcast": signed.0 })))
    }

    async fn send_and_hold(&self, request: &HoldRequest) -> Result<Receipt, RpcError> {
        self.holds.fetch_add(1, Ordering::SeqCst);
        self.held.lock().unwrap().push(request.clone());
        if self.fail_hold.load(Ordering::SeqCst) {
            return Err(Self::refused("hold"));
        }
        Ok(Receipt(serde_json::json!({ "held": request.to_address })))
    }
}
