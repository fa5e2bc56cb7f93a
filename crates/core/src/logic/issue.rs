use crate::prelude::*;

impl Issuer {
    pub fn new(key_material: KeyMaterial, submit_mode: SubmitMode) -> Self {
        Self {
            nonce_ledger: NonceLedger::new(),
            key_material,
            submit_mode,
        }
    }

    /// Builds the envelope and consumes its sequence number right away, so
    /// a send that later fails still uses up its sequence.
    pub fn prepare(&mut self, destination: Address, amount: Amount) -> TransactionEnvelope {
        let sequence = self.nonce_ledger.next_sequence(&destination);
        let envelope = TransactionEnvelope::transfer()
            .destination(destination)
            .amount(amount)
            .sequence(sequence)
            .keys(&self.key_material)
            .call();
        self.nonce_ledger.advance(envelope.destination());
        debug!("Prepared {envelope}");
        envelope
    }

    pub async fn send_one(
        &mut self,
        validator: &ValidatorEndpoint,
        destination: Address,
        amount: Amount,
    ) -> Result<Confirmation, SendError> {
        let envelope = self.prepare(destination, amount);
        submit(validator, &envelope, self.submit_mode).await
    }
}

/// Sends a prepared envelope. Takes no ledger, so it can run detached from
/// the issuer while later envelopes are being built.
pub async fn submit(
    validator: &ValidatorEndpoint,
    envelope: &TransactionEnvelope,
    mode: SubmitMode,
) -> Result<Confirmation, SendError> {
    let outcome = match mode {
        SubmitMode::SignThenBroadcast => sign_then_broadcast(validator, envelope).await,
        SubmitMode::SendAndHold => send_and_hold(validator, envelope).await,
    };
    match outcome {
        Ok(receipt) => {
            info!(
                "[RESPONSE] {} accepted by {}: {:?}",
                envelope,
                validator.address(),
                receipt
            );
            Ok(Confirmation {
                validator: validator.address().clone(),
                sequence: envelope.sequence(),
                receipt,
            })
        }
        Err(e) => {
            warn!("[ERROR] {} via {}: {e}", envelope, validator.address());
            Err(e)
        }
    }
}

async fn sign_then_broadcast(
    validator: &ValidatorEndpoint,
    envelope: &TransactionEnvelope,
) -> Result<Receipt, SendError> {
    let client = validator.client();
    debug!("Sending tx {envelope} to {} for signing", validator.address());
    let signed = client
        .sign_tx(envelope.sign_request())
        .await
        .map_err(|e| SendError::new(SendPhase::Sign, e))?;
    debug!("Signed {envelope}, broadcasting");
    client
        .broadcast_tx(&signed)
        .await
        .map_err(|e| SendError::new(SendPhase::Broadcast, e))
}

async fn send_and_hold(
    validator: &ValidatorEndpoint,
    envelope: &TransactionEnvelope,
) -> Result<Receipt, SendError> {
    debug!("Sending {envelope} to {} and holding", validator.address());
    validator
        .client()
        .send_and_hold(&envelope.hold_request())
        .await
        .map_err(|e| SendError::new(SendPhase::Hold, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn sign_then_broadcast_calls_both_phases() {
        let client = MockValidatorClient::healthy();
        let validator = ValidatorEndpoint::new("v1", client.clone());
        let mut issuer = Issuer::new(test_keys(), SubmitMode::SignThenBroadcast);

        let confirmation = issuer
            .send_one(&validator, Address::from("A"), 1)
            .await
            .unwrap();

        assert_eq!(confirmation.validator(), "v1");
        assert_eq!(confirmation.sequence(), 1);
        assert_eq!(client.sign_calls(), 1);
        assert_eq!(client.broadcast_calls(), 1);
        assert_eq!(client.hold_calls(), 0);
        let signed = client.signed_requests();
        assert_eq!(signed[0].tx.inputs[0].address, b"A".to_vec());
        assert_eq!(signed[0].tx.inputs[0].sequence, 1);
    }

    #[tokio::test]
    async fn sign_failure_skips_broadcast_and_still_consumes_sequence() {
        let client = MockValidatorClient::healthy();
        client.fail_signing();
        let validator = ValidatorEndpoint::new("v1", client.clone());
        let mut issuer = Issuer::new(test_keys(), SubmitMode::SignThenBroadcast);
        let destination = Address::from("A");

        let err = issuer
            .send_one(&validator, destination.clone(), 1)
            .await
            .unwrap_err();

        assert_eq!(err.phase, SendPhase::Sign);
        assert_eq!(client.broadcast_calls(), 0);
        assert_eq!(issuer.nonce_ledger().peek(&destination), Some(2));
    }

    #[tokio::test]
    async fn broadcast_failure_is_reported_as_broadcast_phase() {
        let client = MockValidatorClient::healthy();
        client.fail_broadcasting();
        let validator = ValidatorEndpoint::new("v1", client.clone());
        let mut issuer = Issuer::new(test_keys(), SubmitMode::SignThenBroadcast);

        let err = issuer
            .send_one(&validator, Address::from("A"), 1)
            .await
            .unwrap_err();

        assert_eq!(err.phase, SendPhase::Broadcast);
        assert_eq!(client.sign_calls(), 1);
    }

    #[tokio::test]
    async fn send_and_hold_uses_single_call() {
        let client = MockValidatorClient::healthy();
        let validator = ValidatorEndpoint::new("v1", client.clone());
        let mut issuer = Issuer::new(test_keys(), SubmitMode::SendAndHold);

        issuer
            .send_one(&validator, Address::from("A"), 5)
            .await
            .unwrap();

        assert_eq!(client.hold_calls(), 1);
        assert_eq!(client.sign_calls(), 0);
        let held = client.held_requests();
        assert_eq!(held[0].to_address, Address::from("A"));
        assert_eq!(held[0].amount, 5);
        assert_eq!(held[0].priv_key, "PRIV");
    }

    #[tokio::test]
    async fn hold_failure_is_reported_as_hold_phase() {
        let client = MockValidatorClient::healthy();
        client.fail_holding();
        let validator = ValidatorEndpoint::new("v1", client.clone());
        let mut issuer = Issuer::new(test_keys(), SubmitMode::SendAndHold);

        let err = issuer
            .send_one(&validator, Address::from("A"), 1)
            .await
            .unwrap_err();
        assert_eq!(err.phase, SendPhase::Hold);
    }

    #[test]
    fn consecutive_envelopes_for_same_input_get_consecutive_sequences() {
        let mut issuer = Issuer::new(test_keys(), SubmitMode::SignThenBroadcast);
        let a = Address::from("A");
        let sequences = (0..5)
            .map(|_| issuer.prepare(a.clone(), 1).sequence())
            .collect::<Vec<_>>();
        assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
        assert_eq!(issuer.nonce_ledger().peek(&a), Some(6));
    }
}
