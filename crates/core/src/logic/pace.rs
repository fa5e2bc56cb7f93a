use crate::prelude::*;

use std::time::Duration;
use tokio::task::JoinSet;

impl Transacter {
    /// Fires one send per tick until `amount_of_transactions` have gone out,
    /// then stops the timer. Sends run detached, so a slow validator never
    /// delays the next tick; they are only awaited after the last tick to
    /// complete the report.
    pub(crate) async fn send_at_fixed_rate(&mut self, interval: Duration) -> RunReport {
        let mode = self.issuer.submit_mode();
        let mut report = RunReport::default();
        let mut in_flight = JoinSet::new();
        let mut ticker = tokio::time::interval(interval);

        while report.dispatched < self.amount_of_transactions {
            ticker.tick().await;
            info!("Tx {}", report.dispatched);
            report.dispatched += 1;
            match self.next_transaction() {
                Ok((validator, envelope)) => {
                    in_flight.spawn(async move { submit(&validator, &envelope, mode).await });
                }
                Err(e) => {
                    error!("Unable to pick a destination: {e}");
                    report.failed += 1;
                }
            }
        }
        drop(ticker);
        debug!(
            "Dispatched {} transactions, waiting for {} in flight",
            report.dispatched,
            in_flight.len()
        );

        while let Some(joined) = in_flight.join_next().await {
            match joined {
                Ok(outcome) => report.record(&outcome),
                Err(e) => {
                    error!("Send task did not complete: {e}");
                    report.failed += 1;
                }
            }
        }
        report
    }

    /// Awaits each transaction before building the next. Failures are
    /// logged and counted, never fatal.
    pub(crate) async fn send_sequentially(&mut self) -> RunReport {
        let mode = self.issuer.submit_mode();
        let mut report = RunReport::default();

        for index in 0..self.amount_of_transactions {
            info!("Tx {index}");
            report.dispatched += 1;
            let outcome = match self.next_transaction() {
                Ok((validator, envelope)) => submit(&validator, &envelope, mode)
                    .await
                    .map(|_| ())
                    .map_err(|_| ()),
                Err(e) => {
                    error!("Unable to pick a destination: {e}");
                    Err(())
                }
            };
            report.record(&outcome);
        }
        report
    }

    /// Picks validator and destination and builds the envelope, consuming
    /// its sequence number. Must stay synchronous so no other send can
    /// interleave between allocation and construction.
    fn next_transaction(
        &mut self,
    ) -> Result<(ValidatorEndpoint, TransactionEnvelope), SelectionError> {
        let destination = self.selector.pick_destination(&self.own_address)?;
        let validator = self.selector.pick_validator();
        let envelope = self.issuer.prepare(destination, self.amount_per_transaction);
        Ok((validator, envelope))
    }
}
