use crate::prelude::*;

impl Transacter {
    /// `Init → AwaitingLiveness → Sending → Done`, re-entering
    /// `AwaitingLiveness` on every liveness retry. Send failures are
    /// counted in the report; only configuration problems end the run
    /// early. A transacter runs once, later calls fail with
    /// `Error::PhaseOutOfOrder`.
    pub async fn run(&mut self) -> Result<RunReport, Error> {
        self.advance_to(RunPhase::AwaitingLiveness)?;
        loop {
            match self.gate.check_once(&self.validators).await {
                Ok(()) => break,
                Err(Error::Liveness(e)) => {
                    self.gate.back_off(&e).await;
                    self.advance_to(RunPhase::AwaitingLiveness)?;
                }
                Err(fatal) => return Err(fatal),
            }
        }

        self.advance_to(RunPhase::Sending)?;
        info!("Sending transactions..");
        let report = match self.pacing.tick_interval() {
            Some(interval) => self.send_at_fixed_rate(interval).await,
            None => self.send_sequentially().await,
        };

        self.advance_to(RunPhase::Done)?;
        info!("Finished sending transactions ({report})");
        Ok(report)
    }

    fn advance_to(&mut self, next: RunPhase) -> Result<(), Error> {
        if !self.phase.can_advance_to(next) {
            return Err(Error::PhaseOutOfOrder {
                from: self.phase,
                to: next,
            });
        }
        debug!("Phase {} -> {next}", self.phase);
        self.phase = next;
        self.phase_history.push(next);
        Ok(())
    }
}
