/// Per-run tally of send outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("dispatched: {dispatched}, confirmed: {confirmed}, failed: {failed}")]
pub struct RunReport {
    pub dispatched: usize,
    pub confirmed: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn record<T, E>(&mut self, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => self.confirmed += 1,
            Err(_) => self.failed += 1,
        }
    }
}
