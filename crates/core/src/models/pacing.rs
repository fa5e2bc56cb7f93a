use std::time::Duration;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// How transactions are spread over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One send per `1 / transactions_per_second` seconds, never waiting on
    /// earlier sends.
    FixedRate { transactions_per_second: u32 },

    /// One transaction in flight at a time, each awaited until included.
    SequentialConfirm,
}

impl Pacing {
    /// `None` for sequential pacing, which has no timer. Never zero, rates
    /// beyond one per nanosecond tick every nanosecond.
    pub fn tick_interval(&self) -> Option<Duration> {
        match self {
            Pacing::FixedRate {
                transactions_per_second,
            } if *transactions_per_second > 0 => Some(Duration::from_nanos(
                (NANOS_PER_SEC / u64::from(*transactions_per_second)).max(1),
            )),
            _ => None,
        }
    }

    pub fn submit_mode(&self) -> SubmitMode {
        match self {
            Pacing::FixedRate { .. } => SubmitMode::SignThenBroadcast,
            Pacing::SequentialConfirm => SubmitMode::SendAndHold,
        }
    }
}

/// How a single envelope reaches the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SubmitMode {
    /// `signTx` then `broadcastTx`, two calls.
    #[display("sign-then-broadcast")]
    SignThenBroadcast,

    /// One call that returns once the transaction is included.
    #[display("send-and-hold")]
    SendAndHold,
}
