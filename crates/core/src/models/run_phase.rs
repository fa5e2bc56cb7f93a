/// Process-level progress of a run. Only moves forward; the one self-loop
/// is `AwaitingLiveness` while the gate backs off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
pub enum RunPhase {
    #[default]
    Init,
    AwaitingLiveness,
    Sending,
    Done,
}

impl RunPhase {
    pub fn can_advance_to(self, next: RunPhase) -> bool {
        matches!(
            (self, next),
            (RunPhase::Init, RunPhase::AwaitingLiveness)
                | (RunPhase::AwaitingLiveness, RunPhase::AwaitingLiveness)
                | (RunPhase::AwaitingLiveness, RunPhase::Sending)
                | (RunPhase::Sending, RunPhase::Done)
        )
    }
}
