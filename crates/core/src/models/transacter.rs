use getset::MutGetters;

use crate::prelude::*;

/// The load generator for one run: validators, selection, issuance and
/// pacing, plus where in the run we are.
#[derive(Debug, Getters, CopyGetters, MutGetters)]
pub struct Transacter {
    #[getset(get = "pub")]
    pub(crate) validators: Vec<ValidatorEndpoint>,

    #[getset(get = "pub")]
    pub(crate) gate: LivenessGate,

    #[getset(get = "pub", get_mut = "pub")]
    pub(crate) selector: Selector,

    #[getset(get = "pub")]
    pub(crate) issuer: Issuer,

    #[getset(get_copy = "pub")]
    pub(crate) pacing: Pacing,

    #[getset(get_copy = "pub")]
    pub(crate) amount_of_transactions: usize,

    #[getset(get_copy = "pub")]
    pub(crate) amount_per_transaction: Amount,

    #[getset(get = "pub")]
    pub(crate) own_address: Address,

    #[getset(get_copy = "pub")]
    pub(crate) phase: RunPhase,

    /// Every phase entered so far, starting at `Init`.
    #[getset(get = "pub")]
    pub(crate) phase_history: Vec<RunPhase>,
}
