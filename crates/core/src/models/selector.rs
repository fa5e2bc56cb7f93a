use crate::prelude::*;

use rand_chacha::ChaCha8Rng;

/// Draws validators and destination accounts uniformly at random, never
/// handing out the local validator or our own account.
///
/// Self-matching entries are filtered out once, up front, so a draw is a
/// single index into a non-empty candidate list.
#[derive(Debug, Clone, Getters)]
pub struct Selector {
    /// Validators other than the local host.
    #[getset(get = "pub")]
    pub(crate) validator_candidates: Vec<ValidatorEndpoint>,

    /// Genesis accounts, in snapshot order.
    #[getset(get = "pub")]
    pub(crate) accounts: Vec<Address>,

    pub(crate) rng: ChaCha8Rng,
}
