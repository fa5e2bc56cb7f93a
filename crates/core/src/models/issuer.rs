use crate::prelude::*;

/// Builds envelopes and hands them to a validator. Owns the nonce ledger,
/// so every sequence number of the run passes through here.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Issuer {
    #[getset(get = "pub")]
    pub(crate) nonce_ledger: NonceLedger,

    #[getset(get = "pub")]
    pub(crate) key_material: KeyMaterial,

    #[getset(get_copy = "pub")]
    pub(crate) submit_mode: SubmitMode,
}

/// A validator accepted the transaction.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Confirmation {
    #[getset(get = "pub")]
    pub(crate) validator: String,

    #[getset(get_copy = "pub")]
    pub(crate) sequence: Sequence,

    #[getset(get = "pub")]
    pub(crate) receipt: Receipt,
}
