use crate::prelude::*;

/// The local signing identity: own address plus the key pair, in the
/// textual form the validator's signing endpoint expects.
#[derive(Clone, PartialEq, Eq, Getters, Builder, derive_more::Debug)]
pub struct KeyMaterial {
    #[getset(get = "pub")]
    #[builder(into)]
    address: Address,

    #[getset(get = "pub")]
    #[builder(into)]
    public_key: String,

    #[getset(get = "pub")]
    #[builder(into)]
    #[debug(skip)]
    private_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_private_key() {
        let keys = KeyMaterial::builder()
            .address("OWN")
            .public_key("PUB")
            .private_key("SECRET")
            .build();
        let debug = format!("{keys:?}");
        assert!(debug.contains("PUB"));
        assert!(!debug.contains("SECRET"));
    }
}
