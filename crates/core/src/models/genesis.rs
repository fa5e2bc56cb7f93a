use crate::prelude::*;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GenesisAccount {
    #[getset(get = "pub")]
    address: Address,
}

impl From<Address> for GenesisAccount {
    fn from(address: Address) -> Self {
        Self { address }
    }
}

/// The accounts section of the cluster's bootstrap snapshot. Read once,
/// never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
pub struct Genesis {
    #[getset(get = "pub")]
    accounts: Vec<GenesisAccount>,
}

impl Genesis {
    pub fn new(accounts: impl IntoIterator<Item = impl Into<Address>>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| GenesisAccount::from(a.into()))
                .collect(),
        }
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.accounts.iter().map(GenesisAccount::address)
    }
}
