use crate::prelude::*;

use std::path::Path;

/// Reads the `accounts` of a genesis snapshot. Unknown fields are ignored.
pub fn load_genesis(path: impl AsRef<Path>) -> Result<Genesis, ConfigError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::GenesisUnreadable {
            path: path.to_path_buf(),
            underlying: e.to_string(),
        })?;
    let genesis: Genesis =
        serde_json::from_str(&contents).map_err(|e| ConfigError::GenesisMalformed {
            path: path.to_path_buf(),
            underlying: e.to_string(),
        })?;
    info!(
        "Loaded {} genesis accounts from {}",
        genesis.accounts().len(),
        path.display()
    );
    Ok(genesis)
}
