use crate::prelude::*;

use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every field may be absent; flags and environment
/// variables take precedence over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationFile {
    pub transactions_per_second: Option<u32>,
    pub amount_of_transactions: Option<usize>,
    pub validators: Option<Vec<String>>,
}

impl ConfigurationFile {
    /// A file that cannot be read or parsed is logged and treated as empty.
    pub fn load_or_default(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("No configuration read from {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(configuration) => {
                debug!("Loaded configuration from {}", path.display());
                configuration
            }
            Err(e) => {
                error!("Unable to parse configuration {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
