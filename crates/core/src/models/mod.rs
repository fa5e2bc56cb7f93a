mod address;
mod envelope;
mod error;
mod genesis;
mod issuer;
mod key_material;
mod nonce_ledger;
mod pacing;
mod run_config;
mod run_phase;
mod run_report;
mod selector;
mod transacter;
mod traits;
mod validator_client;
mod validator_endpoint;

pub use address::*;
pub use envelope::*;
pub use error::*;
pub use genesis::*;
pub use issuer::*;
pub use key_material::*;
pub use nonce_ledger::*;
pub use pacing::*;
pub use run_config::*;
pub use run_phase::*;
pub use run_report::*;
pub use selector::*;
pub use transacter::*;
pub use traits::*;
pub use validator_client::*;
pub use validator_endpoint::*;
