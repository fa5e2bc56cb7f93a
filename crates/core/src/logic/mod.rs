mod issue;
mod json_rpc_client;
mod liveness_gate;
mod load_genesis;
mod load_key_material;
mod pace;
mod select;
mod transacter;

pub use issue::*;
pub use json_rpc_client::*;
pub use liveness_gate::*;
pub use load_genesis::*;
pub use load_key_material::*;

