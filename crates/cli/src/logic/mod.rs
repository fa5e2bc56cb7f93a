mod init_logging;
mod resolve_config;
mod run;

pub use init_logging::*;
pub use resolve_config::*;
pub use run::*;
