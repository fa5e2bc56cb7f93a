mod cli_args;
mod cli_error;
mod configuration_file;
mod validator_hosts;

pub use cli_args::*;
pub use cli_error::*;
pub use configuration_file::*;
pub use validator_hosts::*;
