mod logic;
mod models;

#[cfg(test)]
mod test_utils;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Third Party Crates
    pub use async_trait::async_trait;
    pub use bon::{bon, Builder};
    pub use derive_more::{AsRef, From};
    pub use getset::{CopyGetters, Getters};
    pub use log::{debug, error, info, warn};
    pub use url::Url;
}
