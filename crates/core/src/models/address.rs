use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// An account address as it appears in the genesis snapshot and key file.
///
/// Kept as the textual form; the wire envelope carries its UTF-8 bytes.
#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    From,
    derive_more::Debug,
    derive_more::Display,
)]
#[debug("{:?}", self.0)]
#[display("{}", self.0)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
