//! AppId: the numeric application identifier typed by the user.

use std::fmt;
use std::str::FromStr;

/// Why an input was rejected as an AppId.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAppId {
    #[error("app id is empty")]
    Empty,
    #[error("app id {input:?} is not a plain decimal number")]
    NotNumeric { input: String },
}

/// A validated AppId: non-empty, ASCII digits only, kept verbatim.
///
/// Leading zeros are preserved and there is no range limit, so the digits
/// end up in the link exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    /// Validate `input` as a whole-string decimal number.
    ///
    /// Signs, decimal points, exponents, whitespace and non-ASCII digits
    /// are all rejected.
    pub fn parse(input: &str) -> Result<Self, InvalidAppId> {
        if input.is_empty() {
            return Err(InvalidAppId::Empty);
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidAppId::NotNumeric {
                input: input.to_string(),
            });
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppId {
    type Err = InvalidAppId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
