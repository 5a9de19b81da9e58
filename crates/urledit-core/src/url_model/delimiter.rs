//! Query delimiter (`&` or `;`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character separating successive `name=value` entries of a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QueryDelimiter {
    #[default]
    #[serde(rename = "&")]
    Ampersand,
    #[serde(rename = ";")]
    Semicolon,
}

impl QueryDelimiter {
    pub fn as_char(self) -> char {
        match self {
            QueryDelimiter::Ampersand => '&',
            QueryDelimiter::Semicolon => ';',
        }
    }

    /// The delimiter this one is swapped with.
    pub fn other(self) -> Self {
        match self {
            QueryDelimiter::Ampersand => QueryDelimiter::Semicolon,
            QueryDelimiter::Semicolon => QueryDelimiter::Ampersand,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryDelimiter::Ampersand => "&",
            QueryDelimiter::Semicolon => ";",
        }
    }
}

impl fmt::Display for QueryDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a supported query delimiter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported query delimiter {0:?} (expected \"&\" or \";\")")]
pub struct ParseDelimiterError(pub String);

impl FromStr for QueryDelimiter {
    type Err = ParseDelimiterError;

    /// Accepts the character itself or its name (`amp`, `semicolon`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "&" | "amp" | "ampersand" => Ok(QueryDelimiter::Ampersand),
            ";" | "semi" | "semicolon" => Ok(QueryDelimiter::Semicolon),
            other => Err(ParseDelimiterError(other.to_string())),
        }
    }
}

impl TryFrom<char> for QueryDelimiter {
    type Error = ParseDelimiterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '&' => Ok(QueryDelimiter::Ampersand),
            ';' => Ok(QueryDelimiter::Semicolon),
            other => Err(ParseDelimiterError(other.to_string())),
        }
    }
}
