//! Context-menu actions on the query parameters of the current URL.

use std::fmt;
use std::str::FromStr;

use crate::url_model::QueryDelimiter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    EncodeParams,
    DecodeParams,
    /// Replace `&` with `;`.
    ReplaceAmpersand,
    /// Replace `;` with `&`.
    ReplaceSemicolon,
}

impl EditorAction {
    pub const ALL: [EditorAction; 4] = [
        EditorAction::EncodeParams,
        EditorAction::DecodeParams,
        EditorAction::ReplaceAmpersand,
        EditorAction::ReplaceSemicolon,
    ];

    /// Stable identifier, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            EditorAction::EncodeParams => "encode-params",
            EditorAction::DecodeParams => "decode-params",
            EditorAction::ReplaceAmpersand => "replace-amp",
            EditorAction::ReplaceSemicolon => "replace-semicolon",
        }
    }

    /// Label reported to analytics.
    pub fn label(self) -> &'static str {
        match self {
            EditorAction::EncodeParams => "Encode parameters",
            EditorAction::DecodeParams => "Decode parameters",
            EditorAction::ReplaceAmpersand => "Replace & with ;",
            EditorAction::ReplaceSemicolon => "Replace ; with &",
        }
    }

    /// Target delimiter for the replace actions.
    pub fn delimiter(self) -> Option<QueryDelimiter> {
        match self {
            EditorAction::ReplaceAmpersand => Some(QueryDelimiter::Semicolon),
            EditorAction::ReplaceSemicolon => Some(QueryDelimiter::Ampersand),
            EditorAction::EncodeParams | EditorAction::DecodeParams => None,
        }
    }
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown editor action: {0}")]
pub struct ParseActionError(pub String);

impl FromStr for EditorAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditorAction::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for action in EditorAction::ALL {
            assert_eq!(action.name().parse::<EditorAction>(), Ok(action));
        }
    }

    #[test]
    fn unknown_name() {
        let err = "reverse".parse::<EditorAction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown editor action: reverse");
    }

    #[test]
    fn replace_targets() {
        assert_eq!(
            EditorAction::ReplaceAmpersand.delimiter(),
            Some(QueryDelimiter::Semicolon)
        );
        assert_eq!(
            EditorAction::ReplaceSemicolon.delimiter(),
            Some(QueryDelimiter::Ampersand)
        );
        assert_eq!(EditorAction::EncodeParams.delimiter(), None);
    }
}
