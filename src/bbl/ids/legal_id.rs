use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegalIdError {
    #[error("Legal ID parse error: expected 11 digits, got: {0}")]
    Invalid(String),
}

/// Natural-person tax ID, the customer lookup key. Stored as bare digits;
/// `.`/`-`/space separators are stripped on parse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegalId(String);

impl LegalId {
    pub fn parse(string: String) -> Result<Self> {
        let digits = string
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | ' '))
            .collect::<String>();

        if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
            Err(LegalIdError::Invalid(string))?
        }

        return Ok(Self(digits));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for LegalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
