//! User-supplied account references
//!
//! A token is either a 1-based position in some numbered view or a full
//! account UUID. Integer parsing always wins: an all-digit token is a
//! position even when it would also read as a simple-form UUID.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::result::{Error, Result};

/// Parsed account reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountToken {
    /// Position in a numbered view (may be out of range)
    SequenceNumber(i64),
    /// Exact account id
    AccountId(Uuid),
}

impl AccountToken {
    /// Parse a raw token: integer first, then UUID, otherwise malformed
    ///
    /// Any optionally signed run of ASCII digits is a sequence number, even
    /// one too long for `i64` (saturated) or one that would also read as a
    /// simple-form UUID.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let number = trimmed.parse::<i64>().unwrap_or(if trimmed.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            });
            return Ok(AccountToken::SequenceNumber(number));
        }
        if let Ok(id) = Uuid::parse_str(trimmed) {
            return Ok(AccountToken::AccountId(id));
        }
        Err(Error::malformed_token(raw))
    }

    /// Position as a usize index key, if it can name any entry at all
    pub fn sequence_key(&self) -> Option<usize> {
        match self {
            AccountToken::SequenceNumber(n) if *n >= 1 => usize::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl FromStr for AccountToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AccountToken::parse(s)
    }
}

impl fmt::Display for AccountToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountToken::SequenceNumber(n) => write!(f, "#{}", n),
            AccountToken::AccountId(id) => write!(f, "{}", id),
        }
    }
}
