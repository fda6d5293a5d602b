use std::{fmt, str::FromStr};

use thiserror::Error;

/// A bcrypt password hash.
///
/// Parsing from a string hashes the plaintext; the hash itself
/// is only reconstructed from storage via `From<String>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password is too short")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    pub const fn min_len() -> usize {
        8
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }
}

impl From<String> for Password {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.len() < Password::min_len() {
            return Err(ParseError::TooShort);
        }
        let res = Self(pwhash::bcrypt::hash(password)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
