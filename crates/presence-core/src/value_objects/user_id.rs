//! User ID - fixed-length opaque user identifier
//!
//! Platform identifiers are 26-character lowercase alphanumeric tokens.
//! Every entry point validates the shape before touching any state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Required identifier length
pub const USER_ID_LEN: usize = 26;

/// Opaque 26-character user identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    /// Parse and validate an identifier from a string slice
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        if s.len() != USER_ID_LEN {
            return Err(UserIdParseError::WrongLength(s.len()));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(UserIdParseError::InvalidCharacter);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("user id must be {USER_ID_LEN} characters, got {0}")]
    WrongLength(usize),

    #[error("user id may only contain lowercase letters and digits")]
    InvalidCharacter,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserId::parse(&s).map_err(serde::de::Error::custom)
    }
}
