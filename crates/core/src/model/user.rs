use std::fmt;

use thiserror::Error;

/// Longest user identifier accepted on submission, in characters.
pub const MAX_USER_NAME_CHARS: usize = 128;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserNameError {
    #[error("user cannot be empty")]
    Empty,

    #[error("user must be at most {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

/// Identifier of the person submitting answers.
///
/// The value is stored exactly as given; only blank and oversized names are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// # Errors
    ///
    /// Returns `UserNameError` if the name is blank or longer than
    /// `MAX_USER_NAME_CHARS`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, UserNameError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UserNameError::Empty);
        }
        let len = raw.chars().count();
        if len > MAX_USER_NAME_CHARS {
            return Err(UserNameError::TooLong {
                len,
                max: MAX_USER_NAME_CHARS,
            });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
