//! Typed photo identifier.
//!
//! [`PhotoId`] is a newtype over `u64` so a photo id cannot be confused with a
//! count or an index into the store's backing vector. Ids are always positive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Unique identifier for a photo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(NonZeroU64);

impl PhotoId {
    /// The first id handed out by a fresh store.
    pub const FIRST: PhotoId = PhotoId(NonZeroU64::MIN);

    /// Wrap a raw value, returning `None` for zero.
    #[must_use]
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Return the raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The id that follows this one, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a path segment is not a valid [`PhotoId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePhotoIdError {
    #[error("photo id must be an integer, got '{0}'")]
    NotInteger(String),
    #[error("photo id must be a positive integer")]
    NotPositive,
    #[error("photo id {0} is out of range")]
    OutOfRange(String),
}

impl FromStr for PhotoId {
    type Err = ParsePhotoIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // "-3" is an integer, so it reports as non-positive rather than
        // non-numeric.
        let is_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
        if let Some(magnitude) = s.strip_prefix('-') {
            return Err(if is_digits(magnitude) {
                ParsePhotoIdError::NotPositive
            } else {
                ParsePhotoIdError::NotInteger(s.to_string())
            });
        }
        if !is_digits(s) {
            return Err(ParsePhotoIdError::NotInteger(s.to_string()));
        }
        let value: u64 = s
            .parse()
            .map_err(|_| ParsePhotoIdError::OutOfRange(s.to_string()))?;
        PhotoId::new(value).ok_or(ParsePhotoIdError::NotPositive)
    }
}

impl From<PhotoId> for u64 {
    fn from(id: PhotoId) -> Self {
        id.get()
    }
}
