//! Location types and the location-code newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocationCode {
    reason: &'static str,
}

/// A validated short location code (e.g. `"IST"`, `"CDGT2"`).
///
/// Codes are 1 to 16 ASCII alphanumeric characters, stored uppercase.
/// Lowercase input is accepted and normalized, so lookups are
/// case-insensitive from the caller's point of view. This type
/// guarantees that any `LocationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::LocationCode;
///
/// let ist = LocationCode::parse("IST").unwrap();
/// assert_eq!(ist.as_str(), "IST");
///
/// // Lowercase is normalized
/// assert_eq!(LocationCode::parse("ist").unwrap(), ist);
///
/// // Empty and over-long codes are rejected
/// assert!(LocationCode::parse("").is_err());
/// assert!(LocationCode::parse("ABCDEFGHIJKLMNOPQ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode(String);

impl LocationCode {
    /// Maximum code length in characters.
    pub const MAX_LEN: usize = 16;

    /// Parse a location code from a string, normalizing to uppercase.
    ///
    /// The input must be 1 to 16 ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationCode> {
        if s.is_empty() {
            return Err(InvalidLocationCode {
                reason: "must not be empty",
            });
        }

        if s.len() > Self::MAX_LEN {
            return Err(InvalidLocationCode {
                reason: "must be at most 16 characters",
            });
        }

        for b in s.bytes() {
            if !b.is_ascii_alphanumeric() {
                return Err(InvalidLocationCode {
                    reason: "must be ASCII letters and digits only",
                });
            }
        }

        Ok(LocationCode(s.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocationCode {
    type Error = InvalidLocationCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LocationCode::parse(&s)
    }
}

impl From<LocationCode> for String {
    fn from(code: LocationCode) -> String {
        code.0
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identity of a location record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A place in the transport network.
///
/// Code uniqueness is enforced by the store at network-construction
/// time; the search core assumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

impl Location {
    /// Create a new location.
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
        code: LocationCode,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            city: city.into(),
            code,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid code strings: 1-16 alphanumerics.
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9]{1,16}").unwrap()
    }

    proptest! {
        /// Any valid code parses, and parsing is idempotent under
        /// case normalization.
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            let code = LocationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
            prop_assert_eq!(LocationCode::parse(code.as_str()).unwrap(), code);
        }

        /// Over-long strings are always rejected.
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{17,32}") {
            prop_assert!(LocationCode::parse(&s).is_err());
        }

        /// Strings containing a non-alphanumeric byte are rejected.
        #[test]
        fn punctuation_rejected(s in "[A-Z]{0,7}[ \\-_.][A-Z]{0,8}") {
            prop_assert!(LocationCode::parse(&s).is_err());
        }
    }
}
