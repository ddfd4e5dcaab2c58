//! Owner identity attached to every cash card.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Owner::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnerValidationError {
    #[error("owner must not be empty")]
    Empty,
    #[error("owner must not have leading or trailing whitespace")]
    Untrimmed,
}

/// Identity under which a cash card was created.
///
/// Owners come from authenticated principals, never from request bodies.
///
/// ## Invariants
/// - Non-empty and free of surrounding whitespace.
///
/// # Examples
/// ```
/// use cashcard::domain::Owner;
///
/// let owner = Owner::new("sarah").expect("valid owner");
/// assert_eq!(owner.as_ref(), "sarah");
/// assert!(Owner::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Owner(String);

impl Owner {
    /// Validate and construct an owner.
    pub fn new(owner: impl Into<String>) -> Result<Self, OwnerValidationError> {
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(OwnerValidationError::Empty);
        }
        if owner.trim() != owner {
            return Err(OwnerValidationError::Untrimmed);
        }
        Ok(Self(owner))
    }
}

impl AsRef<str> for Owner {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Owner> for String {
    fn from(value: Owner) -> Self {
        value.0
    }
}

impl TryFrom<String> for Owner {
    type Error = OwnerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
