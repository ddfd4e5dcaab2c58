//! Sort orders expressed as `field,direction`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised while parsing a `field,direction` sort expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortParseError {
    /// The expression or its field part was blank.
    #[error("sort expression must name a field")]
    Empty,
    /// The field is not one the caller can sort by.
    #[error("unsupported sort field: {field}")]
    UnknownField {
        /// Field name as supplied.
        field: String,
    },
    /// The direction was neither `asc` nor `desc`.
    #[error("sort direction must be asc or desc, got {direction}")]
    UnknownDirection {
        /// Direction as supplied.
        direction: String,
    },
    /// More than one comma was present.
    #[error("sort expression must have the form field[,asc|desc]")]
    Malformed,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Smallest first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc")]
    Descending,
}

impl Direction {
    /// Orient an ascending comparison result according to this direction.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use pagination::Direction;
    ///
    /// assert_eq!(Direction::Descending.orient(Ordering::Less), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Wire representation: `asc` or `desc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("asc") {
            Ok(Self::Ascending)
        } else if trimmed.eq_ignore_ascii_case("desc") {
            Ok(Self::Descending)
        } else {
            Err(SortParseError::UnknownDirection {
                direction: trimmed.to_owned(),
            })
        }
    }
}

/// A single sort key over a caller-defined field type.
///
/// `F` is usually a closed enum of sortable columns so that unknown fields
/// are rejected while parsing rather than when the query runs.
///
/// # Examples
/// ```
/// use pagination::{Direction, SortOrder};
///
/// let sort: SortOrder<String> = "amount".parse().expect("valid sort");
/// assert_eq!(sort.direction(), Direction::Ascending);
/// assert_eq!(sort.to_string(), "amount,asc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder<F> {
    field: F,
    direction: Direction,
}

impl<F> SortOrder<F> {
    /// Pair a field with a direction.
    pub const fn new(field: F, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Sort ascending by `field`.
    pub const fn ascending(field: F) -> Self {
        Self::new(field, Direction::Ascending)
    }

    /// Sort descending by `field`.
    pub const fn descending(field: F) -> Self {
        Self::new(field, Direction::Descending)
    }

    /// Field being sorted on.
    pub const fn field(&self) -> &F {
        &self.field
    }

    /// Direction of the sort.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl<F: fmt::Display> fmt::Display for SortOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

impl<F: FromStr> FromStr for SortOrder<F> {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let raw_field = parts.next().map(str::trim).unwrap_or_default();
        if raw_field.is_empty() {
            return Err(SortParseError::Empty);
        }
        let direction = match parts.next() {
            Some(raw) => raw.parse()?,
            None => Direction::Ascending,
        };
        if parts.next().is_some() {
            return Err(SortParseError::Malformed);
        }
        let field = raw_field
            .parse::<F>()
            .map_err(|_| SortParseError::UnknownField {
                field: raw_field.to_owned(),
            })?;
        Ok(Self { field, direction })
    }
}
