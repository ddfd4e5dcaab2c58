//! Page request and sort order primitives shared by list endpoints.
//!
//! The crate is framework-free: inbound adapters parse raw query values into
//! [`PageRequest`] and [`SortOrder`], domain services validate them, and
//! outbound adapters translate them into `LIMIT`/`OFFSET` and `ORDER BY`
//! clauses or in-memory slices.
//!
//! Sort orders use the `field,direction` wire syntax, for example
//! `amount,desc`. The direction is optional and defaults to ascending.
//!
//! ```
//! use pagination::{Direction, PageRequest, SortOrder};
//!
//! let page = PageRequest::new(2, 10).expect("valid page request");
//! assert_eq!(page.offset(), 20);
//!
//! let sort: SortOrder<String> = "amount,desc".parse().expect("valid sort");
//! assert_eq!(sort.field(), "amount");
//! assert_eq!(sort.direction(), Direction::Descending);
//! ```

mod page;
mod sort;

pub use page::{PageRequest, PageRequestError};
pub use sort::{Direction, SortOrder, SortParseError};
