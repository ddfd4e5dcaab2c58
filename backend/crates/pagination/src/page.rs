//! Zero-based page requests.

use std::num::NonZeroU32;
use std::ops::Range;

/// Errors raised when a page request violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be at least 1")]
    ZeroSize,
    /// The requested page size exceeded the caller-supplied maximum.
    #[error("page size {size} exceeds the maximum of {max}")]
    SizeTooLarge {
        /// Requested page size.
        size: u32,
        /// Largest page size the caller accepts.
        max: u32,
    },
}

/// A zero-based page index paired with a non-zero page size.
///
/// ## Invariants
/// - `size` is at least 1.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, PageRequestError};
///
/// let first = PageRequest::first(5).expect("non-zero size");
/// assert_eq!(first.index(), 0);
/// assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::ZeroSize));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    index: u32,
    size: NonZeroU32,
}

impl PageRequest {
    /// Build a page request, rejecting a zero page size.
    pub fn new(index: u32, size: u32) -> Result<Self, PageRequestError> {
        let size = NonZeroU32::new(size).ok_or(PageRequestError::ZeroSize)?;
        Ok(Self { index, size })
    }

    /// Build a page request whose size must not exceed `max_size`.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// let err = PageRequest::bounded(0, 500, 100).expect_err("too large");
    /// assert_eq!(err, PageRequestError::SizeTooLarge { size: 500, max: 100 });
    /// ```
    pub fn bounded(index: u32, size: u32, max_size: u32) -> Result<Self, PageRequestError> {
        if size > max_size {
            return Err(PageRequestError::SizeTooLarge {
                size,
                max: max_size,
            });
        }
        Self::new(index, size)
    }

    /// Build a request for the first page.
    pub fn first(size: u32) -> Result<Self, PageRequestError> {
        Self::new(0, size)
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size.get()
    }

    /// Number of items preceding this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.index) * u64::from(self.size.get())
    }

    /// Range of positions this page covers within a collection of `len`
    /// items. Pages beyond the end yield an empty range.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let page = PageRequest::new(1, 2).expect("valid page");
    /// assert_eq!(page.window(3), 2..3);
    /// assert!(PageRequest::new(5, 2).expect("valid page").window(3).is_empty());
    /// ```
    #[must_use]
    pub fn window(&self, len: usize) -> Range<usize> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(self.size.get()).unwrap_or(usize::MAX);
        let start = offset.min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}
