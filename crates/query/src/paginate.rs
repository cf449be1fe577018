//! Fixed-size page slicing.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Number of items per listing page. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Items per page on the product listing grid.
    pub const DEFAULT: PageSize = PageSize(NonZeroUsize::new(6).unwrap());

    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `ceil(count / page_size)`; zero when there is nothing to show.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// The 1-indexed `page` of `items`.
///
/// Pages past the end (and page 0) yield an empty slice rather than an error;
/// clamping is up to the caller.
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size.get());
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size.get()).min(items.len());
    &items[start..end]
}
