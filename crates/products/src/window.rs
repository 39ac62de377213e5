//! Windowing over a catalog listing: inclusive index ranges and page/size
//! pagination.
//!
//! Bounds are validated on the raw caller-supplied values before any
//! clamping. An empty listing is rejected by both modes.
//!
//! The catalog hands these functions its listing sorted by id, so positions
//! and pages refer to id order rather than insertion order: after inserting
//! ids 3, 1, 4, 2, page 1 of size 2 is `[1, 2]`, not `[3, 1]`.

use serde::Serialize;

use catalog_core::{DomainError, DomainResult};

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Pagination metadata echoed with a page.
///
/// `size` is the number of items actually returned, not the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub size: usize,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

fn len_i64<T>(items: &[T]) -> i64 {
    i64::try_from(items.len()).unwrap_or(i64::MAX)
}

fn ensure_not_empty<T>(items: &[T]) -> DomainResult<()> {
    if items.is_empty() {
        return Err(DomainError::invalid_argument("no products available"));
    }
    Ok(())
}

/// Items at 1-based positions `start..=end`, both clamped to the listing
/// length.
///
/// A `start` past the end therefore yields the last item alone.
pub fn range<T: Clone>(items: &[T], start: i64, end: i64) -> DomainResult<Vec<T>> {
    if start <= 0 || end < start {
        return Err(DomainError::invalid_argument(format!(
            "invalid range start={start} end={end}: start must be >= 1 and end >= start"
        )));
    }
    ensure_not_empty(items)?;

    let total = len_i64(items);
    let from = usize::try_from(start.min(total) - 1)
        .map_err(|_| DomainError::invalid_argument("range start out of bounds"))?;
    let to = usize::try_from(end.min(total))
        .map_err(|_| DomainError::invalid_argument("range end out of bounds"))?;

    items
        .get(from..to)
        .map(<[T]>::to_vec)
        .ok_or_else(|| DomainError::invalid_argument("range out of bounds"))
}

/// Page `page` (1-based) of `size` items; `size` defaults to
/// [`DEFAULT_PAGE_SIZE`].
///
/// `page <= 0` returns the whole listing as page 1.
pub fn paginate<T: Clone>(items: &[T], page: i64, size: Option<i64>) -> DomainResult<Page<T>> {
    ensure_not_empty(items)?;

    if page <= 0 {
        return Ok(Page {
            items: items.to_vec(),
            meta: PageMeta {
                page: 1,
                size: items.len(),
            },
        });
    }

    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
    let total = len_i64(items);
    let out_of_bounds =
        || DomainError::invalid_argument(format!("page {page} with size {size} is out of bounds"));

    let start = (page - 1).checked_mul(size).ok_or_else(out_of_bounds)?;
    let end = start.checked_add(size).ok_or_else(out_of_bounds)?.min(total);

    if start < 0 || start >= total || end <= 0 || end > total {
        return Err(out_of_bounds());
    }

    let from = usize::try_from(start).map_err(|_| out_of_bounds())?;
    let to = usize::try_from(end).map_err(|_| out_of_bounds())?;
    let slice = items.get(from..to).ok_or_else(out_of_bounds)?.to_vec();

    Ok(Page {
        meta: PageMeta {
            page,
            size: slice.len(),
        },
        items: slice,
    })
}
