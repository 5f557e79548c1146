//! Fixed-size pagination over an ordered subset.
//!
//! [`paginate`] slices a subset into pages and clamps a requested page into
//! range, so a stale page index left over from a larger subset heals itself
//! instead of pointing past the end. [`page_controls`] describes the
//! previous/numbered/next controls for the rendered page, and
//! [`resolve_target`] turns an activated control back into a page number.

use std::fmt;
use std::str::FromStr;

/// Number of recipes shown per page.
pub const PAGE_SIZE: usize = 6;

/// One page of a subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on this page. The last page may be shorter than the page size.
    pub items: &'a [T],
    /// The page actually shown after clamping, `None` when the subset is empty.
    pub effective_page: Option<usize>,
    /// Total number of pages, `0` for an empty subset.
    pub page_count: usize,
}

/// Returns the number of pages needed for `len` items.
///
/// A `page_size` of zero is treated as one.
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 { 1 } else { page_size };
    if len % page_size == 0 {
        len / page_size
    } else {
        len / page_size + 1
    }
}

/// Returns the page of `subset` closest to `requested_page`.
///
/// Pages are 1-based. Requests below 1 or above the last page are clamped.
///
/// # Examples
///
/// ```
/// use recipe_shelf::app::paginator::paginate;
///
/// let subset: Vec<u32> = (1..=13).collect();
/// let page = paginate(&subset, 6, 4);
/// assert_eq!(page.page_count, 3);
/// assert_eq!(page.effective_page, Some(3));
/// assert_eq!(page.items, &[13]);
///
/// let empty: [u32; 0] = [];
/// assert_eq!(paginate(&empty, 6, 2).effective_page, None);
/// ```
#[must_use]
pub fn paginate<T>(subset: &[T], page_size: usize, requested_page: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page_count = page_count(subset.len(), page_size);

    if page_count == 0 {
        return Page {
            items: &[],
            effective_page: None,
            page_count,
        };
    }

    let effective_page = requested_page.clamp(1, page_count);
    let start = (effective_page - 1) * page_size;
    let end = (start + page_size).min(subset.len());

    Page {
        items: &subset[start..end],
        effective_page: Some(effective_page),
        page_count,
    }
}

/// What a pagination control points at.
///
/// Parsed from the control's `data-page` attribute: `"prev"`, `"next"` or a
/// decimal page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTarget {
    Prev,
    Next,
    Number(usize),
}

impl fmt::Display for PageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prev => f.write_str("prev"),
            Self::Next => f.write_str("next"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Error returned for a `data-page` value that names no control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePageTargetError(String);

impl fmt::Display for ParsePageTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid page target: {:?}", self.0)
    }
}

impl std::error::Error for ParsePageTargetError {}

impl FromStr for PageTarget {
    type Err = ParsePageTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => other
                .parse::<usize>()
                .map(Self::Number)
                .map_err(|_| ParsePageTargetError(s.to_string())),
        }
    }
}

/// Render metadata for one pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub target: PageTarget,
    /// Activation is ignored.
    pub disabled: bool,
    /// The control for the page being shown.
    pub active: bool,
}

/// Returns the controls for `effective_page` of `page_count` pages.
///
/// Order is previous, one control per page number, next. Empty when there are
/// no pages, in which case pagination is not shown at all.
#[must_use]
pub fn page_controls(effective_page: usize, page_count: usize) -> Vec<PageControl> {
    if page_count == 0 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(page_count + 2);
    controls.push(PageControl {
        target: PageTarget::Prev,
        disabled: effective_page == 1,
        active: false,
    });
    controls.extend((1..=page_count).map(|n| PageControl {
        target: PageTarget::Number(n),
        disabled: false,
        active: n == effective_page,
    }));
    controls.push(PageControl {
        target: PageTarget::Next,
        disabled: effective_page == page_count,
        active: false,
    });
    controls
}

/// Resolves an activated control to the page it leads to.
///
/// Returns `None` when the control is disabled or the page lies outside
/// `1..=page_count`; such activations are ignored.
///
/// # Examples
///
/// ```
/// use recipe_shelf::app::paginator::{resolve_target, PageTarget};
///
/// assert_eq!(resolve_target(PageTarget::Next, 1, 3), Some(2));
/// assert_eq!(resolve_target(PageTarget::Prev, 1, 3), None);
/// assert_eq!(resolve_target(PageTarget::Number(2), 1, 1), None);
/// ```
#[must_use]
pub fn resolve_target(target: PageTarget, current_page: usize, page_count: usize) -> Option<usize> {
    let page = match target {
        PageTarget::Prev => current_page.checked_sub(1)?,
        PageTarget::Next => current_page.checked_add(1)?,
        PageTarget::Number(n) => n,
    };
    (1..=page_count).contains(&page).then_some(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_pages_partition_the_subset() {
        for len in 1..=25_usize {
            let subset: Vec<usize> = (0..len).collect();
            let count = page_count(len, PAGE_SIZE);
            let mut seen = Vec::new();

            for n in 1..=count {
                let page = paginate(&subset, PAGE_SIZE, n);
                assert_eq!(page.effective_page, Some(n));
                let expected_len = if n == count && len % PAGE_SIZE != 0 {
                    len % PAGE_SIZE
                } else {
                    PAGE_SIZE
                };
                assert_eq!(page.items.len(), expected_len, "len {len} page {n}");
                seen.extend_from_slice(page.items);
            }

            assert_eq!(seen, subset);
        }
    }

    #[test]
    fn requests_past_the_end_clamp_to_last_page() {
        let subset: Vec<usize> = (0..13).collect();
        for requested in [3, 4, 50, usize::MAX] {
            let page = paginate(&subset, PAGE_SIZE, requested);
            assert_eq!(page.effective_page, Some(3));
            assert_eq!(page.items, &[12]);
        }
    }

    #[test]
    fn page_zero_clamps_to_first_page() {
        let subset: Vec<usize> = (0..8).collect();
        let page = paginate(&subset, PAGE_SIZE, 0);
        assert_eq!(page.effective_page, Some(1));
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn empty_subset_has_no_pages_and_no_controls() {
        let subset: Vec<usize> = Vec::new();
        for requested in [0, 1, 7] {
            let page = paginate(&subset, PAGE_SIZE, requested);
            assert_eq!(page.page_count, 0);
            assert!(page.items.is_empty());
            assert_eq!(page.effective_page, None);
        }
        assert!(page_controls(1, 0).is_empty());
    }

    #[test]
    fn controls_mark_disabled_and_active_states() {
        let controls = page_controls(3, 3);
        assert_eq!(controls.len(), 5);
        assert_eq!(controls[0].target, PageTarget::Prev);
        assert!(!controls[0].disabled);
        assert!(controls[3].active);
        assert_eq!(controls[3].target, PageTarget::Number(3));
        assert!(controls[4].disabled);

        let single = page_controls(1, 1);
        assert!(single[0].disabled);
        assert!(single[1].active);
        assert!(single[2].disabled);
    }

    #[test]
    fn targets_outside_range_are_ignored() {
        assert_eq!(resolve_target(PageTarget::Prev, 2, 3), Some(1));
        assert_eq!(resolve_target(PageTarget::Next, 3, 3), None);
        assert_eq!(resolve_target(PageTarget::Number(0), 1, 3), None);
        assert_eq!(resolve_target(PageTarget::Number(4), 1, 3), None);
        assert_eq!(resolve_target(PageTarget::Number(3), 1, 3), Some(3));
        assert_eq!(resolve_target(PageTarget::Next, 1, 0), None);
    }

    #[test]
    fn page_target_parses_data_page_values() {
        assert_eq!("prev".parse::<PageTarget>(), Ok(PageTarget::Prev));
        assert_eq!("next".parse::<PageTarget>(), Ok(PageTarget::Next));
        assert_eq!("12".parse::<PageTarget>(), Ok(PageTarget::Number(12)));
        assert!("last".parse::<PageTarget>().is_err());
        assert!("-1".parse::<PageTarget>().is_err());
        assert_eq!(PageTarget::Number(4).to_string(), "4");
    }
}
