//! Page metadata and offset math for limit/offset paging.
//!
//! The store side runs exactly one COUNT and one bounded fetch per page; this
//! module owns everything around those two queries: clamping the requested
//! page, computing the OFFSET, and assembling the metadata the client needs
//! to render pager controls.

use serde::Serialize;

/// Clamp a 1-based page number. Zero and negative requests behave exactly
/// like page 1; they never error.
pub fn clamp_page(page_number: i64) -> i64 {
    page_number.max(1)
}

/// The OFFSET to use when fetching the given (already clamped) page.
/// Saturates instead of overflowing, so an absurd page number from a query
/// string still produces a valid past-the-end offset.
pub fn offset(page_number: i64, page_size: i64) -> i64 {
    (clamp_page(page_number) - 1).saturating_mul(page_size)
}

/// One materialized page of an ordered result set, plus pager metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this page was fetched for.
    pub page_number: i64,
    pub page_size: i64,
    /// Total matching items across all pages.
    pub total_items: i64,
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Assemble a page from an already-bounded fetch and a total count.
    ///
    /// A page past the end carries an empty item list but still-valid
    /// metadata. `page_size` must be positive.
    pub fn assemble(items: Vec<T>, page_number: i64, page_size: i64, total_items: i64) -> Self {
        let page_number = clamp_page(page_number);
        let total_pages = (total_items + page_size - 1) / page_size;
        Page {
            has_previous: page_number > 1,
            has_next: page_number < total_pages,
            items,
            page_number,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slice a realized set the way the store's bounded fetch would.
    fn fetch_page(rows: &[i64], page_number: i64, page_size: i64) -> Page<i64> {
        let start = offset(page_number, page_size).min(rows.len() as i64) as usize;
        let end = (start + page_size as usize).min(rows.len());
        Page::assemble(
            rows[start..end].to_vec(),
            page_number,
            page_size,
            rows.len() as i64,
        )
    }

    #[test]
    fn test_pages_partition_the_result_set() {
        // Sum of item counts across all pages equals n, and no page exceeds
        // the page size, for a spread of sizes.
        for n in [0i64, 1, 2, 3, 7, 10, 30] {
            for page_size in [1i64, 2, 3, 5, 10] {
                let rows: Vec<i64> = (0..n).collect();
                let total_pages = (n + page_size - 1) / page_size;
                let mut seen = 0;
                for page_number in 1..=total_pages.max(1) {
                    let page = fetch_page(&rows, page_number, page_size);
                    assert!(page.items.len() as i64 <= page_size);
                    seen += page.items.len() as i64;
                }
                assert_eq!(seen, n, "n={n} page_size={page_size}");
            }
        }
    }

    #[test]
    fn test_page_zero_and_negative_clamp_to_one() {
        let rows: Vec<i64> = (0..10).collect();
        let first = fetch_page(&rows, 1, 3);
        for bogus in [0, -1, -100] {
            let page = fetch_page(&rows, bogus, 3);
            assert_eq!(page.items, first.items);
            assert_eq!(page.page_number, 1);
            assert!(!page.has_previous);
        }
    }

    #[test]
    fn test_extreme_page_number_saturates_instead_of_overflowing() {
        // Query strings can carry any i64; the offset must stay a valid
        // non-negative value rather than wrapping.
        assert_eq!(offset(i64::MAX, 3), i64::MAX);
        assert!(offset(i64::MAX - 1, i64::MAX) >= 0);

        let rows: Vec<i64> = (0..5).collect();
        let page = fetch_page(&rows, i64::MAX, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 5);
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn test_page_past_the_end_is_empty_with_valid_metadata() {
        let rows: Vec<i64> = (0..5).collect();
        let page = fetch_page(&rows, 99, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn test_metadata_for_interior_page() {
        let rows: Vec<i64> = (0..7).collect();
        let page = fetch_page(&rows, 2, 3);
        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous);
        assert!(page.has_next);
    }

    #[test]
    fn test_empty_set_has_zero_pages() {
        let page = fetch_page(&[], 1, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous);
        assert!(!page.has_next);
    }
}
