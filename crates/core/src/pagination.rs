//! Page-number pagination for list views.
//!
//! Out-of-range requests never fail: a missing or non-numeric page number
//! resolves to the first page, a number below 1 to the first page, and a
//! number past the end to the last page, however large.

/// Default number of rows per page when `MAX_PAGE_SIZE` is not configured.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A resolved page within a result set of `total` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number actually served.
    pub number: i64,
    /// Total number of pages. Always at least 1, even for an empty set.
    pub num_pages: i64,
    pub page_size: i64,
    pub total: i64,
}

impl PageWindow {
    /// Resolve a raw `page` query value against a result set.
    ///
    /// `page_size` below 1 is treated as 1.
    pub fn resolve(raw_page: Option<&str>, total: i64, page_size: i64) -> Self {
        let page_size = page_size.max(1);
        let total = total.max(0);
        let num_pages = if total == 0 {
            1
        } else {
            (total - 1) / page_size + 1
        };

        let number = match raw_page.map(str::trim).map(parse_page_number) {
            None | Some(RawPage::Invalid) => 1,
            Some(RawPage::Overflow) => num_pages,
            Some(RawPage::Number(n)) if n < 1 => 1,
            Some(RawPage::Number(n)) if n > num_pages => num_pages,
            Some(RawPage::Number(n)) => n,
        };

        Self {
            number,
            num_pages,
            page_size,
            total,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.page_size
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_number(&self) -> Option<i64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_number(&self) -> Option<i64> {
        self.has_next().then(|| self.number + 1)
    }

    /// 1-based index of the first row on this page, 0 for an empty set.
    pub fn start_index(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based index of the last row on this page, 0 for an empty set.
    pub fn end_index(&self) -> i64 {
        self.offset().saturating_add(self.page_size).min(self.total)
    }
}

enum RawPage {
    Number(i64),
    /// All digits, but too large for `i64`.
    Overflow,
    Invalid,
}

fn parse_page_number(raw: &str) -> RawPage {
    if let Ok(n) = raw.parse::<i64>() {
        return RawPage::Number(n);
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        RawPage::Overflow
    } else {
        RawPage::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_is_first() {
        let w = PageWindow::resolve(None, 25, 10);
        assert_eq!(w.number, 1);
        assert_eq!(w.num_pages, 3);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn non_numeric_page_is_first() {
        assert_eq!(PageWindow::resolve(Some("abc"), 25, 10).number, 1);
        assert_eq!(PageWindow::resolve(Some(""), 25, 10).number, 1);
    }

    #[test]
    fn page_below_one_is_first() {
        assert_eq!(PageWindow::resolve(Some("0"), 25, 10).number, 1);
        assert_eq!(PageWindow::resolve(Some("-4"), 25, 10).number, 1);
    }

    #[test]
    fn page_past_end_is_last() {
        let w = PageWindow::resolve(Some("99"), 25, 10);
        assert_eq!(w.number, 3);
        assert_eq!(w.offset(), 20);
        assert!(!w.has_next());
        assert_eq!(w.previous_number(), Some(2));
    }

    #[test]
    fn page_beyond_i64_is_last() {
        for raw in ["99999999999999999999", "+99999999999999999999"] {
            let w = PageWindow::resolve(Some(raw), 25, 10);
            assert_eq!(w.number, 3, "page {raw}");
        }
    }

    #[test]
    fn huge_negative_page_is_first() {
        assert_eq!(
            PageWindow::resolve(Some("-99999999999999999999"), 25, 10).number,
            1
        );
    }

    #[test]
    fn huge_page_size_does_not_overflow() {
        let w = PageWindow::resolve(Some("1"), 5, i64::MAX);
        assert_eq!(w.num_pages, 1);
        assert_eq!(w.offset(), 0);
        assert_eq!(w.start_index(), 1);
        assert_eq!(w.end_index(), 5);

        let w = PageWindow::resolve(Some("2"), i64::MAX, i64::MAX);
        assert_eq!(w.num_pages, 1);
        assert_eq!(w.number, 1);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let w = PageWindow::resolve(Some("3"), 20, 10);
        assert_eq!(w.num_pages, 2);
        assert_eq!(w.number, 2);
    }

    #[test]
    fn empty_set_has_single_empty_page() {
        let w = PageWindow::resolve(Some("5"), 0, 10);
        assert_eq!(w.number, 1);
        assert_eq!(w.num_pages, 1);
        assert!(!w.has_next());
        assert!(!w.has_previous());
        assert_eq!(w.start_index(), 0);
        assert_eq!(w.end_index(), 0);
    }

    #[test]
    fn middle_page_navigation() {
        let w = PageWindow::resolve(Some("2"), 25, 10);
        assert_eq!(w.previous_number(), Some(1));
        assert_eq!(w.next_number(), Some(3));
        assert_eq!(w.start_index(), 11);
        assert_eq!(w.end_index(), 20);
    }

    #[test]
    fn last_partial_page_bounds() {
        let w = PageWindow::resolve(Some("3"), 25, 10);
        assert_eq!(w.start_index(), 21);
        assert_eq!(w.end_index(), 25);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let w = PageWindow::resolve(Some("2"), 3, 0);
        assert_eq!(w.page_size, 1);
        assert_eq!(w.num_pages, 3);
        assert_eq!(w.offset(), 1);
    }
}
