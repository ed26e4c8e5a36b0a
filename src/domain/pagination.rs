//! Fixed-size paging over ordered result sets.

/// Number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Page(number)
    }

    pub fn first() -> Self {
        Page(1)
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Parse a `page` query value. Absent or non-integer input falls back to page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Page)
            .unwrap_or_else(Page::first)
    }

    /// Zero-based offset of the first item on this page, or `None` for pages below 1.
    fn offset(&self, size: usize) -> Option<usize> {
        let index = usize::try_from(self.0.checked_sub(1)?).ok()?;
        index.checked_mul(size)
    }
}

/// Slice `items` to the requested page.
///
/// Pages past the end (or below 1) yield an empty vector; callers decide
/// whether that is an error.
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let Some(start) = page.offset(QUESTIONS_PER_PAGE) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}
