//! Pagination and sort state for the data grid.
//!
//! [`PageState`] is the single state value a grid renders from: current
//! page, page size, total row count, and sort order. The grid treats it
//! as immutable: every user interaction derives a *new* value through
//! [`PageState::with_page`], [`PageState::with_per_page`], or
//! [`PageState::sort_toggled`] and hands it to the caller through a
//! message. The caller owns the authoritative copy, applies it however it
//! likes (usually by re-querying its data source), and supplies the fresh
//! value back to the grid.
//!
//! Sort order is an explicit tagged state, [`SortState`], with a
//! deterministic per-column transition table, so "never sorted",
//! "ascending on x", and "descending on x" are distinct values.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datagrid::pagination::{PageState, SortState};
//!
//! let state = PageState::new().with_total(200).with_per_page(25);
//! assert_eq!(state.total_pages(), 8);
//!
//! // Deriving never mutates: each step is a new value.
//! let page_two = state.clone().with_page(2);
//! assert_eq!(page_two.page, 2);
//! assert_eq!(state.page, 0);
//!
//! // Sorting cycles per column.
//! let by_name = state.sort_toggled(Some("name"));
//! assert_eq!(by_name.sort, SortState::Ascending("name".into()));
//! let by_name = by_name.sort_toggled(Some("name"));
//! assert_eq!(by_name.sort, SortState::Descending("name".into()));
//! ```

use thiserror::Error;

/// Page sizes offered by the grid's page-size control, in cycle order.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 15, 25, 50, 100];

/// How the footer displays the current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Arabic numerals, e.g. `"3/10"`.
    #[default]
    Arabic,
    /// One dot per page, e.g. `"○ ○ ● ○"`.
    Dots,
}

/// The sort order of a data grid.
///
/// The three states are distinct: a grid that has never been sorted is
/// `Unsorted`, not "ascending on nothing". Each sorted variant carries
/// the id of the column it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    /// No sort is applied.
    #[default]
    Unsorted,
    /// Sorted ascending on the named column.
    Ascending(String),
    /// Sorted descending on the named column.
    Descending(String),
}

impl SortState {
    /// Returns the column the sort applies to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(c) | SortState::Descending(c) => Some(c),
        }
    }

    /// Returns the next state after activating sort on `column`.
    ///
    /// The transition table:
    ///
    /// | current                   | next               |
    /// |---------------------------|--------------------|
    /// | `Unsorted`                | `Ascending(column)` |
    /// | `Ascending` on `column`   | `Descending(column)` |
    /// | `Descending` on `column`  | `Ascending(column)` |
    /// | sorted on another column  | `Ascending(column)` |
    ///
    /// Activating the same column twice therefore round-trips:
    /// ascending → descending → ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::pagination::SortState;
    ///
    /// let sort = SortState::Unsorted.toggled("age");
    /// assert_eq!(sort, SortState::Ascending("age".into()));
    ///
    /// // Switching columns always starts ascending.
    /// let sort = SortState::Descending("age".into()).toggled("name");
    /// assert_eq!(sort, SortState::Ascending("name".into()));
    /// ```
    pub fn toggled(&self, column: &str) -> SortState {
        match self {
            SortState::Ascending(c) if c == column => SortState::Descending(column.to_string()),
            _ => SortState::Ascending(column.to_string()),
        }
    }
}

/// Pagination and sort state, owned by the caller.
///
/// All fields are public plain data; the grid never mutates a value it
/// was given. Derivation methods copy, adjust, and return.
///
/// Invariants are the caller's to uphold: the records supplied for
/// display should number at most `per_page`, and `total` should be at
/// least that many. A state that violates them renders incorrectly but
/// never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// Current page, zero-indexed.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
    /// Total row count across all pages.
    pub total: usize,
    /// Current sort order.
    pub sort: SortState,
    /// Label for the page-size control. `None` uses the default
    /// `"Rows per page"`.
    pub per_page_label: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 25,
            total: 0,
            sort: SortState::Unsorted,
            per_page_label: None,
        }
    }
}

impl PageState {
    /// Creates a state with default settings: first page, 25 rows per
    /// page, zero total, unsorted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total row count (builder pattern).
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    /// Sets the page-size label (builder pattern).
    pub fn with_per_page_label(mut self, label: impl Into<String>) -> Self {
        self.per_page_label = Some(label.into());
        self
    }

    /// Sets the sort order (builder pattern).
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Returns this state with `page` replaced and every other field
    /// unchanged.
    ///
    /// No bounds check is applied against `total`; the caller clamps if
    /// the index can be out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::pagination::{PageState, SortState};
    ///
    /// let state = PageState::new()
    ///     .with_total(100)
    ///     .with_sort(SortState::Ascending("name".into()));
    /// let next = state.with_page(2);
    /// assert_eq!(next.page, 2);
    /// assert_eq!(next.total, 100);
    /// assert_eq!(next.sort, SortState::Ascending("name".into()));
    /// ```
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Returns this state with `per_page` replaced and `page` reset to
    /// the first page.
    ///
    /// A page size of zero is clamped to one. Resetting the page keeps
    /// the view in range after the page count changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::pagination::PageState;
    ///
    /// let state = PageState::new().with_total(200).with_page(3);
    /// let next = state.with_per_page(50);
    /// assert_eq!(next.per_page, 50);
    /// assert_eq!(next.page, 0);
    /// ```
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self.page = 0;
        self
    }

    /// Returns this state with the sort order advanced for an activation
    /// on `column`, per [`SortState::toggled`]. Activating with no column
    /// clears the sort.
    pub fn sort_toggled(mut self, column: Option<&str>) -> Self {
        self.sort = match column {
            Some(c) => self.sort.toggled(c),
            None => SortState::Unsorted,
        };
        self
    }

    /// Returns the number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page.max(1))
        }
    }

    /// Returns true if the state is on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true if the state is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages() - 1
    }

    /// Returns `(start, end)` slice bounds into a dataset of `len`
    /// items for the current page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::pagination::PageState;
    ///
    /// let items: Vec<u32> = (0..95).collect();
    /// let state = PageState::new().with_total(95).with_per_page(10).with_page(9);
    /// let (start, end) = state.slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[90, 91, 92, 93, 94]);
    /// ```
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        (start, end)
    }

    /// Returns the number of items on the current page of a dataset
    /// with `total_items` items.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Returns the pagination summary sentence for `shown` displayed
    /// rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::pagination::PageState;
    ///
    /// let state = PageState::new().with_total(200);
    /// assert_eq!(state.summary(15), "Displaying 15 items of a total of 200");
    /// ```
    pub fn summary(&self, shown: usize) -> String {
        format!("Displaying {} items of a total of {}", shown, self.total)
    }

    /// Returns the label for the page-size control.
    pub fn per_page_label(&self) -> &str {
        self.per_page_label.as_deref().unwrap_or("Rows per page")
    }

    /// Returns the next page size in the [`PAGE_SIZE_OPTIONS`] cycle:
    /// the smallest option larger than the current size, wrapping to the
    /// smallest option.
    pub fn next_page_size(&self) -> usize {
        PAGE_SIZE_OPTIONS
            .iter()
            .copied()
            .find(|&n| n > self.per_page)
            .unwrap_or(PAGE_SIZE_OPTIONS[0])
    }
}

/// Failure to parse a page-size input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSizeError {
    /// The input was empty or whitespace.
    #[error("page size is empty")]
    Empty,
    /// The input was not an unsigned integer.
    #[error("page size is not a number: {0:?}")]
    NotANumber(String),
    /// The input parsed to zero.
    #[error("page size must be positive")]
    Zero,
}

/// Parses free-form page-size input into a positive integer.
///
/// Surrounding whitespace is ignored. Empty, non-numeric, and zero
/// inputs are rejected with a typed error; no sentinel value ever
/// reaches [`PageState`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::pagination::{parse_page_size, PageSizeError};
///
/// assert_eq!(parse_page_size(" 50 "), Ok(50));
/// assert_eq!(parse_page_size("0"), Err(PageSizeError::Zero));
/// assert!(matches!(
///     parse_page_size("many"),
///     Err(PageSizeError::NotANumber(_))
/// ));
/// ```
pub fn parse_page_size(input: &str) -> Result<usize, PageSizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PageSizeError::Empty);
    }
    let n: usize = trimmed
        .parse()
        .map_err(|_| PageSizeError::NotANumber(trimmed.to_string()))?;
    if n == 0 {
        return Err(PageSizeError::Zero);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle_pair_round_trips() {
        let sort = SortState::Ascending("name".into());
        let once = sort.toggled("name");
        assert_eq!(once, SortState::Descending("name".into()));
        let twice = once.toggled("name");
        assert_eq!(twice, SortState::Ascending("name".into()));
    }

    #[test]
    fn test_sort_toggle_from_unsorted() {
        assert_eq!(
            SortState::Unsorted.toggled("age"),
            SortState::Ascending("age".into())
        );
    }

    #[test]
    fn test_sort_toggle_other_column_starts_ascending() {
        let sort = SortState::Descending("age".into());
        assert_eq!(sort.toggled("name"), SortState::Ascending("name".into()));
        let sort = SortState::Ascending("age".into());
        assert_eq!(sort.toggled("name"), SortState::Ascending("name".into()));
    }

    #[test]
    fn test_with_page_preserves_other_fields() {
        let state = PageState {
            page: 0,
            per_page: 25,
            total: 100,
            sort: SortState::Ascending("name".into()),
            per_page_label: None,
        };
        let next = state.clone().with_page(2);
        assert_eq!(next.page, 2);
        assert_eq!(next.per_page, 25);
        assert_eq!(next.total, 100);
        assert_eq!(next.sort, SortState::Ascending("name".into()));
    }

    #[test]
    fn test_with_per_page_resets_page() {
        let state = PageState::new().with_total(500).with_page(3);
        let next = state.with_per_page(50);
        assert_eq!(next.per_page, 50);
        assert_eq!(next.page, 0);
    }

    #[test]
    fn test_with_per_page_clamps_zero() {
        assert_eq!(PageState::new().with_per_page(0).per_page, 1);
    }

    #[test]
    fn test_sort_toggled_without_column_clears() {
        let state = PageState::new().with_sort(SortState::Descending("x".into()));
        assert_eq!(state.sort_toggled(None).sort, SortState::Unsorted);
    }

    #[test]
    fn test_total_pages() {
        let state = PageState::new().with_per_page(10);
        assert_eq!(state.clone().with_total(0).total_pages(), 1);
        assert_eq!(state.clone().with_total(95).total_pages(), 10);
        assert_eq!(state.with_total(100).total_pages(), 10);
    }

    #[test]
    fn test_slice_bounds_clamped_to_data() {
        let state = PageState::new().with_total(100).with_per_page(10).with_page(20);
        // Page beyond the data clamps to an empty slice.
        assert_eq!(state.slice_bounds(35), (35, 35));
        assert_eq!(state.items_on_page(35), 0);
    }

    #[test]
    fn test_items_on_last_partial_page() {
        let state = PageState::new().with_total(95).with_per_page(10).with_page(9);
        assert_eq!(state.items_on_page(95), 5);
    }

    #[test]
    fn test_first_and_last_page() {
        let state = PageState::new().with_total(30).with_per_page(10);
        assert!(state.on_first_page());
        assert!(!state.on_last_page());
        let state = state.with_page(2);
        assert!(state.on_last_page());
        // Empty data still has one page, which is both first and last.
        let empty = PageState::new();
        assert!(empty.on_first_page() && empty.on_last_page());
    }

    #[test]
    fn test_summary_label() {
        let state = PageState::new().with_total(200);
        assert_eq!(state.summary(15), "Displaying 15 items of a total of 200");
    }

    #[test]
    fn test_per_page_label_default_and_override() {
        assert_eq!(PageState::new().per_page_label(), "Rows per page");
        let state = PageState::new().with_per_page_label("Filas por página");
        assert_eq!(state.per_page_label(), "Filas por página");
    }

    #[test]
    fn test_next_page_size_cycles_options() {
        let mut state = PageState::new().with_per_page(5);
        let mut seen = vec![5];
        for _ in 0..PAGE_SIZE_OPTIONS.len() {
            let next = state.next_page_size();
            state = state.with_per_page(next);
            seen.push(state.per_page);
        }
        assert_eq!(seen, vec![5, 15, 25, 50, 100, 5]);
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("25"), Ok(25));
        assert_eq!(parse_page_size("  100\n"), Ok(100));
        assert_eq!(parse_page_size(""), Err(PageSizeError::Empty));
        assert_eq!(parse_page_size("   "), Err(PageSizeError::Empty));
        assert_eq!(parse_page_size("0"), Err(PageSizeError::Zero));
        assert_eq!(
            parse_page_size("12x"),
            Err(PageSizeError::NotANumber("12x".into()))
        );
        assert_eq!(
            parse_page_size("-3"),
            Err(PageSizeError::NotANumber("-3".into()))
        );
    }
}
