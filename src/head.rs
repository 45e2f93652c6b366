//! The sortable column header row of a data grid.
//!
//! [`Model`] renders one line of column labels from a list of [`Column`]
//! descriptors, marking the currently sorted column with a direction
//! indicator and the focused column with its own style. It also tracks
//! the column cursor the grid uses to pick the sort target.
//!
//! The head is a pure display component: it never emits messages itself.
//! The owning grid moves the cursor and derives sort state from it.

use crate::pagination::SortState;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal alignment of a column's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center within the column.
    Center,
    /// Align to the right edge.
    Right,
}

/// Describes one column: identity, display label, and styling hints.
///
/// A column's `id` ties it to record field keys; rows whose keys have no
/// matching column render with default width and alignment rather than
/// failing. A `hidden` column keeps its slot in the layout but renders
/// blank, so column counts and widths stay aligned across rows.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::head::{Align, Column};
///
/// let col = Column::new("age", "Age").with_width(6).with_align(Align::Right);
/// assert_eq!(col.id, "age");
/// assert!(!col.hidden);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    /// Column key, matched against record field keys.
    pub id: String,
    /// Display label for the header row.
    pub label: String,
    /// Column width in cells. Zero means size to content.
    pub width: usize,
    /// Content alignment.
    pub align: Align,
    /// Whether the column renders blank while keeping its slot.
    pub hidden: bool,
}

impl Column {
    /// Creates a visible, left-aligned column sized to content.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: 0,
            align: Align::Left,
            hidden: false,
        }
    }

    /// Sets the width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the alignment (builder pattern).
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets the hidden flag (builder pattern).
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Styles for the header row.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for column labels.
    pub label: Style,
    /// Style for the sorted column's label and indicator.
    pub sorted: Style,
    /// Style for the focused column's label.
    pub focused: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let label = Style::new().bold(true).foreground(AdaptiveColor {
            Light: "#4A4A4A",
            Dark: "#DDDDDD",
        });
        Self {
            sorted: label.clone().foreground(AdaptiveColor {
                Light: "#7D56F4",
                Dark: "#AD8CFC",
            }),
            focused: label.clone().underline(true),
            label,
        }
    }
}

/// Gap rendered between adjacent cells, shared by the head and body so
/// columns line up.
pub(crate) const CELL_GAP: &str = "  ";

/// The header row component.
#[derive(Debug, Clone)]
pub struct Model {
    /// Styles for rendering.
    pub styles: Styles,
    /// Indicator appended to the ascending sort column, default `"▲"`.
    pub ascending_indicator: String,
    /// Indicator appended to the descending sort column, default `"▼"`.
    pub descending_indicator: String,
    columns: Vec<Column>,
    sort: SortState,
    cursor: usize,
}

impl Model {
    /// Creates a header row from column descriptors.
    ///
    /// An empty list is replaced with a single blank placeholder column
    /// so the head always renders a row.
    pub fn new(columns: Vec<Column>) -> Self {
        let columns = if columns.is_empty() {
            vec![Column::default()]
        } else {
            columns
        };
        Self {
            styles: Styles::default(),
            ascending_indicator: "▲".to_string(),
            descending_indicator: "▼".to_string(),
            columns,
            sort: SortState::Unsorted,
            cursor: 0,
        }
    }

    /// Sets the sort order to display (builder pattern).
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Replaces the column descriptors, clamping the cursor.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = if columns.is_empty() {
            vec![Column::default()]
        } else {
            columns
        };
        self.cursor = self.cursor.min(self.columns.len() - 1);
    }

    /// Returns the column with the given id, if any.
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the displayed sort order.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Sets the displayed sort order.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Returns the focused column index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sets the focused column index, clamped to the column count.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.columns.len() - 1);
    }

    /// Moves focus to the next column, wrapping at the end.
    pub fn next_column(&mut self) {
        self.cursor = (self.cursor + 1) % self.columns.len();
    }

    /// Moves focus to the previous column, wrapping at the start.
    pub fn prev_column(&mut self) {
        self.cursor = if self.cursor == 0 {
            self.columns.len() - 1
        } else {
            self.cursor - 1
        };
    }

    /// Returns the focused column.
    pub fn current_column(&self) -> Option<&Column> {
        self.columns.get(self.cursor)
    }

    /// Renders the header row as a single line.
    pub fn view(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                if col.hidden {
                    return pad("", col.width, col.align);
                }
                let mut text = col.label.clone();
                match &self.sort {
                    SortState::Ascending(c) if *c == col.id => {
                        text.push(' ');
                        text.push_str(&self.ascending_indicator);
                    }
                    SortState::Descending(c) if *c == col.id => {
                        text.push(' ');
                        text.push_str(&self.descending_indicator);
                    }
                    _ => {}
                }
                let padded = pad(&text, col.width, col.align);
                let style = if i == self.cursor {
                    &self.styles.focused
                } else if self.sort.column() == Some(col.id.as_str()) {
                    &self.styles.sorted
                } else {
                    &self.styles.label
                };
                style.clone().inline(true).render(&padded)
            })
            .collect();
        cells.join(CELL_GAP)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Pads or truncates `text` to `width` display cells with the given
/// alignment. A width of zero leaves the text as-is.
pub(crate) fn pad(text: &str, width: usize, align: Align) -> String {
    if width == 0 {
        return text.to_string();
    }
    let text = truncate(text, width);
    let gap = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(gap)),
        Align::Right => format!("{}{}", " ".repeat(gap), text),
        Align::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}

/// Truncates `text` to `width` display cells, ending with an ellipsis
/// when anything was cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
