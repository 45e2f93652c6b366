//! A paginated, sortable, deletable data grid.
//!
//! The grid renders a header row, a body of record rows (or a loading
//! skeleton), and an optional pagination footer. It owns no data state:
//! records and the [`PageState`] are supplied by the caller, and every
//! interaction that would change them (sorting, paging, resizing the
//! page, removing a row) derives a complete new value and emits it as a
//! message for the caller to apply. Re-supplying fresh inputs after each
//! message is the whole update loop.
//!
//! Cells are derived from each record's own field keys, in the record's
//! order, with a synthetic delete column appended last. Column
//! descriptors are matched by key; a cell without a descriptor falls
//! back to default width and alignment, and a hidden descriptor renders
//! blank while keeping its slot so the layout grid stays aligned.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datagrid::grid::Model;
//! use bubbletea_datagrid::head::Column;
//! use bubbletea_datagrid::pagination::PageState;
//! use bubbletea_datagrid::record::MapRecord;
//!
//! let grid = Model::new(vec![
//!     Column::new("name", "Name").with_width(10),
//!     Column::new("role", "Role").with_width(10),
//! ])
//! .with_records(vec![
//!     MapRecord::new(1).field("name", "Ada").field("role", "engineer"),
//!     MapRecord::new(2).field("name", "Grace").field("role", "admiral"),
//! ])
//! .with_state(PageState::new().with_total(2))
//! .with_pagination(true);
//!
//! let view = grid.view();
//! assert!(view.contains("Ada"));
//! assert!(view.contains("Displaying 2 items of a total of 2"));
//! ```
//!
//! ## Handling grid messages
//!
//! ```rust
//! use bubbletea_datagrid::grid::{Model, PageStateMsg, RemoveRowMsg};
//! use bubbletea_datagrid::head::Column;
//! use bubbletea_datagrid::record::MapRecord;
//! use bubbletea_rs::Msg;
//!
//! struct App {
//!     rows: Vec<MapRecord>,
//!     grid: Model<MapRecord>,
//! }
//!
//! impl App {
//!     fn handle(&mut self, msg: &Msg) {
//!         if let Some(change) = msg.downcast_ref::<PageStateMsg>() {
//!             // Re-query the data source with the new state, then:
//!             self.grid.set_state(change.state.clone());
//!         } else if let Some(removed) = msg.downcast_ref::<RemoveRowMsg<i64>>() {
//!             self.rows.retain(|r| {
//!                 bubbletea_datagrid::record::Record::id(r) != removed.row
//!             });
//!             self.grid.set_records(self.rows.clone());
//!         }
//!     }
//! }
//! # let _ = App {
//! #     rows: Vec::new(),
//! #     grid: Model::new(vec![Column::new("name", "Name")]),
//! # };
//! ```

use crate::head::{self, Column};
use crate::pagination::{PageState, Type};
use crate::record::Record;
use crate::skeleton;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::sync::atomic::{AtomicI64, Ordering};

mod keys;
mod style;

pub use keys::KeyMap;
pub use style::Styles;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Key of the synthetic delete column appended to every row.
///
/// A column descriptor with this id, if supplied, controls the delete
/// cell's width, alignment, and visibility like any other column.
pub const DELETE_COLUMN: &str = "delete";

/// Message emitted when an interaction derives a new pagination/sort
/// state.
///
/// Carries the complete state value, ready to apply; never a partial
/// delta. `id` identifies the emitting grid so applications with several
/// grids can route.
#[derive(Debug, Clone)]
pub struct PageStateMsg {
    /// Identifier of the emitting grid.
    pub id: i64,
    /// The derived state.
    pub state: PageState,
}

/// Message emitted when the selected row's delete control is activated.
///
/// Carries the record's stable identifier; the grid does not remove
/// anything itself.
#[derive(Debug, Clone)]
pub struct RemoveRowMsg<I> {
    /// Identifier of the emitting grid.
    pub id: i64,
    /// Identifier of the row to remove.
    pub row: I,
}

/// The data grid component.
///
/// Generic over the record type; see [`Record`](crate::record::Record).
/// The grid holds display state only (cursors, focus, styles). The
/// records shown and the [`PageState`] are caller-owned inputs,
/// re-supplied after every emitted change.
pub struct Model<R: Record> {
    /// Key bindings.
    pub keymap: KeyMap,
    /// Styles for the body and footer.
    pub styles: Styles,
    /// Glyph rendered in the delete column, default `"✕"`.
    pub delete_glyph: String,
    /// How the footer shows the page position.
    pub page_type: Type,
    /// Dot for the current page in [`Type::Dots`] mode.
    pub active_dot: String,
    /// Dot for other pages in [`Type::Dots`] mode.
    pub inactive_dot: String,
    head: head::Model,
    skeleton: skeleton::Model,
    records: Vec<R>,
    state: PageState,
    loading: bool,
    show_pagination: bool,
    cursor: usize,
    focus: bool,
    id: i64,
    body_cache: Vec<String>,
}

impl<R: Record> Model<R> {
    /// Creates a grid with the given column descriptors and no records.
    ///
    /// An empty descriptor list is replaced with a single blank
    /// placeholder column.
    pub fn new(columns: Vec<Column>) -> Self {
        let head = head::Model::new(columns);
        let widths = head.columns().iter().map(|c| c.width).collect();
        Self {
            keymap: KeyMap::default(),
            styles: Styles::default(),
            delete_glyph: "✕".to_string(),
            page_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            head,
            skeleton: skeleton::Model::new().with_widths(widths),
            records: Vec::new(),
            state: PageState::default(),
            loading: false,
            show_pagination: false,
            cursor: 0,
            focus: false,
            id: next_id(),
            body_cache: Vec::new(),
        }
    }

    /// Sets the records to display (builder pattern).
    pub fn with_records(mut self, records: Vec<R>) -> Self {
        self.set_records(records);
        self
    }

    /// Sets the pagination/sort state (builder pattern).
    pub fn with_state(mut self, state: PageState) -> Self {
        self.set_state(state);
        self
    }

    /// Shows or hides the pagination footer (builder pattern).
    pub fn with_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    /// Sets the loading flag (builder pattern).
    ///
    /// Use [`set_loading`](Self::set_loading) afterwards to obtain the
    /// command that animates the skeleton's shimmer.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the footer's page position display (builder pattern).
    pub fn with_page_type(mut self, page_type: Type) -> Self {
        self.page_type = page_type;
        self
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self.rebuild_body();
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the focus state (builder pattern).
    pub fn focused(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    /// Returns this grid's unique identifier, carried in every message
    /// it emits.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the records currently supplied for display.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Replaces the records, clamping the row cursor.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
        self.rebuild_body();
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column] {
        self.head.columns()
    }

    /// Replaces the column descriptors.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.head.set_columns(columns);
        let widths = self.head.columns().iter().map(|c| c.width).collect();
        self.skeleton.set_widths(widths);
        self.rebuild_body();
    }

    /// Returns the pagination/sort state the grid renders from.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Replaces the pagination/sort state.
    pub fn set_state(&mut self, state: PageState) {
        self.head.set_sort(state.sort.clone());
        self.state = state;
    }

    /// Returns whether the loading placeholder is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sets the loading flag.
    ///
    /// Turning loading on returns the command that starts the skeleton's
    /// shimmer animation; hand it to the runtime.
    pub fn set_loading(&mut self, loading: bool) -> Option<Cmd> {
        self.loading = loading;
        if loading {
            Some(self.skeleton.start())
        } else {
            None
        }
    }

    /// Returns the selected row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sets the selected row index, clamped to the record count.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.records.len().saturating_sub(1));
    }

    /// Returns the selected record, if any.
    pub fn selected_record(&self) -> Option<&R> {
        self.records.get(self.cursor)
    }

    /// Moves the selection up by `n` rows.
    pub fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Moves the selection down by `n` rows.
    pub fn move_down(&mut self, n: usize) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + n).min(self.records.len() - 1);
        }
    }

    fn emit_state(&self, state: PageState) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(PageStateMsg { id, state }) as Msg) })
    }

    fn emit_remove(&self, row: R::Id) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(RemoveRowMsg { id, row }) as Msg) })
    }

    /// Processes messages: navigation keys, action keys, and skeleton
    /// ticks.
    ///
    /// Sorting, paging, page-size, and remove actions return a command
    /// that emits the corresponding message; the grid's own inputs are
    /// left untouched. An unfocused grid only processes skeleton ticks.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<skeleton::TickMsg>() {
            if self.loading {
                return self.skeleton.update(Box::new(tick.clone()));
            }
            return None;
        }

        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.row_up.matches(key_msg) {
            self.move_up(1);
        } else if self.keymap.row_down.matches(key_msg) {
            self.move_down(1);
        } else if self.keymap.goto_top.matches(key_msg) {
            self.cursor = 0;
        } else if self.keymap.goto_bottom.matches(key_msg) {
            self.cursor = self.records.len().saturating_sub(1);
        } else if self.keymap.prev_column.matches(key_msg) {
            self.head.prev_column();
        } else if self.keymap.next_column.matches(key_msg) {
            self.head.next_column();
        } else if self.keymap.sort.matches(key_msg) {
            // A blank placeholder column carries no sortable identity.
            let column = self
                .head
                .current_column()
                .filter(|c| !c.id.is_empty())
                .map(|c| c.id.clone());
            let next = self.state.clone().sort_toggled(column.as_deref());
            return Some(self.emit_state(next));
        } else if self.keymap.remove.matches(key_msg) {
            if !self.loading {
                if let Some(record) = self.records.get(self.cursor) {
                    let row = record.id();
                    return Some(self.emit_remove(row));
                }
            }
        } else if self.keymap.prev_page.matches(key_msg) {
            if !self.state.on_first_page() {
                let next = self.state.clone().with_page(self.state.page - 1);
                return Some(self.emit_state(next));
            }
        } else if self.keymap.next_page.matches(key_msg) {
            if !self.state.on_last_page() {
                let next = self.state.clone().with_page(self.state.page + 1);
                return Some(self.emit_state(next));
            }
        } else if self.keymap.page_size.matches(key_msg) {
            let next = self.state.clone().with_per_page(self.state.next_page_size());
            return Some(self.emit_state(next));
        }

        None
    }

    /// Renders the grid: header, body or skeleton, and the footer when
    /// pagination is shown.
    pub fn view(&self) -> String {
        let mut sections = vec![self.head.view()];
        if self.loading {
            sections.push(self.skeleton.view());
        } else {
            sections.push(self.body_view());
        }
        if self.show_pagination {
            sections.push(self.footer_view());
        }
        sections.join("\n")
    }

    fn body_view(&self) -> String {
        let rows: Vec<String> = self
            .body_cache
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if i == self.cursor {
                    &self.styles.selected
                } else {
                    &self.styles.cell
                };
                style.clone().inline(true).render(row)
            })
            .collect();
        rows.join("\n")
    }

    fn footer_view(&self) -> String {
        let summary = self
            .styles
            .summary
            .clone()
            .inline(true)
            .render(&self.state.summary(self.records.len()));
        let pages = match self.page_type {
            Type::Arabic => format!("{}/{}", self.state.page + 1, self.state.total_pages()),
            Type::Dots => {
                let mut dots = Vec::with_capacity(self.state.total_pages());
                for i in 0..self.state.total_pages() {
                    dots.push(if i == self.state.page {
                        self.active_dot.as_str()
                    } else {
                        self.inactive_dot.as_str()
                    });
                }
                dots.join(" ")
            }
        };
        let controls = format!(
            "{}  {}: {}",
            pages,
            self.state.per_page_label(),
            self.state.per_page
        );
        format!(
            "{}  {}",
            summary,
            self.styles.footer.clone().inline(true).render(&controls)
        )
    }

    /// Rebuilds the cached body rows.
    ///
    /// Called whenever records, columns, or styles change; selection
    /// styling is applied at view time so cursor moves stay cheap.
    fn rebuild_body(&mut self) {
        let rows: Vec<String> = self
            .records
            .iter()
            .map(|r| self.render_record(r))
            .collect();
        self.body_cache = rows;
    }

    fn render_record(&self, record: &R) -> String {
        let mut keys = record.keys();
        keys.push(DELETE_COLUMN.to_string());
        let cells: Vec<String> = keys
            .iter()
            .map(|key| {
                let column = self.head.column(key);
                let width = column.map(|c| c.width).unwrap_or(0);
                let align = column.map(|c| c.align).unwrap_or_default();
                if column.is_some_and(|c| c.hidden) {
                    return head::pad("", width, align);
                }
                let value = if key == DELETE_COLUMN {
                    self.delete_glyph.clone()
                } else {
                    record.cell(key)
                };
                head::pad(&value, width, align)
            })
            .collect();
        cells.join(head::CELL_GAP)
    }
}

impl<R: Record> Component for Model<R> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::Align;
    use crate::pagination::SortState;
    use crate::record::MapRecord;
    use crossterm::event::{KeyCode, KeyModifiers};
    use unicode_width::UnicodeWidthStr;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name"),
            Column::new("age", "Age").with_align(Align::Right),
        ]
    }

    fn records() -> Vec<MapRecord> {
        vec![
            MapRecord::new(42).field("name", "Ada").field("age", 36),
            MapRecord::new(7).field("name", "Grace").field("age", 85),
            MapRecord::new(9).field("name", "Edsger").field("age", 72),
        ]
    }

    fn grid() -> Model<MapRecord> {
        Model::new(columns())
            .with_records(records())
            .with_state(PageState::new().with_total(3))
            .focused(true)
    }

    async fn resolve(cmd: Cmd) -> Msg {
        cmd.await.expect("command produced no message")
    }

    #[test]
    fn test_body_row_count_matches_records() {
        let grid = grid();
        // Header line plus one line per record.
        assert_eq!(grid.view().lines().count(), 1 + records().len());
    }

    #[test]
    fn test_each_row_has_delete_cell_appended() {
        let grid = grid();
        let row = grid.render_record(&records()[0]);
        let cells: Vec<&str> = row.split(head::CELL_GAP).collect();
        assert_eq!(cells.len(), records()[0].len() + 1);
        assert_eq!(*cells.last().unwrap(), "✕");
    }

    #[test]
    fn test_cell_without_descriptor_renders_unstyled_value() {
        // "extra" has no column descriptor; it still renders, unpadded.
        let rows = vec![MapRecord::new(1)
            .field("name", "Ada")
            .field("extra", "raw-value")];
        let grid = Model::new(columns()).with_records(rows);
        assert!(grid.view().contains("raw-value"));
    }

    #[test]
    fn test_hidden_descriptor_blanks_cell_but_keeps_slot() {
        let cols = vec![
            Column::new("name", "Name").with_width(6),
            Column::new("secret", "Secret").with_width(6).with_hidden(true),
        ];
        let rows = vec![MapRecord::new(1)
            .field("name", "Ada")
            .field("secret", "hunter2")];
        let grid = Model::new(cols).with_records(rows.clone());
        let row = grid.render_record(&rows[0]);
        assert!(!row.contains("hunter2"));
        // The blanked cell keeps its 6-cell slot: two padded cells, two
        // gaps, and the delete glyph.
        assert_eq!(row.width(), 6 + 2 + 6 + 2 + 1);
        assert!(row.starts_with("Ada   "));
        assert!(row.ends_with('✕'));
    }

    #[test]
    fn test_loading_renders_no_records() {
        let mut grid = grid();
        let _ = grid.set_loading(true);
        let view = grid.view();
        assert!(!view.contains("Ada"));
        // Header plus the skeleton's three placeholder rows.
        assert_eq!(view.lines().count(), 4);
    }

    #[test]
    fn test_footer_summary_label() {
        let grid = Model::new(columns())
            .with_records(records())
            .with_state(PageState::new().with_total(200))
            .with_pagination(true);
        assert!(grid
            .view()
            .contains("Displaying 3 items of a total of 200"));
    }

    #[test]
    fn test_footer_hidden_without_pagination() {
        let grid = grid();
        assert!(!grid.view().contains("Displaying"));
    }

    #[test]
    fn test_unfocused_grid_ignores_keys() {
        let mut grid = grid().focused(false);
        assert!(grid.update(&key(KeyCode::Char('d'))).is_none());
        assert_eq!(grid.cursor(), 0);
        grid.update(&key(KeyCode::Down));
        assert_eq!(grid.cursor(), 0);
    }

    #[test]
    fn test_row_cursor_navigation() {
        let mut grid = grid();
        grid.update(&key(KeyCode::Down));
        grid.update(&key(KeyCode::Down));
        assert_eq!(grid.cursor(), 2);
        // Clamped at the last row.
        grid.update(&key(KeyCode::Down));
        assert_eq!(grid.cursor(), 2);
        grid.update(&key(KeyCode::Up));
        assert_eq!(grid.cursor(), 1);
        grid.update(&key(KeyCode::Home));
        assert_eq!(grid.cursor(), 0);
        grid.update(&key(KeyCode::End));
        assert_eq!(grid.cursor(), 2);
        assert_eq!(grid.selected_record().unwrap().cell("name"), "Edsger");
    }

    #[tokio::test]
    async fn test_remove_emits_selected_row_id() {
        let mut grid = grid();
        let cmd = grid.update(&key(KeyCode::Char('d'))).expect("command");
        let msg = resolve(cmd).await;
        let removed = msg
            .downcast_ref::<RemoveRowMsg<i64>>()
            .expect("remove message");
        assert_eq!(removed.row, 42);
        assert_eq!(removed.id, grid.id());
    }

    #[test]
    fn test_remove_on_empty_grid_is_inert() {
        let mut grid: Model<MapRecord> = Model::new(columns()).focused(true);
        assert!(grid.update(&key(KeyCode::Char('d'))).is_none());
    }

    #[test]
    fn test_remove_while_loading_is_inert() {
        let mut grid = grid();
        let _ = grid.set_loading(true);
        assert!(grid.update(&key(KeyCode::Char('d'))).is_none());
    }

    #[tokio::test]
    async fn test_sort_toggle_cycles_on_one_column() {
        let mut grid = grid();
        // Column cursor starts on "name".
        let cmd = grid.update(&key(KeyCode::Char('s'))).expect("command");
        let msg = resolve(cmd).await;
        let first = msg.downcast_ref::<PageStateMsg>().unwrap().state.clone();
        assert_eq!(first.sort, SortState::Ascending("name".into()));

        grid.set_state(first);
        let cmd = grid.update(&key(KeyCode::Char('s'))).expect("command");
        let msg = resolve(cmd).await;
        let second = msg.downcast_ref::<PageStateMsg>().unwrap().state.clone();
        assert_eq!(second.sort, SortState::Descending("name".into()));

        grid.set_state(second);
        let cmd = grid.update(&key(KeyCode::Char('s'))).expect("command");
        let msg = resolve(cmd).await;
        let third = msg.downcast_ref::<PageStateMsg>().unwrap().state.clone();
        assert_eq!(third.sort, SortState::Ascending("name".into()));
    }

    #[tokio::test]
    async fn test_sort_on_other_column_starts_ascending() {
        let mut grid = grid().with_state(
            PageState::new()
                .with_total(3)
                .with_sort(SortState::Descending("name".into())),
        );
        grid.update(&key(KeyCode::Right));
        let cmd = grid.update(&key(KeyCode::Char('s'))).expect("command");
        let msg = resolve(cmd).await;
        let state = &msg.downcast_ref::<PageStateMsg>().unwrap().state;
        assert_eq!(state.sort, SortState::Ascending("age".into()));
    }

    #[tokio::test]
    async fn test_page_change_preserves_other_fields() {
        let mut grid = grid().with_state(
            PageState::new()
                .with_total(100)
                .with_sort(SortState::Ascending("name".into())),
        );
        let cmd = grid.update(&key(KeyCode::PageDown)).expect("command");
        let msg = resolve(cmd).await;
        let state = &msg.downcast_ref::<PageStateMsg>().unwrap().state;
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, 25);
        assert_eq!(state.total, 100);
        assert_eq!(state.sort, SortState::Ascending("name".into()));
    }

    #[test]
    fn test_page_navigation_stops_at_bounds() {
        // Page 1 of 2 is the last page.
        let mut on_last = grid().with_state(PageState::new().with_total(30).with_page(1));
        assert!(on_last.update(&key(KeyCode::PageDown)).is_none());
        let mut on_first = grid().with_state(PageState::new().with_total(30));
        assert!(on_first.update(&key(KeyCode::PageUp)).is_none());
    }

    #[tokio::test]
    async fn test_page_size_cycle_resets_page() {
        let mut grid = grid().with_state(
            PageState::new()
                .with_total(500)
                .with_per_page(25)
                .with_page(3),
        );
        let cmd = grid.update(&key(KeyCode::Char('r'))).expect("command");
        let msg = resolve(cmd).await;
        let state = &msg.downcast_ref::<PageStateMsg>().unwrap().state;
        assert_eq!(state.per_page, 50);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_set_records_refreshes_body() {
        let mut grid = grid();
        grid.set_records(vec![MapRecord::new(1).field("name", "Linus")]);
        let view = grid.view();
        assert!(view.contains("Linus"));
        assert!(!view.contains("Ada"));
        assert_eq!(grid.cursor(), 0);
    }

    #[test]
    fn test_set_columns_refreshes_body() {
        let mut grid = grid();
        grid.set_columns(vec![
            Column::new("name", "Name").with_width(12),
            Column::new("age", "Age").with_width(12),
        ]);
        assert!(grid.view().contains("Ada         "));
    }

    #[test]
    fn test_set_state_syncs_head_indicator() {
        let mut grid = grid();
        grid.set_state(
            PageState::new()
                .with_total(3)
                .with_sort(SortState::Descending("age".into())),
        );
        assert!(grid.view().contains('▼'));
    }

    #[test]
    fn test_dots_page_view() {
        let grid = grid()
            .with_state(PageState::new().with_total(30).with_per_page(10).with_page(1))
            .with_page_type(Type::Dots)
            .with_pagination(true);
        assert!(grid.view().contains("○ • ○"));
    }

    #[test]
    fn test_empty_columns_render_placeholder() {
        let grid: Model<MapRecord> = Model::new(Vec::new());
        assert_eq!(grid.columns().len(), 1);
    }

    #[tokio::test]
    async fn test_sort_on_placeholder_column_clears() {
        let mut grid: Model<MapRecord> = Model::new(Vec::new()).focused(true);
        grid.set_state(PageState::new().with_sort(SortState::Ascending("x".into())));
        let cmd = grid.update(&key(KeyCode::Char('s'))).expect("command");
        let msg = resolve(cmd).await;
        let state = &msg.downcast_ref::<PageStateMsg>().unwrap().state;
        assert_eq!(state.sort, SortState::Unsorted);
    }

    #[test]
    fn test_skeleton_tick_ignored_when_not_loading() {
        let mut grid = grid();
        let tick: Msg = Box::new(skeleton::Model::new().tick_msg());
        assert!(grid.update(&tick).is_none());
    }
}
