#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datagrid/")]

//! # bubbletea-datagrid
//!
//! A paginated, sortable, deletable data grid widget for terminal
//! applications built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The grid is a presentation component in the Elm Architecture style:
//! it renders whatever records and pagination/sort state the caller
//! supplies, and turns user interactions into messages carrying complete
//! new state values. The caller stays the single source of truth: it
//! applies each emitted state to its data source (querying, sorting, and
//! slicing live there, not in the grid) and hands fresh inputs back.
//!
//! - **Grid**: header, record rows with a synthetic delete column, and
//!   an optional pagination footer
//! - **Head**: sortable column headers with focus and sort indicators
//! - **Skeleton**: animated placeholder shown while the caller loads
//!   data
//!
//! Supporting modules provide caller-owned pagination/sort state
//! ([`pagination::PageState`]), typed records ([`record::Record`]), and
//! type-safe key bindings ([`key`]).
//!
//! ## Quick Start
//!
//! Add bubbletea-datagrid to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bubbletea-datagrid = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The grid slots into a model's `update` like any other component. The
//! two messages it emits, [`grid::PageStateMsg`] and
//! [`grid::RemoveRowMsg`], are handled by the parent, which owns the
//! data:
//!
//! ```rust
//! use bubbletea_datagrid::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     rows: Vec<MapRecord>,
//!     grid: Grid<MapRecord>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let rows = vec![
//!             MapRecord::new(1).field("name", "Ada").field("age", 36),
//!             MapRecord::new(2).field("name", "Grace").field("age", 85),
//!         ];
//!         let mut grid = Grid::new(vec![
//!             Column::new("name", "Name").with_width(10),
//!             Column::new("age", "Age").with_width(5).with_align(Align::Right),
//!         ])
//!         .with_records(rows.clone())
//!         .with_state(PageState::new().with_total(rows.len()))
//!         .with_pagination(true);
//!         let cmd = grid.focus();
//!         (Self { rows, grid }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(change) = msg.downcast_ref::<PageStateMsg>() {
//!             // Re-query the data source here, then:
//!             self.grid.set_state(change.state.clone());
//!             return None;
//!         }
//!         if let Some(removed) = msg.downcast_ref::<RemoveRowMsg<i64>>() {
//!             self.rows.retain(|r| r.id() != removed.row);
//!             self.grid.set_records(self.rows.clone());
//!             return None;
//!         }
//!         self.grid.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.grid.view()
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! Grid actions are declared through the type-safe binding system in the
//! [`key`] module and can be rebound per instance:
//!
//! ```rust
//! use bubbletea_datagrid::grid::KeyMap;
//! use bubbletea_datagrid::key;
//!
//! let mut keymap = KeyMap::default();
//! keymap.sort = key::new_binding(vec![
//!     key::with_keys_str(&["o"]),
//!     key::with_help("o", "order by column"),
//! ]);
//! ```
//!
//! The grid's [`grid::KeyMap`] implements [`key::KeyMap`], so its
//! bindings can be rendered by any help view that consumes that trait.
//!
//! ## Component Overview
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `Grid` | Paginated, sortable data table | Record listings, admin panels |
//! | `Head` | Sortable column header row | Standalone table headers |
//! | `Skeleton` | Shimmering loading placeholder | Async data fetches |

pub mod grid;
pub mod head;
pub mod key;
pub mod pagination;
pub mod record;
pub mod skeleton;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one ignores
/// it. `focus()` may return a command for initialization work such as
/// starting an animation.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::prelude::*;
///
/// let mut grid: Grid<MapRecord> = Grid::new(vec![Column::new("name", "Name")]);
/// assert!(!grid.focused());
///
/// grid.focus();
/// assert!(grid.focused());
///
/// grid.blur();
/// assert!(!grid.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use grid::{
    KeyMap as GridKeyMap, Model as Grid, PageStateMsg, RemoveRowMsg, Styles as GridStyles,
    DELETE_COLUMN,
};
pub use head::{Align, Column, Model as Head, Styles as HeadStyles};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use pagination::{
    parse_page_size, PageSizeError, PageState, SortState, Type as PaginationType,
    PAGE_SIZE_OPTIONS,
};
pub use record::{MapRecord, Record};
pub use skeleton::{Model as Skeleton, Shimmer, TickMsg as SkeletonTickMsg, FADE, PULSE};

/// Prelude module for convenient imports.
///
/// Re-exports the types needed by a typical grid integration with a
/// single `use` statement.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::prelude::*;
///
/// let grid = Grid::new(vec![Column::new("name", "Name")])
///     .with_records(vec![MapRecord::new(1).field("name", "Ada")]);
/// assert_eq!(grid.records().len(), 1);
/// ```
pub mod prelude {
    pub use crate::grid::{
        KeyMap as GridKeyMap, Model as Grid, PageStateMsg, RemoveRowMsg, Styles as GridStyles,
        DELETE_COLUMN,
    };
    pub use crate::head::{Align, Column, Model as Head, Styles as HeadStyles};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::pagination::{
        parse_page_size, PageSizeError, PageState, SortState, Type as PaginationType,
        PAGE_SIZE_OPTIONS,
    };
    pub use crate::record::{MapRecord, Record};
    pub use crate::skeleton::{Model as Skeleton, Shimmer, TickMsg as SkeletonTickMsg, FADE, PULSE};
    pub use crate::Component;
}
