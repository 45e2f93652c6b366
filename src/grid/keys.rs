//! Key bindings for the data grid.

use crate::key::{self, KeyMap as KeyMapTrait};

/// Key bindings for grid navigation and actions.
///
/// Every binding can be replaced; the defaults combine arrow keys with
/// vim-style letters.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::grid::KeyMap;
/// use bubbletea_datagrid::key;
///
/// let mut keymap = KeyMap::default();
/// keymap.remove = key::new_binding(vec![
///     key::with_keys_str(&["backspace"]),
///     key::with_help("⌫", "remove row"),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the row cursor up. Default: Up, 'k'.
    pub row_up: key::Binding,
    /// Move the row cursor down. Default: Down, 'j'.
    pub row_down: key::Binding,
    /// Move the row cursor to the first row. Default: Home, 'g'.
    pub goto_top: key::Binding,
    /// Move the row cursor to the last row. Default: End, 'G'.
    pub goto_bottom: key::Binding,
    /// Focus the previous column. Default: Left, 'h'.
    pub prev_column: key::Binding,
    /// Focus the next column. Default: Right, 'l'.
    pub next_column: key::Binding,
    /// Toggle sort on the focused column. Default: 's', Enter.
    pub sort: key::Binding,
    /// Remove the selected row. Default: 'd', 'x', Delete.
    pub remove: key::Binding,
    /// Go to the previous page. Default: PageUp, 'b'.
    pub prev_page: key::Binding,
    /// Go to the next page. Default: PageDown, 'f'.
    pub next_page: key::Binding,
    /// Cycle the page size. Default: 'r'.
    pub page_size: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            row_up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            row_down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            goto_top: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "go to start"),
            ]),
            goto_bottom: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "go to end"),
            ]),
            prev_column: key::new_binding(vec![
                key::with_keys_str(&["left", "h"]),
                key::with_help("←/h", "prev column"),
            ]),
            next_column: key::new_binding(vec![
                key::with_keys_str(&["right", "l"]),
                key::with_help("→/l", "next column"),
            ]),
            sort: key::new_binding(vec![
                key::with_keys_str(&["s", "enter"]),
                key::with_help("s/enter", "sort column"),
            ]),
            remove: key::new_binding(vec![
                key::with_keys_str(&["d", "x", "delete"]),
                key::with_help("d/x/del", "remove row"),
            ]),
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "b"]),
                key::with_help("pgup/b", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "f"]),
                key::with_help("pgdn/f", "next page"),
            ]),
            page_size: key::new_binding(vec![
                key::with_keys_str(&["r"]),
                key::with_help("r", "rows per page"),
            ]),
        }
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.row_up, &self.row_down, &self.sort, &self.remove]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.row_up,
                &self.row_down,
                &self.goto_top,
                &self.goto_bottom,
            ],
            vec![&self.prev_column, &self.next_column, &self.sort],
            vec![&self.prev_page, &self.next_page, &self.page_size],
            vec![&self.remove],
        ]
    }
}
