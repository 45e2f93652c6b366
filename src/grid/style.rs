//! Styles for the data grid body and footer.

use lipgloss_extras::prelude::*;

/// Styles for the grid's body rows and pagination footer.
///
/// The header row has its own styles on the head component. All defaults
/// use adaptive colors so the grid reads well on light and dark
/// terminals.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for body rows.
    pub cell: Style,
    /// Style for the selected row.
    pub selected: Style,
    /// Style for the pagination summary sentence.
    pub summary: Style,
    /// Style for the page position and page-size controls.
    pub footer: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            cell: Style::new(),
            selected: Style::new().bold(true).foreground(Color::from("212")),
            summary: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            footer: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        }
    }
}
