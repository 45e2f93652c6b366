//! Loading placeholder for the data grid body.
//!
//! While the caller fetches data, the grid swaps its body for this
//! skeleton: a block of shimmer rows with one placeholder cell per
//! column. The shimmer animates by cycling through fill frames on a
//! timer tick, with the same message discipline the classic spinner
//! uses: each instance has a unique id and a tag counter, and rejects
//! tick messages that belong to another instance or arrive out of
//! order.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datagrid::skeleton::Model;
//!
//! let skeleton = Model::new().with_widths(vec![8, 5, 10]).with_rows(2);
//! let view = skeleton.view();
//! assert_eq!(view.lines().count(), 2);
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Width used for columns that are sized to content.
const DEFAULT_CELL_WIDTH: usize = 8;

/// A shimmer animation: the fill characters to cycle through and the
/// frame rate.
#[derive(Debug, Clone)]
pub struct Shimmer {
    /// Fill characters, one per frame.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub fps: Duration,
}

/// Soft pulse between light and medium shade blocks.
pub static PULSE: Lazy<Shimmer> = Lazy::new(|| Shimmer {
    frames: vec!["░".to_string(), "▒".to_string()],
    fps: Duration::from_millis(500),
});

/// Full fade cycle through the shade blocks.
pub static FADE: Lazy<Shimmer> = Lazy::new(|| Shimmer {
    frames: vec![
        "░".to_string(),
        "▒".to_string(),
        "▓".to_string(),
        "▒".to_string(),
    ],
    fps: Duration::from_millis(250),
});

/// Message that advances a skeleton's shimmer by one frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// When the tick fired.
    pub time: std::time::SystemTime,
    /// Identifier of the skeleton this tick belongs to.
    pub id: i64,
    tag: i64,
}

/// The loading placeholder component.
#[derive(Debug)]
pub struct Model {
    /// Shimmer animation settings.
    pub shimmer: Shimmer,
    /// Style applied to every placeholder cell.
    pub style: Style,
    widths: Vec<usize>,
    rows: usize,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Model {
    /// Creates a skeleton with one default-width column and three rows.
    pub fn new() -> Self {
        Self {
            shimmer: PULSE.clone(),
            style: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            widths: vec![DEFAULT_CELL_WIDTH],
            rows: 3,
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// Sets per-column widths (builder pattern). A zero width falls back
    /// to the default cell width.
    pub fn with_widths(mut self, widths: Vec<usize>) -> Self {
        self.set_widths(widths);
        self
    }

    /// Sets the number of placeholder rows (builder pattern), minimum
    /// one.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Sets the shimmer animation (builder pattern).
    pub fn with_shimmer(mut self, shimmer: Shimmer) -> Self {
        self.shimmer = shimmer;
        self
    }

    /// Sets the cell style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replaces the per-column widths. An empty list is replaced with a
    /// single default-width column.
    pub fn set_widths(&mut self, widths: Vec<usize>) {
        self.widths = if widths.is_empty() {
            vec![DEFAULT_CELL_WIDTH]
        } else {
            widths
        };
    }

    /// Returns the number of placeholder columns.
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Returns this skeleton's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Creates a tick message addressed to this skeleton.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            time: std::time::SystemTime::now(),
            id: self.id,
            tag: self.tag,
        }
    }

    /// Returns the command that starts the shimmer animation.
    pub fn start(&self) -> Cmd {
        self.tick()
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let fps = self.shimmer.fps;
        bubbletea_tick(fps, move |_| {
            Box::new(TickMsg {
                time: std::time::SystemTime::now(),
                id,
                tag,
            }) as Msg
        })
    }

    /// Advances the shimmer on matching tick messages.
    ///
    /// Ticks addressed to another instance, or carrying a stale tag, are
    /// rejected so a skeleton never animates faster than its frame rate.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id > 0 && tick_msg.id != self.id {
                return None;
            }
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return None;
            }

            self.frame = (self.frame + 1) % self.shimmer.frames.len().max(1);
            self.tag += 1;
            return Some(self.tick());
        }
        None
    }

    /// Renders the placeholder block.
    pub fn view(&self) -> String {
        let fill = self
            .shimmer
            .frames
            .get(self.frame)
            .map(String::as_str)
            .unwrap_or("░");
        let row: Vec<String> = self
            .widths
            .iter()
            .map(|&w| {
                let w = if w == 0 { DEFAULT_CELL_WIDTH } else { w };
                self.style.clone().inline(true).render(&fill.repeat(w))
            })
            .collect();
        let row = row.join(crate::head::CELL_GAP);
        vec![row; self.rows].join("\n")
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new();
        let cmd = model.tick();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
