//! Type-safe key bindings for the data grid components.
//!
//! A [`Binding`] couples one or more key presses with help text and an
//! enabled flag. Components declare their bindings in a keymap struct and
//! match incoming [`KeyMsg`] values against them, which keeps the key
//! handling declarative and lets help views render themselves from the
//! same source of truth.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datagrid::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! // Constructor style
//! let sort = Binding::new(vec![KeyCode::Char('s'), KeyCode::Enter])
//!     .with_help("s/enter", "sort column");
//!
//! // Option style, with string key specs
//! let next_page = key::new_binding(vec![
//!     key::with_keys_str(&["pgdown", "f"]),
//!     key::with_help("pgdn/f", "next page"),
//! ]);
//!
//! assert_eq!(sort.help().desc, "sort column");
//! assert!(next_page.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text for a key binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key(s), e.g. `"↑/k"`.
    pub key: String,
    /// Description of the action, e.g. `"up"`.
    pub desc: String,
}

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// A key binding: the key presses that trigger it, its help text, and
/// whether it is currently enabled.
///
/// Disabled bindings never match and are skipped by help views.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from plain key codes (no modifiers).
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(KeyPress::from).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns whether the binding is enabled.
    ///
    /// A binding with no keys is treated as disabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|k| {
            if k.code != msg.key {
                return false;
            }
            if k.modifiers.is_empty() {
                // Uppercase characters arrive with the shift modifier set
                // on some terminals.
                msg.modifiers.is_empty() || msg.modifiers == KeyModifiers::SHIFT
            } else {
                k.modifiers == msg.modifiers
            }
        })
    }
}

/// A configuration option for [`new_binding`].
pub enum BindingOpt {
    /// Sets the key presses.
    Keys(Vec<KeyPress>),
    /// Sets the help text.
    WithHelp(Help),
    /// Marks the binding disabled.
    Disabled,
}

/// Creates a binding from a list of options.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::key;
///
/// let quit = key::new_binding(vec![
///     key::with_keys_str(&["q", "ctrl+c"]),
///     key::with_help("q", "quit"),
/// ]);
/// assert_eq!(quit.keys().len(), 2);
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding {
        keys: Vec::new(),
        help: Help::default(),
        disabled: false,
    };
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: sets the key presses from [`KeyPress`] values.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    BindingOpt::Keys(keys)
}

/// Option: sets the key presses from string specs.
///
/// Accepts names like `"up"`, `"pgdown"`, `"enter"`, single characters,
/// and modifier combinations like `"ctrl+c"` or `"alt+x"`. Specs that do
/// not parse are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option: sets the help text.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Option: marks the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether a key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether a key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// The key bindings a component exposes to help views.
///
/// `short_help` returns the essential bindings for a one-line help bar;
/// `full_help` returns all bindings grouped into columns.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help view, one inner `Vec` per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(spec: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = spec;
    loop {
        let Some((prefix, tail)) = rest.split_once('+') else {
            break;
        };
        match prefix {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
        rest = tail;
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        s => {
            let mut chars = s.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyPress { code, modifiers })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_msg(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Char('s'), KeyCode::Enter]);
        assert!(b.matches(&key_msg(KeyCode::Char('s'))));
        assert!(b.matches(&key_msg(KeyCode::Enter)));
        assert!(!b.matches(&key_msg(KeyCode::Char('x'))));
    }

    #[test]
    fn test_binding_matches_modifiers() {
        let b = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert!(!b.matches(&key_msg(KeyCode::Char('c'))));
    }

    #[test]
    fn test_shifted_char_matches_plain_binding() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Char('d')]);
        b.set_enabled(false);
        assert!(!b.matches(&key_msg(KeyCode::Char('d'))));
        assert!(!b.enabled());
    }

    #[test]
    fn test_empty_binding_is_disabled() {
        let b = Binding::new(vec![]);
        assert!(!b.enabled());
    }

    #[test]
    fn test_new_binding_options() {
        let b = new_binding(vec![
            with_keys_str(&["pgup", "left", "h"]),
            with_help("←/h", "prev page"),
        ]);
        assert_eq!(b.keys().len(), 3);
        assert_eq!(b.help().key, "←/h");
        assert_eq!(b.help().desc, "prev page");
    }

    #[test]
    fn test_with_keys_str_skips_unparseable() {
        let b = new_binding(vec![with_keys_str(&["up", "not-a-key", "k"])]);
        assert_eq!(b.keys().len(), 2);
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("pgdown"), Some(KeyPress::from(KeyCode::PageDown)));
        assert_eq!(parse_key("space"), Some(KeyPress::from(KeyCode::Char(' '))));
        assert_eq!(
            parse_key("alt+enter"),
            Some(KeyPress::from((KeyCode::Enter, KeyModifiers::ALT)))
        );
        assert_eq!(parse_key("bogus"), None);
    }

    #[test]
    fn test_matches_helpers() {
        let a = Binding::new(vec![KeyCode::Up]);
        let b = Binding::new(vec![KeyCode::Down]);
        let msg = key_msg(KeyCode::Down);
        assert!(matches(&msg, &[&a, &b]));
        assert!(matches_binding(&msg, &b));
        assert!(!matches_binding(&msg, &a));
    }
}
