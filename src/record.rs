//! Core types for the rows a data grid displays.
//!
//! A grid is generic over its row type through the [`Record`] trait:
//! a record exposes a stable typed identifier, its field keys in display
//! order, and a display string per key. The grid looks cells up through
//! these accessors instead of indexing into an untyped map, so a record
//! type and the column descriptors it is displayed with can be checked
//! against each other at compile time.
//!
//! For heterogeneous or dynamically-shaped data, [`MapRecord`] is a
//! ready-made record built from ordered key/value pairs.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datagrid::record::Record;
//!
//! #[derive(Clone)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     email: String,
//! }
//!
//! impl Record for User {
//!     type Id = u64;
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn keys(&self) -> Vec<String> {
//!         vec!["name".into(), "email".into()]
//!     }
//!
//!     fn cell(&self, key: &str) -> String {
//!         match key {
//!             "name" => self.name.clone(),
//!             "email" => self.email.clone(),
//!             _ => String::new(),
//!         }
//!     }
//! }
//! ```

use std::fmt;

/// A row of displayable data.
///
/// `keys` determines both which cells a row produces and their order;
/// `cell` produces the display string for one key, uninterpreted by the
/// grid. The identifier returned by `id` is carried verbatim in remove
/// messages so the caller can delete the row from its own store.
pub trait Record: Clone {
    /// The type of the stable row identifier.
    type Id: Clone + PartialEq + fmt::Debug + Send + 'static;

    /// Returns the row's stable unique identifier.
    fn id(&self) -> Self::Id;

    /// Returns the row's field keys in display order.
    fn keys(&self) -> Vec<String>;

    /// Returns the display string for one field key.
    ///
    /// Unknown keys should return an empty string rather than fail.
    fn cell(&self, key: &str) -> String;
}

/// A record backed by ordered key/value pairs.
///
/// Covers datasets whose shape is only known at runtime. Field order is
/// insertion order.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::record::{MapRecord, Record};
///
/// let row = MapRecord::new(42)
///     .field("name", "Ada")
///     .field("role", "engineer");
///
/// assert_eq!(row.id(), 42);
/// assert_eq!(row.keys(), vec!["name".to_string(), "role".to_string()]);
/// assert_eq!(row.cell("role"), "engineer");
/// assert_eq!(row.cell("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRecord {
    id: i64,
    fields: Vec<(String, String)>,
}

impl MapRecord {
    /// Creates an empty record with the given identifier.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    /// Appends a field (builder pattern).
    ///
    /// Setting a key that already exists replaces its value in place.
    pub fn field(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a field, replacing an existing value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for MapRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn keys(&self) -> Vec<String> {
        self.fields.iter().map(|(k, _)| k.clone()).collect()
    }

    fn cell(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}
