//! Section content values
//!
//! A section's `content` maps field names to values. Scalar fields are plain
//! strings; repeated sub-items (columns, stats, programs, testimonials, form
//! fields) are ordered lists of small string/flag records; dropdown options
//! are a flat string list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name → value mapping for one section.
///
/// Absent keys fall back to template-defined defaults at render time.
pub type Content = BTreeMap<String, FieldValue>;

/// One sub-item of a repeated group, e.g. a single stat or form field
pub type SubItem = BTreeMap<String, SubValue>;

/// A field value in section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Scalar plain text
    Text(String),

    /// Flat list of plain strings (dropdown options)
    Options(Vec<String>),

    /// Ordered sequence of small records (columns, stats, programs, ...)
    Items(Vec<SubItem>),
}

/// A scalar inside a sub-item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubValue {
    /// Plain text (titles, labels, quotes)
    Text(String),

    /// Boolean flag (a form field's `required` marker)
    Flag(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_options(&self) -> Option<&[String]> {
        match self {
            FieldValue::Options(opts) => Some(opts),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[SubItem]> {
        match self {
            FieldValue::Items(items) => Some(items),
            _ => None,
        }
    }
}

impl SubValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SubValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SubValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for SubValue {
    fn from(s: &str) -> Self {
        SubValue::Text(s.to_string())
    }
}

impl From<String> for SubValue {
    fn from(s: String) -> Self {
        SubValue::Text(s)
    }
}

impl From<bool> for SubValue {
    fn from(b: bool) -> Self {
        SubValue::Flag(b)
    }
}
