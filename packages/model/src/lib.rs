//! # Wirecraft Model
//!
//! Plain data types for the wireframe page: section records, their content
//! values, and the display enums (variant, viewport, layout direction).
//!
//! Content values are always plain text and plain data, never markup. The
//! render step escapes on the way into markup; the capture step strips back
//! to text on the way out. Nothing in this crate touches either direction.

mod content;
mod section;
mod viewport;

pub use content::{Content, FieldValue, SubItem, SubValue};
pub use section::{LayoutDirection, Section, SectionId, TemplateKind, Variant};
pub use viewport::Viewport;
