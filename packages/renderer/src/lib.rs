//! # Wirecraft Renderer
//!
//! Emits section markup from stored content. This is NOT a general HTML
//! compiler: it renders the fixed template catalog, deterministically, with
//! every piece of user text passing through one escaping helper at the
//! moment of interpolation.
//!
//! The full view is re-rendered from the store after every mutation; there
//! is no diffing. Page size tops out at a few dozen sections, so a full
//! re-render stays cheap.

mod context;
mod section;

pub use section::{render_canvas, render_page, render_section, RenderOptions};
