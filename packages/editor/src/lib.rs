//! # Wirecraft Editor
//!
//! Core editing engine for the wireframe page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: PageStore                            │
//! │  - canonical section list + viewport        │
//! │  - all mutation operations                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ history: bounded snapshot timeline          │
//! │  - deep-copied entries, cursor traversal    │
//! │  - head eviction under capacity             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: EditSession                        │
//! │  - mutate → checkpoint                      │
//! │  - undo/redo restore the store              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is the single source of truth**: rendering and export are
//!    derived views, recomputed from scratch after every mutation.
//! 2. **History never aliases**: every snapshot, undo and redo moves an
//!    independent deep copy. Later live edits cannot corrupt an entry.
//! 3. **Stale indices are benign**: index-based operations arriving after a
//!    concurrent delete are silent no-ops, not errors.

mod history;
mod session;
mod store;

pub use history::{History, HistoryEntry, HistoryPolicy};
pub use session::EditSession;
pub use store::PageStore;
