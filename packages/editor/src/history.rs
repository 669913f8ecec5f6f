//! # History Manager
//!
//! A bounded linear timeline of section-list snapshots with a cursor.
//!
//! ## Design
//!
//! - Every entry is an independent deep copy; no entry shares mutable
//!   structure with the live store or another entry
//! - A new snapshot after an undo truncates the abandoned redo branch
//! - Capacity eviction drops entries from the head in batches (down to
//!   `capacity - evict_slack`); the entry the cursor points to always
//!   survives
//! - Undo/redo hand back deep copies, so subsequent live edits cannot
//!   corrupt the timeline

use std::time::{SystemTime, UNIX_EPOCH};
use wirecraft_model::Section;

/// Capacity bounds for the history log.
///
/// `evict_slack` controls how far below capacity a head eviction trims. The
/// hard contract is only that size stays at or under `capacity` and the
/// cursor's entry survives; the slack is a batching choice.
#[derive(Debug, Clone, Copy)]
pub struct HistoryPolicy {
    pub capacity: usize,
    pub evict_slack: usize,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            capacity: 50,
            evict_slack: 10,
        }
    }
}

/// An immutable snapshot of the section list at one point in time
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub sections: Vec<Section>,
    pub timestamp: u64,
}

/// Bounded undo/redo timeline
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    policy: HistoryPolicy,
}

impl History {
    /// New timeline seeded with one empty-state entry, cursor at 0
    pub fn new() -> Self {
        Self::with_policy(HistoryPolicy::default())
    }

    pub fn with_policy(policy: HistoryPolicy) -> Self {
        Self {
            entries: vec![HistoryEntry {
                sections: Vec::new(),
                timestamp: now_millis(),
            }],
            cursor: 0,
            policy,
        }
    }

    /// Record a deep copy of the current sections as the new "now".
    ///
    /// Entries after the cursor are discarded first: a new action after an
    /// undo erases the redo branch.
    pub fn snapshot(&mut self, sections: &[Section]) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            sections: sections.to_vec(),
            timestamp: now_millis(),
        });
        self.cursor = self.entries.len() - 1;
        self.evict();
    }

    /// Step back one entry; `None` when already at the oldest.
    ///
    /// The returned sections are an independent deep copy of the entry.
    pub fn undo(&mut self) -> Option<Vec<Section>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].sections.clone())
    }

    /// Step forward one entry; `None` when already at the newest
    pub fn redo(&mut self) -> Option<Vec<Section>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].sections.clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry the cursor currently points to
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    fn evict(&mut self) {
        if self.entries.len() <= self.policy.capacity {
            return;
        }
        let target = self
            .policy
            .capacity
            .saturating_sub(self.policy.evict_slack)
            .max(1);
        let drop = (self.entries.len() - target).min(self.cursor);
        if drop == 0 {
            return;
        }
        self.entries.drain(..drop);
        self.cursor -= drop;
        tracing::debug!(dropped = drop, retained = self.entries.len(), "evicted history head");
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirecraft_model::{Content, FieldValue, Section, TemplateKind, Variant};

    fn section_titled(title: &str) -> Section {
        let mut content = Content::new();
        content.insert("title".into(), FieldValue::text(title));
        Section::new(TemplateKind::ContentCta, Variant::Light, content)
    }

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().filter_map(|s| s.text_field("title")).collect()
    }

    #[test]
    fn test_initial_state() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.current().sections.is_empty());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new();
        let before = vec![section_titled("v1")];
        history.snapshot(&before);
        history.snapshot(&[section_titled("v1"), section_titled("v2")]);

        let undone = history.undo().unwrap();
        assert_eq!(titles(&undone), vec!["v1"]);

        // undo followed immediately by redo restores the pre-undo state
        let redone = history.redo().unwrap();
        assert_eq!(titles(&redone), vec!["v1", "v2"]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut history = History::new();
        assert!(history.undo().is_none());
        history.snapshot(&[section_titled("v1")]);
        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_snapshot_after_undo_erases_redo_branch() {
        let mut history = History::new();
        history.snapshot(&[section_titled("v1")]);
        history.snapshot(&[section_titled("v2")]);
        history.undo().unwrap();
        assert!(history.can_redo());

        history.snapshot(&[section_titled("v3")]);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(titles(&history.current().sections), vec!["v3"]);
    }

    #[test]
    fn test_restored_copy_does_not_alias_entry() {
        let mut history = History::new();
        history.snapshot(&[section_titled("original")]);
        history.snapshot(&[section_titled("edited")]);

        let mut restored = history.undo().unwrap();
        // mutate the restored copy as a live store would
        restored[0]
            .content
            .insert("title".into(), FieldValue::text("mutated live"));

        // the stored entry is unaffected
        let redone_back = history.redo().unwrap();
        assert_eq!(titles(&redone_back), vec!["edited"]);
        history.undo().unwrap();
        assert_eq!(titles(&history.current().sections), vec!["original"]);
    }

    #[test]
    fn test_capacity_bound_after_many_snapshots() {
        let mut history = History::new();
        for i in 0..100 {
            history.snapshot(&[section_titled(&format!("v{}", i))]);
        }

        assert!(history.len() <= 50);
        // the cursor still points at the most recent entry
        assert_eq!(history.cursor(), history.len() - 1);
        assert_eq!(titles(&history.current().sections), vec!["v99"]);
    }

    #[test]
    fn test_eviction_trims_in_batches() {
        let policy = HistoryPolicy::default();
        let mut history = History::with_policy(policy);
        // initial entry + 50 snapshots = 51 > capacity, triggering one trim
        for i in 0..50 {
            history.snapshot(&[section_titled(&format!("v{}", i))]);
        }
        assert_eq!(history.len(), policy.capacity - policy.evict_slack);
        assert_eq!(titles(&history.current().sections), vec!["v49"]);
    }

    #[test]
    fn test_eviction_never_drops_cursor_entry() {
        let mut history = History::with_policy(HistoryPolicy {
            capacity: 3,
            evict_slack: 2,
        });
        for i in 0..20 {
            history.snapshot(&[section_titled(&format!("v{}", i))]);
        }
        assert!(history.len() <= 3);
        assert_eq!(titles(&history.current().sections), vec!["v19"]);
        // timeline remains traversable from the surviving entries
        while history.can_undo() {
            history.undo().unwrap();
        }
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_enablement_follows_cursor() {
        let mut history = History::new();
        history.snapshot(&[section_titled("v1")]);
        history.snapshot(&[section_titled("v2")]);

        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.undo().unwrap();
        assert!(history.can_undo());
        assert!(history.can_redo());

        history.undo().unwrap();
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }
}
