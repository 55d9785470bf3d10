//! Stale-voiceover tracking.
//!
//! Saving a changed piece of subtitled content invalidates its recorded
//! audio. Editors report the affected content id here; the owning form drains
//! the list when it assembles the "needs update" flags for its upstream
//! mutation.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, order-preserving, deduplicated record of content ids whose
/// voiceovers need re-recording. Clones share the same underlying list.
#[derive(Clone, Default)]
pub struct StaleAudioTracker {
    ids: Rc<RefCell<Vec<String>>>,
}

impl StaleAudioTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `content_id` as needing a fresh voiceover. Marking an id twice
    /// keeps its original position.
    pub fn mark(&self, content_id: &str) {
        let mut ids = self.ids.borrow_mut();
        if !ids.iter().any(|id| id == content_id) {
            tracing::debug!(content_id, "voiceover marked stale");
            ids.push(content_id.to_string());
        }
    }

    /// Snapshot of the stale ids, in marking order.
    pub fn stale_ids(&self) -> Vec<String> {
        self.ids.borrow().clone()
    }

    /// Take the stale ids, leaving the tracker empty.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.ids.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_are_deduplicated_in_order() {
        let tracker = StaleAudioTracker::new();
        tracker.mark("hint_1");
        tracker.mark("explanation");
        tracker.mark("hint_1");
        assert_eq!(tracker.stale_ids(), vec!["hint_1", "explanation"]);
    }

    #[test]
    fn clones_share_state_and_drain_empties() {
        let tracker = StaleAudioTracker::new();
        let clone = tracker.clone();
        clone.mark("hint_1");
        assert_eq!(tracker.drain(), vec!["hint_1"]);
        assert!(clone.is_empty());
    }
}
