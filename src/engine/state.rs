//! Player progression state: position, history, collection, unlocks.

use std::collections::HashSet;

/// Mutable session data for one player.
///
/// Created once at session start, mutated in place by the session's
/// operations, and replaced wholesale by a restart. The visited, collected,
/// and unlocked sets only ever grow; the history stack is the one structure
/// that shrinks (on back-navigation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    /// Id of the scene the player is currently in. Always a registry key.
    pub current: String,
    /// Every scene id the player has entered at least once.
    pub visited: HashSet<String>,
    /// LIFO trail of previously-current scenes for back-navigation.
    pub history: Vec<String>,
    /// Distinct collected item ids; drives unlock thresholds.
    pub collected: HashSet<String>,
    /// Ordered log of every collect call, duplicates included.
    pub collection_log: Vec<String>,
    /// Scene ids revealed by crossing item thresholds.
    pub unlocked: HashSet<String>,
}

impl ProgressState {
    pub fn new(start_scene: &str) -> Self {
        Self {
            current: start_scene.to_string(),
            visited: HashSet::new(),
            history: Vec::new(),
            collected: HashSet::new(),
            collection_log: Vec::new(),
            unlocked: HashSet::new(),
        }
    }

    /// Move to `scene_id`, pushing the departed scene onto history.
    /// Self-transitions do not grow the history.
    pub fn advance_to(&mut self, scene_id: &str) {
        if self.current != scene_id {
            self.history.push(self.current.clone());
        }
        self.current = scene_id.to_string();
        self.visited.insert(scene_id.to_string());
    }

    /// Pop the most recent history entry and make it current, without
    /// re-pushing the scene being left. Returns the new current id, or
    /// None when the history is empty.
    pub fn step_back(&mut self) -> Option<String> {
        let previous = self.history.pop()?;
        self.current = previous.clone();
        self.visited.insert(previous.clone());
        Some(previous)
    }

    /// Record a collected item. The set insert is idempotent; the ordered
    /// log appends on every call regardless. Returns true when the item
    /// was new to the set.
    pub fn collect(&mut self, item_id: &str) -> bool {
        self.collection_log.push(item_id.to_string());
        self.collected.insert(item_id.to_string())
    }

    /// Record an unlocked secret scene. Returns true when newly unlocked.
    pub fn unlock(&mut self, scene_id: &str) -> bool {
        self.unlocked.insert(scene_id.to_string())
    }

    pub fn collected_count(&self) -> usize {
        self.collected.len()
    }

    /// Distinct collected items in first-collection order, for display.
    pub fn collection_display_order(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.collection_log
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .map(|id| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_pushes_history_except_self_transition() {
        let mut state = ProgressState::new("start");
        state.advance_to("start");
        assert!(state.history.is_empty());

        state.advance_to("intro");
        assert_eq!(state.history, vec!["start"]);

        state.advance_to("intro");
        assert_eq!(state.history, vec!["start"]);
    }

    #[test]
    fn step_back_pops_without_repush() {
        let mut state = ProgressState::new("start");
        state.advance_to("start");
        state.advance_to("academic");
        state.advance_to("courses_113_1");

        assert_eq!(state.step_back().as_deref(), Some("academic"));
        assert_eq!(state.current, "academic");
        assert_eq!(state.history, vec!["start"]);

        assert_eq!(state.step_back().as_deref(), Some("start"));
        assert!(state.history.is_empty());
        assert_eq!(state.step_back(), None);
        assert_eq!(state.current, "start");
    }

    #[test]
    fn collect_keeps_dual_bookkeeping() {
        let mut state = ProgressState::new("start");
        assert!(state.collect("gem"));
        assert!(!state.collect("gem"));
        assert!(state.collect("coin"));

        assert_eq!(state.collected_count(), 2);
        assert_eq!(state.collection_log, vec!["gem", "gem", "coin"]);
        assert_eq!(state.collection_display_order(), vec!["gem", "coin"]);
    }

    #[test]
    fn collected_count_is_monotone() {
        let mut state = ProgressState::new("start");
        let mut last = 0;
        for item in ["a", "b", "a", "c", "b", "d"] {
            state.collect(item);
            assert!(state.collected_count() >= last);
            last = state.collected_count();
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut state = ProgressState::new("start");
        assert!(state.unlock("vault"));
        assert!(!state.unlock("vault"));
        assert_eq!(state.unlocked.len(), 1);
    }
}
