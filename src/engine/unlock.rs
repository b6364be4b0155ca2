//! Threshold evaluation for secret-scene unlocks.
//!
//! Pure functions over the unlock configuration table; the session applies
//! the results to its state and schedules the notices.

use std::collections::HashSet;

use crate::story::types::UnlockRule;

/// Rules whose threshold is now met and whose target is not yet unlocked.
///
/// Called after every successful item collection. Crossing several
/// thresholds in one batch (collecting six items without ever pausing at
/// three) returns all of them at once; re-crossing an already-recorded
/// threshold returns nothing for it.
pub fn newly_crossed<'a>(
    rules: &'a [UnlockRule],
    collected_count: usize,
    unlocked: &HashSet<String>,
) -> Vec<&'a UnlockRule> {
    rules
        .iter()
        .filter(|rule| collected_count >= rule.threshold && !unlocked.contains(&rule.unlocks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<UnlockRule> {
        vec![
            UnlockRule {
                threshold: 3,
                unlocks: "hidden".to_string(),
                message: "hidden open".to_string(),
                notice_delay_ms: 100,
            },
            UnlockRule {
                threshold: 6,
                unlocks: "ultimate".to_string(),
                message: "ultimate open".to_string(),
                notice_delay_ms: 200,
            },
        ]
    }

    #[test]
    fn nothing_fires_below_threshold() {
        let rules = rules();
        assert!(newly_crossed(&rules, 0, &HashSet::new()).is_empty());
        assert!(newly_crossed(&rules, 2, &HashSet::new()).is_empty());
    }

    #[test]
    fn crossing_fires_once() {
        let rules = rules();
        let mut unlocked = HashSet::new();

        let fired = newly_crossed(&rules, 3, &unlocked);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].unlocks, "hidden");
        unlocked.insert("hidden".to_string());

        // Counts 4 and 5 do not re-fire the recorded threshold.
        assert!(newly_crossed(&rules, 4, &unlocked).is_empty());
        assert!(newly_crossed(&rules, 5, &unlocked).is_empty());
    }

    #[test]
    fn batch_crossing_fires_all_thresholds() {
        let rules = rules();
        let fired = newly_crossed(&rules, 6, &HashSet::new());
        let targets: Vec<_> = fired.iter().map(|r| r.unlocks.as_str()).collect();
        assert_eq!(targets, vec!["hidden", "ultimate"]);
    }
}
