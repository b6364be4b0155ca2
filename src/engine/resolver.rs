//! Choice visibility filtering and stable 1-based numbering.

use crate::engine::state::ProgressState;
use crate::story::types::{Choice, ChoiceCondition, Scene};

impl ChoiceCondition {
    /// Evaluate this condition against an immutable snapshot of the state.
    pub fn is_met(&self, state: &ProgressState) -> bool {
        match self {
            ChoiceCondition::Always => true,
            ChoiceCondition::SecretUnlocked { scene } => state.unlocked.contains(scene),
            ChoiceCondition::HasItem { item } => state.collected.contains(item),
            ChoiceCondition::MinItems { count } => state.collected_count() >= *count,
        }
    }
}

/// A choice that passed its visibility condition, with the number the
/// player selects it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleChoice<'a> {
    /// 1-based selection number. Hidden choices do not consume numbers, so
    /// this is the position within the visible subsequence, not within the
    /// scene's full choice list.
    pub number: usize,
    pub choice: &'a Choice,
}

/// The ordered subsequence of a scene's choices whose condition holds,
/// numbered 1..N. Recomputed on every render: conditions can become true
/// between renders (after collecting items) with no explicit invalidation.
/// The numbering returned here is the contract shared by pointer selection
/// and numeric keyed input.
pub fn visible_choices<'a>(scene: &'a Scene, state: &ProgressState) -> Vec<VisibleChoice<'a>> {
    scene
        .choices
        .iter()
        .filter(|choice| choice.condition.is_met(state))
        .enumerate()
        .map(|(idx, choice)| VisibleChoice {
            number: idx + 1,
            choice,
        })
        .collect()
}
