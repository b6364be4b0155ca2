//! Core story data model: scenes, choices, effects, and unlock rules.
//!
//! Everything here is static narrative data. Records are immutable once
//! registered and carry no references to mutable session state; conditions
//! and actions are modelled as data variants so the engine can inspect,
//! replay, and test them without executing opaque callbacks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The state-mutating effect a choice performs when selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceAction {
    /// Move the player to another scene.
    Navigate { scene: String },
    /// Add an item to the player's collection.
    Collect { item: String },
    /// Throw away all progression state and return to the start scene.
    Restart,
    /// Run several effects in order. Scene content rarely needs this; it
    /// exists so compound choices stay inspectable data.
    Sequence { steps: Vec<ChoiceAction> },
}

/// Visibility gate for a choice, evaluated against an immutable snapshot of
/// the progression state on every render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceCondition {
    /// No gate; the choice is always offered.
    #[default]
    Always,
    /// Visible once the given scene id has been unlocked by item thresholds.
    SecretUnlocked { scene: String },
    /// Visible once the given item has been collected.
    HasItem { item: String },
    /// Visible once at least `count` distinct items have been collected.
    MinItems { count: usize },
}

/// One selectable option offered by a scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub action: ChoiceAction,
    #[serde(default)]
    pub condition: ChoiceCondition,
    /// Item id this choice grants, recorded for traceability and tests.
    /// Not enforced by the type; the action is what actually grants it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
}

impl Choice {
    /// A plain navigation choice.
    pub fn navigate(text: &str, scene: &str) -> Self {
        Self {
            text: text.to_string(),
            action: ChoiceAction::Navigate {
                scene: scene.to_string(),
            },
            condition: ChoiceCondition::Always,
            reward: None,
        }
    }

    /// A collection choice; records the granted item as its reward.
    pub fn collect(text: &str, item: &str) -> Self {
        Self {
            text: text.to_string(),
            action: ChoiceAction::Collect {
                item: item.to_string(),
            },
            condition: ChoiceCondition::Always,
            reward: Some(item.to_string()),
        }
    }

    /// A restart choice.
    pub fn restart(text: &str) -> Self {
        Self {
            text: text.to_string(),
            action: ChoiceAction::Restart,
            condition: ChoiceCondition::Always,
            reward: None,
        }
    }

    /// Attach a visibility condition.
    pub fn when(mut self, condition: ChoiceCondition) -> Self {
        self.condition = condition;
        self
    }
}

/// Side effect applied exactly once per entry into a scene, before choices
/// are resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnterEffect {
    /// Append extra lines beneath the scene body (course listings etc.).
    Announce { lines: Vec<String> },
}

/// A node in the narrative graph: a screen of content plus its choices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub body: String,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_enter: Option<EnterEffect>,
}

impl Scene {
    pub fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            choices: Vec::new(),
            on_enter: None,
        }
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn with_on_enter(mut self, effect: EnterEffect) -> Self {
        self.on_enter = Some(effect);
        self
    }
}

/// One row of the unlock configuration table: crossing `threshold` collected
/// items reveals `unlocks` and emits `message` after `notice_delay_ms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnlockRule {
    pub threshold: usize,
    pub unlocks: String,
    pub message: String,
    #[serde(default)]
    pub notice_delay_ms: u64,
}

/// Display metadata for a collectible item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemEntry {
    pub name: String,
    pub flavor: String,
}

/// Catalog of collectible items: display names and collection flavor lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemCatalog {
    entries: HashMap<String, ItemEntry>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, id: &str, name: &str, flavor: &str) -> Self {
        self.entries.insert(
            id.to_string(),
            ItemEntry {
                name: name.to_string(),
                flavor: flavor.to_string(),
            },
        );
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Display name for an item; unknown ids fall back to the raw id.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.entries.get(id).map(|e| e.name.as_str()).unwrap_or(id)
    }

    /// Flavor line shown when an item is collected. Unknown ids get a
    /// generic templated line instead of an error.
    pub fn flavor_line(&self, id: &str) -> String {
        match self.entries.get(id) {
            Some(entry) => entry.flavor.clone(),
            None => format!("You obtained: {}", id),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
