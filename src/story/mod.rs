//! Static narrative data: scene records, the registry that keys them, and
//! the canonical portfolio content. Nothing in this module is mutable after
//! startup; the engine layer owns all session state.

pub mod content;
pub mod errors;
pub mod registry;
pub mod types;

pub use content::{
    portfolio_story, HIDDEN_SCENE_ID, HIDDEN_THRESHOLD, START_SCENE_ID, ULTIMATE_SCENE_ID,
    ULTIMATE_THRESHOLD,
};
pub use errors::StoryError;
pub use registry::SceneRegistry;
pub use types::{
    Choice, ChoiceAction, ChoiceCondition, EnterEffect, ItemCatalog, ItemEntry, Scene, UnlockRule,
};

/// A complete story: the scene registry plus the item catalog, the unlock
/// configuration table, and the start scene id. Supplied once to each
/// session and never mutated by the engine.
#[derive(Debug, Clone)]
pub struct Story {
    start_scene: String,
    registry: SceneRegistry,
    items: ItemCatalog,
    unlock_rules: Vec<UnlockRule>,
}

impl Story {
    pub fn new(start_scene: &str, items: ItemCatalog, unlock_rules: Vec<UnlockRule>) -> Self {
        Self {
            start_scene: start_scene.to_string(),
            registry: SceneRegistry::new(),
            items,
            unlock_rules,
        }
    }

    /// Register a scene. Duplicate ids are a content bug and bubble up to
    /// whoever is assembling the story.
    pub fn add_scene(&mut self, scene: Scene) -> Result<(), StoryError> {
        self.registry.register(scene)
    }

    pub fn start_scene(&self) -> &str {
        &self.start_scene
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn unlock_rules(&self) -> &[UnlockRule] {
        &self.unlock_rules
    }

    /// Check graph integrity: the start scene must exist, every navigation
    /// target must resolve, and every unlock rule must point at a scene.
    pub fn validate(&self) -> Result<(), StoryError> {
        if !self.registry.contains(&self.start_scene) {
            return Err(StoryError::UnknownStartScene(self.start_scene.clone()));
        }
        self.registry.validate()?;
        for rule in &self.unlock_rules {
            if !self.registry.contains(&rule.unlocks) {
                return Err(StoryError::DanglingTarget {
                    source_id: format!("unlock@{}", rule.threshold),
                    target_id: rule.unlocks.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_start_scene() {
        let story = Story::new("nowhere", ItemCatalog::new(), Vec::new());
        assert_eq!(
            story.validate().unwrap_err(),
            StoryError::UnknownStartScene("nowhere".to_string())
        );
    }

    #[test]
    fn validate_rejects_dangling_unlock_rule() {
        let mut story = Story::new(
            "start",
            ItemCatalog::new(),
            vec![UnlockRule {
                threshold: 1,
                unlocks: "vault".to_string(),
                message: "open".to_string(),
                notice_delay_ms: 0,
            }],
        );
        story.add_scene(Scene::new("start", "Start", "Here.")).unwrap();
        assert!(matches!(
            story.validate(),
            Err(StoryError::DanglingTarget { .. })
        ));
    }
}
