//! Scene registry: the read-only id -> scene map behind all navigation.

use std::collections::HashMap;

use crate::story::errors::StoryError;
use crate::story::types::{ChoiceAction, Scene};

/// Immutable-after-startup mapping from scene identifier to scene record.
///
/// Populated once while the story is assembled; duplicate ids are rejected
/// at registration so "last write wins" can never occur silently.
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    scenes: HashMap<String, Scene>,
    order: Vec<String>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scene keyed by its identifier.
    pub fn register(&mut self, scene: Scene) -> Result<(), StoryError> {
        if self.scenes.contains_key(&scene.id) {
            return Err(StoryError::DuplicateScene(scene.id));
        }
        self.order.push(scene.id.clone());
        self.scenes.insert(scene.id.clone(), scene);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Walk every choice action and report the first navigation target that
    /// is not a registered scene. Run at startup and by `inspect`.
    pub fn validate(&self) -> Result<(), StoryError> {
        for id in &self.order {
            let scene = &self.scenes[id];
            for choice in &scene.choices {
                check_action(self, id, &choice.action)?;
            }
        }
        Ok(())
    }
}

fn check_action(registry: &SceneRegistry, source_id: &str, action: &ChoiceAction) -> Result<(), StoryError> {
    match action {
        ChoiceAction::Navigate { scene } => {
            if !registry.contains(scene) {
                return Err(StoryError::DanglingTarget {
                    source_id: source_id.to_string(),
                    target_id: scene.clone(),
                });
            }
        }
        ChoiceAction::Sequence { steps } => {
            for step in steps {
                check_action(registry, source_id, step)?;
            }
        }
        ChoiceAction::Collect { .. } | ChoiceAction::Restart => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::types::Choice;

    #[test]
    fn register_and_get() {
        let mut registry = SceneRegistry::new();
        registry.register(Scene::new("a", "A", "First scene.")).unwrap();
        assert!(registry.get("a").is_some());
        assert!(registry.get("b").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = SceneRegistry::new();
        registry.register(Scene::new("a", "A", "First.")).unwrap();
        let err = registry.register(Scene::new("a", "A again", "Second.")).unwrap_err();
        assert_eq!(err, StoryError::DuplicateScene("a".to_string()));
        // Original record survives.
        assert_eq!(registry.get("a").unwrap().title, "A");
    }

    #[test]
    fn validate_reports_dangling_navigation() {
        let mut registry = SceneRegistry::new();
        registry
            .register(Scene::new("a", "A", "First.").with_choice(Choice::navigate("Away", "missing")))
            .unwrap();
        let err = registry.validate().unwrap_err();
        assert_eq!(
            err,
            StoryError::DanglingTarget {
                source_id: "a".to_string(),
                target_id: "missing".to_string(),
            }
        );
    }

    #[test]
    fn validate_descends_into_sequences() {
        let mut registry = SceneRegistry::new();
        let compound = Choice {
            text: "Grab and go".to_string(),
            action: ChoiceAction::Sequence {
                steps: vec![
                    ChoiceAction::Collect {
                        item: "coin".to_string(),
                    },
                    ChoiceAction::Navigate {
                        scene: "nowhere".to_string(),
                    },
                ],
            },
            condition: Default::default(),
            reward: None,
        };
        registry.register(Scene::new("a", "A", "First.").with_choice(compound)).unwrap();
        assert!(registry.validate().is_err());
    }

    #[test]
    fn ids_preserve_registration_order() {
        let mut registry = SceneRegistry::new();
        for id in ["start", "middle", "end"] {
            registry.register(Scene::new(id, id, "...")).unwrap();
        }
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["start", "middle", "end"]);
    }
}
