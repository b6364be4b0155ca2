use thiserror::Error;

/// Errors that can arise while building or traversing the story graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    /// Returned when a navigation target is absent from the registry.
    /// Recoverable: callers report it inline and leave session state untouched.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// Returned when two scenes are registered under the same identifier.
    /// Duplicate registration is a content bug and is surfaced at startup.
    #[error("duplicate scene id: {0}")]
    DuplicateScene(String),

    /// Returned when the configured start scene is not in the registry.
    #[error("unknown start scene: {0}")]
    UnknownStartScene(String),

    /// Returned by graph validation when a choice or unlock rule points at
    /// a scene id that was never registered.
    #[error("dangling scene reference: {source_id} -> {target_id}")]
    DanglingTarget {
        source_id: String,
        target_id: String,
    },
}
