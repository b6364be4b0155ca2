//! Scene-graph progression engine: session state, choice resolution,
//! unlock thresholds, and command dispatch.
//!
//! The engine is fully synchronous; every operation completes within the
//! call that made it. Anything time-based (delayed unlock notices) is only
//! described here and scheduled by the hosting frontend.

pub mod commands;
pub mod resolver;
pub mod session;
pub mod state;
pub mod unlock;

pub use commands::{parse_command, Command};
pub use resolver::{visible_choices, VisibleChoice};
pub use session::{
    ChoiceLabel, DelayedNotice, Notice, NoticeStyle, SceneView, Session, Turn,
};
pub use state::ProgressState;
pub use unlock::newly_crossed;
