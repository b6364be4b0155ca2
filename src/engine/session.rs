//! One player's session: owns the progression state and exposes every
//! state-mutating operation. Operations return [`Turn`] descriptions of what
//! changed instead of rendering anything, so hosts decide when and how to
//! draw (and tests assert on returned data without a terminal).
//!
//! A session is an explicit value, not a global: hosts serving many players
//! construct one session per player over a shared [`Story`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::engine::commands::{parse_command, Command};
use crate::engine::resolver::visible_choices;
use crate::engine::state::ProgressState;
use crate::engine::unlock::newly_crossed;
use crate::logutil::escape_log;
use crate::story::types::{ChoiceAction, EnterEffect, Scene};
use crate::story::{Story, StoryError};

/// Presentation category for a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    /// Plain informational line (help text, command feedback).
    Info,
    /// Echo of the player's own input.
    Echo,
    /// Item collection flavor line.
    Reward,
    /// Secret-scene unlock announcement.
    Unlock,
    /// Recoverable error reported inline.
    Error,
}

/// One transcript line produced by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: NoticeStyle::Info,
        }
    }

    pub fn echo(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: NoticeStyle::Echo,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: NoticeStyle::Error,
        }
    }
}

/// A notice the host should append only after a delay. Fire-and-forget:
/// the engine never waits on it, and hosts must tolerate it maturing after
/// later player input (append, never overwrite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedNotice {
    pub text: String,
    pub style: NoticeStyle,
    pub delay_ms: u64,
}

/// A visible choice as rendered: its selection number and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceLabel {
    pub number: usize,
    pub text: String,
}

/// Renderable snapshot of the scene the player just entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneView {
    pub scene_id: String,
    pub title: String,
    pub body: String,
    /// Lines contributed by the scene's on-enter effect, shown below the body.
    pub extra_lines: Vec<String>,
    pub choices: Vec<ChoiceLabel>,
    /// Whether back-navigation is currently possible (history non-empty).
    pub can_go_back: bool,
    /// Whether the player is at the start scene.
    pub at_home: bool,
}

/// Everything one operation produced: at most one new scene view, plus
/// transcript lines and delayed notices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub view: Option<SceneView>,
    pub notices: Vec<Notice>,
    pub delayed: Vec<DelayedNotice>,
}

impl Turn {
    fn with_view(view: SceneView) -> Self {
        Self {
            view: Some(view),
            ..Self::default()
        }
    }

    fn with_notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Self::default()
        }
    }

    /// Fold a later turn into this one; the later view wins.
    fn merge(&mut self, other: Turn) {
        if other.view.is_some() {
            self.view = other.view;
        }
        self.notices.extend(other.notices);
        self.delayed.extend(other.delayed);
    }
}

const HELP_TEXT: &str = "Available commands:\n  \
help       - show this message\n  \
inventory  - list collected items\n  \
back, home - return to the main menu\n  \
1-9        - pick the matching menu option\n\
Enter a number and press return to choose, or click an option where supported.";

/// A single player's adventure session.
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    story: Arc<Story>,
    state: ProgressState,
}

impl Session {
    /// Create a session positioned at the story's start scene. Fails when
    /// the start scene is not registered; full graph validation is the
    /// host's startup concern ([`Story::validate`]).
    pub fn new(story: Arc<Story>) -> Result<Self, StoryError> {
        if !story.registry().contains(story.start_scene()) {
            return Err(StoryError::UnknownStartScene(story.start_scene().to_string()));
        }
        let state = ProgressState::new(story.start_scene());
        Ok(Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            story,
            state,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    /// First render of the session: enter the start scene. A self-transition,
    /// so the history stays empty.
    pub fn begin(&mut self) -> Turn {
        info!("session {}: started", self.id);
        self.go_home()
    }

    /// Navigate to a scene by id. Unknown ids leave the state untouched and
    /// surface as a recoverable error for the caller to report inline.
    pub fn go_to(&mut self, scene_id: &str) -> Result<Turn, StoryError> {
        let scene = self
            .story
            .registry()
            .get(scene_id)
            .ok_or_else(|| StoryError::SceneNotFound(scene_id.to_string()))?;

        self.state.advance_to(scene_id);
        debug!("session {}: entered {}", self.id, scene_id);

        let extra_lines = enter_lines(scene);
        Ok(Turn::with_view(self.view_of(scene, extra_lines)))
    }

    /// Pop the history and return to the previous scene. No-op (None) when
    /// the history is empty.
    pub fn go_back(&mut self) -> Option<Turn> {
        let previous = self.state.step_back()?;
        debug!("session {}: back to {}", self.id, previous);

        let scene = match self.story.registry().get(&previous) {
            Some(scene) => scene,
            None => {
                // History only ever holds ids that were current, and current
                // is always a registry key.
                warn!("session {}: history entry {} missing from registry", self.id, previous);
                return None;
            }
        };
        let extra_lines = enter_lines(scene);
        Some(Turn::with_view(self.view_of(scene, extra_lines)))
    }

    /// Navigate to the start scene.
    pub fn go_home(&mut self) -> Turn {
        let start = self.story.start_scene().to_string();
        match self.go_to(&start) {
            Ok(turn) => turn,
            // Unreachable once constructed: the start scene is validated.
            Err(err) => Turn::with_notice(Notice::error(err.to_string())),
        }
    }

    /// Replace the progression state with a fresh one and re-enter the start
    /// scene. Entering after the reset is a self-transition, so the new
    /// history is empty.
    pub fn restart(&mut self) -> Turn {
        info!("session {}: restart", self.id);
        self.state = ProgressState::new(self.story.start_scene());
        self.go_home()
    }

    /// Record an item collection: set insert plus ordered-log append, the
    /// item's flavor line, then threshold evaluation. Newly crossed
    /// thresholds are applied and their notices attached with their delays.
    pub fn collect_item(&mut self, item_id: &str) -> Turn {
        let newly = self.state.collect(item_id);
        if newly {
            info!("session {}: collected {} ({} total)", self.id, item_id, self.state.collected_count());
        } else {
            debug!("session {}: collected {} again", self.id, item_id);
        }

        let mut turn = Turn::with_notice(Notice {
            text: self.story.items().flavor_line(item_id),
            style: NoticeStyle::Reward,
        });

        let fired: Vec<_> = newly_crossed(
            self.story.unlock_rules(),
            self.state.collected_count(),
            &self.state.unlocked,
        )
        .into_iter()
        .cloned()
        .collect();

        for rule in fired {
            self.state.unlock(&rule.unlocks);
            info!("session {}: unlocked {} at {} items", self.id, rule.unlocks, rule.threshold);
            turn.delayed.push(DelayedNotice {
                text: rule.message,
                style: NoticeStyle::Unlock,
                delay_ms: rule.notice_delay_ms,
            });
        }

        turn
    }

    /// Select a visible choice by its 1-based number. Out-of-range numbers
    /// return None and change nothing: the permissive no-feedback policy is
    /// deliberate.
    pub fn select_choice(&mut self, number: usize) -> Option<Turn> {
        let scene = self.story.registry().get(&self.state.current)?;
        let action = visible_choices(scene, &self.state)
            .iter()
            .find(|vc| vc.number == number)
            .map(|vc| vc.choice.action.clone())?;
        Some(self.apply_action(&action))
    }

    /// Dispatch one line of raw player input.
    pub fn handle_command(&mut self, raw: &str) -> Turn {
        debug!("session {}: input \"{}\"", self.id, escape_log(raw));
        match parse_command(raw) {
            Command::Select(number) => match self.select_choice(number) {
                Some(inner) => {
                    let mut turn = Turn::with_notice(Notice::echo(format!("> {}", number)));
                    turn.merge(inner);
                    turn
                }
                None => Turn::default(),
            },
            Command::Help => Turn::with_notice(Notice::info(HELP_TEXT)),
            Command::Inventory => self.inventory_turn(),
            Command::Home => self.go_home(),
            Command::Unknown(text) => {
                let mut turn = Turn::with_notice(Notice::echo(format!("> {}", text)));
                turn.notices.push(Notice::info(
                    "Unknown command. Use the menu options or type \"help\".",
                ));
                turn
            }
        }
    }

    fn inventory_turn(&self) -> Turn {
        if self.state.collected.is_empty() {
            return Turn::with_notice(Notice::info("Your pack is empty."));
        }
        let items = self.state.collection_display_order();
        let names: Vec<&str> = items
            .iter()
            .map(|id| self.story.items().display_name(id))
            .collect();
        let mut turn = Turn::with_notice(Notice::info(format!("Pack: {}", names.join(", "))));
        turn.notices.push(Notice::info(format!("{} items collected", items.len())));
        turn
    }

    fn apply_action(&mut self, action: &ChoiceAction) -> Turn {
        match action {
            ChoiceAction::Navigate { scene } => match self.go_to(scene) {
                Ok(turn) => turn,
                Err(err) => Turn::with_notice(Notice::error(err.to_string())),
            },
            ChoiceAction::Collect { item } => self.collect_item(item),
            ChoiceAction::Restart => self.restart(),
            ChoiceAction::Sequence { steps } => {
                let mut combined = Turn::default();
                for step in steps {
                    combined.merge(self.apply_action(step));
                }
                combined
            }
        }
    }

    fn view_of(&self, scene: &Scene, extra_lines: Vec<String>) -> SceneView {
        let choices = visible_choices(scene, &self.state)
            .iter()
            .map(|vc| ChoiceLabel {
                number: vc.number,
                text: vc.choice.text.clone(),
            })
            .collect();
        SceneView {
            scene_id: scene.id.clone(),
            title: scene.title.clone(),
            body: scene.body.clone(),
            extra_lines,
            choices,
            can_go_back: !self.state.history.is_empty(),
            at_home: self.state.current == self.story.start_scene(),
        }
    }
}

/// Lines produced by a scene's on-enter effect, applied exactly once per
/// entry (forward or back), before choices are resolved.
fn enter_lines(scene: &Scene) -> Vec<String> {
    match &scene.on_enter {
        Some(EnterEffect::Announce { lines }) => lines.clone(),
        None => Vec::new(),
    }
}
