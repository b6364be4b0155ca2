//! # Questfolio - A Portfolio That Plays Like a Text Adventure
//!
//! Questfolio renders a personal portfolio as an interactive, choice-driven
//! narrative. A directed graph of scenes is traversed by the player, with
//! history-based backtracking, an item-collection mechanic that unlocks
//! hidden scenes, and a terminal frontend that paints each turn.
//!
//! ## Features
//!
//! - **Scene Graph Navigation**: Forward traversal, single-step back, and a
//!   home shortcut over an immutable scene registry.
//! - **Collection & Unlocks**: Items gathered along the way cross configured
//!   thresholds that reveal secret scenes, announced with delayed notices.
//! - **Data-Modelled Content**: Choices, conditions, and effects are tagged
//!   enums, so the engine can inspect and test them without opaque callbacks.
//! - **Decoupled Rendering**: Engine operations return [`engine::Turn`]
//!   descriptions; hosts decide when to draw them.
//! - **Per-Player Sessions**: No global state; one [`engine::Session`] per
//!   player over a shared [`story::Story`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use questfolio::engine::Session;
//! use questfolio::story::portfolio_story;
//!
//! fn main() -> anyhow::Result<()> {
//!     let story = Arc::new(portfolio_story()?);
//!     let mut session = Session::new(story)?;
//!
//!     let turn = session.begin();
//!     println!("{}", turn.view.map(|v| v.title).unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`story`] - Static narrative data: scenes, registry, canonical content
//! - [`engine`] - Progression state, choice resolution, unlocks, dispatch
//! - [`ui`] - Terminal rendering and the interactive loop
//! - [`config`] - Configuration management
//! - [`logutil`] - Log sanitization helpers

pub mod config;
pub mod engine;
pub mod logutil;
pub mod story;
pub mod ui;
