//! Terminal frontend: rendering, delayed notices, and the input loop.
//! Everything here is presentation glue around the engine; the engine never
//! calls back into it except through the [`render::Renderer`] contract.

pub mod app;
pub mod notices;
pub mod render;

pub use notices::{start_notice_scheduler, NoticeScheduler};
pub use render::{Renderer, TerminalRenderer};
