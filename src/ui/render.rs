//! Renderer contract and the ANSI terminal implementation.

use crate::engine::session::{NoticeStyle, SceneView};

/// Visual presentation collaborator. The engine calls `render` on every
/// navigation and `append_message` for transcript lines; implementations
/// return nothing to the core.
pub trait Renderer {
    fn render(&mut self, view: &SceneView);
    fn append_message(&mut self, text: &str, style: NoticeStyle);
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Writes the transcript to stdout, with ANSI colors when enabled.
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, codes: &str) -> String {
        if self.color {
            format!("{}{}{}", codes, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &SceneView) {
        println!();
        println!("{}", self.paint(&format!("=== {} ===", view.title), BOLD));
        println!("{}", view.body);
        for line in &view.extra_lines {
            println!("{}", self.paint(line, CYAN));
        }
        println!();
        for choice in &view.choices {
            println!("  {}", self.paint(&format!("{}. {}", choice.number, choice.text), CYAN));
        }

        let mut hints = Vec::new();
        if view.can_go_back {
            hints.push("< previous page");
        }
        if !view.at_home {
            hints.push("home: main menu");
        }
        hints.push("help: commands");
        println!("{}", self.paint(&format!("[{}]", hints.join("  ")), DIM));
    }

    fn append_message(&mut self, text: &str, style: NoticeStyle) {
        let line = match style {
            NoticeStyle::Info => text.to_string(),
            NoticeStyle::Echo => self.paint(text, DIM),
            NoticeStyle::Reward => self.paint(text, GREEN),
            NoticeStyle::Unlock => self.paint(text, &format!("{}{}", BOLD, YELLOW)),
            NoticeStyle::Error => self.paint(text, RED),
        };
        println!("{}", line);
    }
}
