//! Interactive terminal session loop.
//!
//! Reads player input line by line and forwards it to the engine, painting
//! each returned turn. Two affordances live here rather than in the engine
//! dispatcher, since they belong to this frontend: `<` steps back one page,
//! and `quit`/`exit` ends the session.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::engine::session::{NoticeStyle, Session, Turn};
use crate::story::Story;
use crate::ui::notices::{start_notice_scheduler, NoticeScheduler};
use crate::ui::render::{Renderer, TerminalRenderer};

/// Run one interactive session until EOF or quit.
pub async fn run(config: &Config, story: Arc<Story>) -> Result<()> {
    let mut renderer = TerminalRenderer::new(config.ui.use_color());
    let (scheduler, mut matured) = start_notice_scheduler();
    let mut session = Session::new(story)?;

    renderer.append_message(&config.game.banner, NoticeStyle::Info);
    tokio::time::sleep(Duration::from_millis(config.game.boot_delay_ms)).await;
    apply_turn(&mut renderer, &scheduler, session.begin());
    renderer.append_message("(terminal: type < for the previous page, quit to leave)", NoticeStyle::Info);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        prompt(&config.ui.prompt)?;
        tokio::select! {
            line = lines.next_line() => {
                let Some(raw) = line? else { break };
                let input = raw.trim().to_string();
                match input.to_lowercase().as_str() {
                    "quit" | "exit" => break,
                    "<" => {
                        // Empty history: silently stay put, like a disabled
                        // back button.
                        if let Some(turn) = session.go_back() {
                            apply_turn(&mut renderer, &scheduler, turn);
                        }
                    }
                    _ => {
                        let turn = session.handle_command(&input);
                        apply_turn(&mut renderer, &scheduler, turn);
                    }
                }
            }
            Some(notice) = matured.recv() => {
                println!();
                renderer.append_message(&notice.text, notice.style);
            }
        }
    }

    let played = chrono::Utc::now() - session.started_at();
    info!("session {} ended after {}s", session.id(), played.num_seconds());
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

/// Paint one engine turn: transcript lines first, then the scene view,
/// then hand any delayed notices to the scheduler.
pub fn apply_turn(renderer: &mut impl Renderer, scheduler: &NoticeScheduler, turn: Turn) {
    for notice in &turn.notices {
        renderer.append_message(&notice.text, notice.style);
    }
    if let Some(view) = &turn.view {
        renderer.render(view);
    }
    for delayed in turn.delayed {
        scheduler.schedule(delayed);
    }
}
