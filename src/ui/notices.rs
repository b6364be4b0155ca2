//! Scheduling layer for delayed unlock notices.
//!
//! The engine only describes a delayed notice (text + delay); this module
//! owns the timing. Notices are fire-and-forget: there is no cancellation
//! and no ordering guarantee relative to player input arriving in the
//! meantime, so the frontend appends matured notices to the transcript
//! rather than replacing anything.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::engine::session::{DelayedNotice, Notice};

const TICK: Duration = Duration::from_millis(25);

/// Handle used by the frontend to hand delayed notices to the scheduler.
#[derive(Clone, Debug)]
pub struct NoticeScheduler {
    tx: mpsc::UnboundedSender<DelayedNotice>,
}

impl NoticeScheduler {
    pub fn schedule(&self, notice: DelayedNotice) {
        if self.tx.send(notice).is_err() {
            log::warn!("notice scheduler stopped; dropping notice");
        }
    }
}

/// Spawn the scheduler loop. Matured notices arrive on the returned
/// receiver in due-time order.
pub fn start_notice_scheduler() -> (NoticeScheduler, mpsc::UnboundedReceiver<Notice>) {
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<DelayedNotice>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<Notice>();

    tokio::spawn(async move {
        let mut queue: Vec<(Instant, DelayedNotice)> = Vec::new();
        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    Some(notice) => {
                        let due = Instant::now() + Duration::from_millis(notice.delay_ms);
                        queue.push((due, notice));
                    }
                    // All handles dropped; pending notices die with the session.
                    None => break,
                },
                _ = tokio::time::sleep(TICK), if !queue.is_empty() => {}
            }

            let now = Instant::now();
            queue.sort_by_key(|(due, _)| *due);
            while let Some(pos) = queue.iter().position(|(due, _)| *due <= now) {
                let (_, notice) = queue.remove(pos);
                let matured = Notice {
                    text: notice.text,
                    style: notice.style,
                };
                if out_tx.send(matured).is_err() {
                    log::debug!("notice receiver closed; dropping matured notice");
                }
            }
        }
        log::debug!("notice scheduler terminated");
    });

    (NoticeScheduler { tx: cmd_tx }, out_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::session::NoticeStyle;

    #[tokio::test]
    async fn matured_notices_arrive_in_due_order() {
        let (scheduler, mut rx) = start_notice_scheduler();
        scheduler.schedule(DelayedNotice {
            text: "second".to_string(),
            style: NoticeStyle::Unlock,
            delay_ms: 80,
        });
        scheduler.schedule(DelayedNotice {
            text: "first".to_string(),
            style: NoticeStyle::Unlock,
            delay_ms: 10,
        });

        let a = rx.recv().await.unwrap();
        let b = rx.recv().await.unwrap();
        assert_eq!(a.text, "first");
        assert_eq!(b.text, "second");
    }

    #[tokio::test]
    async fn zero_delay_notice_still_delivers() {
        let (scheduler, mut rx) = start_notice_scheduler();
        scheduler.schedule(DelayedNotice {
            text: "now".to_string(),
            style: NoticeStyle::Info,
            delay_ms: 0,
        });
        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.text, "now");
        assert_eq!(notice.style, NoticeStyle::Info);
    }
}
