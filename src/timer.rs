//! Cancellable periodic clock for driving a session.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Default clock period: one tick per second of question time.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A background task delivering one message per period.
///
/// The task is aborted when the ticker is stopped or dropped, so a ticker
/// must not outlive the session phase it drives.
pub struct Ticker {
    ticks: mpsc::UnboundedReceiver<()>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the clock. The first tick arrives one full period from now.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        debug!(?period, "ticker started");
        Self { ticks, task }
    }

    /// Wait for the next tick. Returns `None` once the ticker is stopped and
    /// drained.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }

    /// Handle for observing the background task after the ticker is gone.
    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }

    pub fn stop(&self) {
        if !self.task.is_finished() {
            self.task.abort();
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
