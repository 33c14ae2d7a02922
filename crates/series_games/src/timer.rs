//! Delayed advance to the next game.
//!
//! A finished game stays on screen for a moment before the session moves on.
//! The delay runs as a tokio task that can be cancelled; dropping the timer
//! (for example when the session is torn down) cancels it too.

use series_tictactoe::GameResult;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, instrument};

/// Pending advance carrying the result that triggered it.
#[derive(Debug)]
pub struct AdvanceTimer {
    cancel_tx: Option<oneshot::Sender<()>>,
    fired_rx: oneshot::Receiver<GameResult>,
    handle: JoinHandle<()>,
}

impl AdvanceTimer {
    /// Schedules delivery of `result` after `delay`.
    #[instrument]
    pub fn schedule(delay: Duration, result: GameResult) -> Self {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let (fired_tx, fired_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = sleep(delay) => {
                    debug!(?result, "Advance timer fired");
                    // Receiver gone means nobody waits any more.
                    let _ = fired_tx.send(result);
                }
                _ = cancel_rx => {
                    debug!("Advance timer cancelled");
                }
            }
        });

        Self {
            cancel_tx: Some(cancel_tx),
            fired_rx,
            handle,
        }
    }

    /// Cancels the timer; a later [`AdvanceTimer::wait`] yields `None`.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Waits for the timer. `Some(result)` if it fired, `None` if cancelled.
    pub async fn wait(mut self) -> Option<GameResult> {
        (&mut self.fired_rx).await.ok()
    }
}

impl Drop for AdvanceTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_tictactoe::Mark;
    use std::time::Instant;

    #[tokio::test]
    async fn test_fires_with_captured_result() {
        let started = Instant::now();
        let timer = AdvanceTimer::schedule(Duration::from_millis(20), GameResult::Won(Mark::O));
        assert_eq!(timer.wait().await, Some(GameResult::Won(Mark::O)));
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_fires() {
        let mut timer = AdvanceTimer::schedule(Duration::from_millis(20), GameResult::Draw);
        timer.cancel();
        assert_eq!(timer.wait().await, None);
    }

    #[tokio::test]
    async fn test_long_delay_does_not_fire_early() {
        let timer = AdvanceTimer::schedule(Duration::from_secs(60), GameResult::Draw);
        let waited = tokio::time::timeout(Duration::from_millis(10), timer.wait()).await;
        assert!(waited.is_err());
    }
}
