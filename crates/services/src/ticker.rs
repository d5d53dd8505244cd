use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};

/// One elapsed second of play time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Cancellable one-second tick source.
///
/// Started on entering the playing phase and dropped on leaving it; the
/// backing task is aborted on drop, so no timer outlives the phase that
/// created it. The shell applies each received [`Tick`] to the session on
/// its own event loop, keeping all mutation single-writer.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the tick task. Sends one [`Tick`] per elapsed second until the
    /// receiver is dropped or the ticker is stopped.
    #[must_use]
    pub fn start(tx: mpsc::Sender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; swallow it so
            // the first Tick lands after one full second.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Tick).await.is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop ticking now. Equivalent to dropping the ticker.
    pub fn stop(self) {}
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
