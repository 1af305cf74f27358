//! Game clock: one cancellable periodic task.
//!
//! The clock only produces ticks; it never looks at game state. Each start
//! gets a new generation number so a tick that was already queued when the
//! clock was stopped can be told apart from a live one.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// One elapsed interval from a specific clock run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTick {
    pub generation: u64,
}

struct Running {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Periodic tick source. At most one run is active at a time.
pub struct GameClock {
    period: Duration,
    generation: u64,
    running: Option<Running>,
}

impl GameClock {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: 0,
            running: None,
        }
    }

    /// Start a fresh run, cancelling any previous one.
    ///
    /// The first tick arrives one full period after this call.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, ticks: mpsc::UnboundedSender<ClockTick>) {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let period = self.period;
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    biased;

                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        trace!(generation, "tick");
                        if ticks.send(ClockTick { generation }).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        self.running = Some(Running { token, handle });
    }

    /// Stop the current run, if any.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.token.cancel();
            running.handle.abort();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Generation of the latest run. Ticks carrying any other value are stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if `tick` came from the current, still running clock.
    #[must_use]
    pub fn is_current(&self, tick: ClockTick) -> bool {
        self.is_running() && tick.generation == self.generation
    }
}

impl Drop for GameClock {
    fn drop(&mut self) {
        self.stop();
    }
}
