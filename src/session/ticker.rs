//! Periodic tick source.
//!
//! Exactly one interval task runs at a time. Starting the source while a
//! task is live aborts the old task first, and every tick carries the
//! generation of the task that produced it so the consumer can drop ticks
//! that were already queued when the source was restarted or stopped.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

/// Production tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single tick from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Generation of the interval task that emitted this tick
    pub generation: u64,
}

/// Owns the single interval task that drives the session machine.
pub struct TickSource {
    period: Duration,
    tx: mpsc::UnboundedSender<Tick>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl TickSource {
    /// Creates a stopped source and the receiver its ticks arrive on.
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let source = Self {
            period,
            tx,
            handle: None,
            generation: 0,
        };
        (source, rx)
    }

    /// Starts ticking, replacing any running task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, "tick source started");
    }

    /// Stops ticking. Ticks already queued become stale.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            self.generation += 1;
            tracing::debug!("tick source stopped");
        }
    }

    /// Returns true while an interval task is live.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns true if `tick` came from the currently running task.
    pub fn is_current(&self, tick: &Tick) -> bool {
        self.is_running() && tick.generation == self.generation
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.stop();
    }
}
