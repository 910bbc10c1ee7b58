//! Time Sampler
//!
//! Drives the tick loop: one snapshot immediately on start, then one per
//! period until the returned [`CancelHandle`] is cancelled or dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::snapshot::TimeSnapshot;
use super::source::SnapshotFormatter;

/// Nominal spacing between ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Owns the configuration of a repeating sampling schedule
#[derive(Debug, Clone)]
pub struct TimeSampler {
    formatter: SnapshotFormatter,
    period: Duration,
}

impl TimeSampler {
    /// Create a sampler with the given period.
    ///
    /// A zero period is clamped to one millisecond; tokio intervals panic on
    /// zero.
    pub fn new(formatter: SnapshotFormatter, period: Duration) -> Self {
        Self {
            formatter,
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// Sampler ticking every [`DEFAULT_TICK_PERIOD`]
    pub fn with_default_period(formatter: SnapshotFormatter) -> Self {
        Self::new(formatter, DEFAULT_TICK_PERIOD)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Produce a single snapshot without scheduling anything
    pub fn sample_once(&self) -> TimeSnapshot {
        self.formatter.sample()
    }

    /// Start the schedule.
    ///
    /// `on_tick` runs once before this returns, then once per elapsed period
    /// on a spawned task. Ticks that fall behind are skipped rather than
    /// delivered in a burst, so a stalled runtime never produces two ticks
    /// for the same second.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, mut on_tick: F) -> CancelHandle
    where
        F: FnMut(TimeSnapshot) + Send + 'static,
    {
        let active = Arc::new(Mutex::new(true));
        let ticks = Arc::new(AtomicU64::new(0));

        on_tick(self.formatter.sample());
        ticks.fetch_add(1, Ordering::Relaxed);

        let formatter = self.formatter.clone();
        let period = self.period;
        let task_active = Arc::clone(&active);
        let task_ticks = Arc::clone(&ticks);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;

                // Held across the callback so cancel() waits for it
                let delivered = {
                    let active = lock(&task_active);
                    if *active {
                        on_tick(formatter.sample());
                        task_ticks.fetch_add(1, Ordering::Relaxed);
                    }
                    *active
                };

                if !delivered {
                    break;
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "Time sampler started");

        CancelHandle {
            active,
            ticks,
            task: Some(task),
        }
    }
}

/// Handle to a running sampler schedule
///
/// Cancelling is synchronous: once [`CancelHandle::cancel`] returns, the tick
/// callback is not invoked again, on any runtime flavor. A callback already
/// running on another worker is waited for. Dropping the handle cancels it.
///
/// Cancelling from inside the tick callback deadlocks.
#[derive(Debug)]
pub struct CancelHandle {
    active: Arc<Mutex<bool>>,
    ticks: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl CancelHandle {
    /// Stop the schedule. Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        let was_active = std::mem::replace(&mut *lock(&self.active), false);

        if let Some(task) = self.task.take() {
            task.abort();
        }

        if was_active {
            tracing::debug!(ticks = self.tick_count(), "Time sampler cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        *lock(&self.active)
    }

    /// Number of times the tick callback has run, including the first
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

fn lock(active: &Mutex<bool>) -> MutexGuard<'_, bool> {
    active.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
