//! Check cycle orchestration and the interruptible poll loop.
//!
//! One cycle runs `load → detect → (notify → save)` to completion before the
//! next begins; nothing overlaps. The only shared state is the stop flag,
//! which is set once by a signal handler and read by the loop.

use crate::catalog::City;
use crate::detect::detect;
use crate::error::Result;
use crate::notify::Notifier;
use crate::oracle::DstOracle;
use crate::state::StateStore;
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

/// What a completed check cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No city flipped; the store was left untouched.
    NoChange,
    /// A notification covering this many cities was sent and persisted.
    Notified(usize),
}

/// Run one check cycle: load the prior state, detect changes, and on any
/// change send one notification and then persist the updated state.
///
/// The ordering is deliberate: `save` runs only after `notify` succeeds, so a
/// delivery failure (or a crash in between) leaves the old state on disk and
/// the same diff is re-detected and re-sent next cycle. A cycle with no
/// changes writes nothing.
pub fn run_cycle(
    catalog: &[City],
    oracle: &dyn DstOracle,
    store: &dyn StateStore,
    notifier: &dyn Notifier,
) -> Result<CycleOutcome> {
    let prior = store.load();
    let (changed, next) = detect(catalog, oracle, &prior)?;

    if changed.is_empty() {
        return Ok(CycleOutcome::NoChange);
    }

    notifier.notify(&changed)?;
    store.save(&next)?;
    Ok(CycleOutcome::Notified(changed.len()))
}

/// Stop flag shared between the poll loop and an asynchronous signal handler.
///
/// The flag is only ever set, never cleared. `wait_timeout` doubles as the
/// inter-cycle sleep: it returns as soon as a stop is requested instead of
/// blocking out the full interval.
#[derive(Debug, Default)]
pub struct Shutdown {
    stopped: Mutex<bool>,
    wakeup: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop and wake any in-progress wait. Safe to call from a
    /// signal handler thread.
    pub fn request_stop(&self) {
        let mut stopped = self.stopped.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        self.wakeup.notify_all();
    }

    pub fn is_requested(&self) -> bool {
        *self.stopped.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block for up to `timeout` or until a stop is requested, whichever
    /// comes first. Returns whether a stop has been requested.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let stopped = self.stopped.lock().unwrap_or_else(PoisonError::into_inner);
        let (stopped, _timed_out) = self
            .wakeup
            .wait_timeout_while(stopped, timeout, |stopped| !*stopped)
            .unwrap_or_else(PoisonError::into_inner);
        *stopped
    }
}

/// Run check cycles at a fixed interval until a stop is requested.
///
/// Any error raised by a cycle is logged and absorbed here; the loop never
/// crashes on a per-cycle failure, it simply waits out the interval and tries
/// again. No new cycle starts after a stop request, and an in-flight cycle
/// always completes before the loop returns.
pub fn run_loop(
    catalog: &[City],
    oracle: &dyn DstOracle,
    store: &dyn StateStore,
    notifier: &dyn Notifier,
    interval: Duration,
    shutdown: &Shutdown,
) {
    while !shutdown.is_requested() {
        match run_cycle(catalog, oracle, store, notifier) {
            Ok(CycleOutcome::NoChange) => tracing::info!("no DST change"),
            Ok(CycleOutcome::Notified(count)) => {
                tracing::info!(cities = count, "DST change notification sent");
            }
            Err(err) => tracing::error!(error = %err, "error while checking DST changes"),
        }

        if shutdown.wait_timeout(interval) {
            break;
        }
    }

    tracing::info!("scheduler stopped");
}
