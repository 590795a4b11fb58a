// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-flight coordination of token refreshes.
//!
//! The first caller to observe an expired token becomes the leader and owns a
//! [`RefreshLease`]; everyone else arriving while the lease is held gets a
//! [`Waiter`] and parks on a one-shot channel. Settling the lease clears the
//! in-flight flag and releases the waiters in the order they queued.
//!
//! Every settled lease ends a numbered cycle. Callers note the cycle before
//! sending so a late 401 can tell whether a cycle finished while it was out.

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::ApiError;

/// Why a refresh cycle produced no token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// The refresh ran and failed. The session is over.
    Failed(String),
    /// The leader went away before settling. Credentials are untouched.
    Abandoned,
}

impl From<RefreshError> for ApiError {
    fn from(e: RefreshError) -> Self {
        match e {
            RefreshError::Failed(reason) => ApiError::AuthenticationRequired { reason },
            RefreshError::Abandoned => ApiError::RefreshAbandoned,
        }
    }
}

/// New access token on success.
pub type RefreshOutcome = Result<String, RefreshError>;

#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
    cycle: u64,
    last_failure: Option<String>,
}

/// In-flight flag plus pending queue, owned by one client instance.
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
    max_waiters: usize,
}

/// Role handed out by [`RefreshCoordinator::acquire`].
pub enum Ticket<'a> {
    /// Caller must perform the refresh and settle the lease.
    Lead(RefreshLease<'a>),
    /// A refresh is already running; wait for its outcome.
    Wait(Waiter),
}

impl RefreshCoordinator {
    pub fn new(max_waiters: usize) -> Self {
        Self { state: Mutex::new(RefreshState::default()), max_waiters }
    }

    /// Check and set the in-flight flag in one critical section.
    ///
    /// The lock is never held across an await point, so no two callers can
    /// both observe the flag clear.
    pub fn acquire(&self) -> Result<Ticket<'_>, ApiError> {
        let mut state = self.state.lock();
        if !state.in_flight {
            state.in_flight = true;
            return Ok(Ticket::Lead(RefreshLease { coordinator: self, settled: false }));
        }
        if state.waiters.len() >= self.max_waiters {
            return Err(ApiError::QueueFull);
        }
        let (tx, rx) = oneshot::channel();
        state.waiters.push(tx);
        Ok(Ticket::Wait(Waiter { rx }))
    }

    pub fn in_flight(&self) -> bool {
        self.state.lock().in_flight
    }

    /// Number of callers currently parked on the in-flight refresh.
    pub fn waiting(&self) -> usize {
        self.state.lock().waiters.len()
    }

    /// Number of cycles settled so far.
    pub fn cycle(&self) -> u64 {
        self.state.lock().cycle
    }

    /// Reason of the latest cycle if one settled after `since` and failed.
    pub fn failed_since(&self, since: u64) -> Option<String> {
        let state = self.state.lock();
        if state.cycle > since {
            state.last_failure.clone()
        } else {
            None
        }
    }

    fn release(&self, outcome: &RefreshOutcome) -> usize {
        let waiters = {
            let mut state = self.state.lock();
            state.in_flight = false;
            match outcome {
                Ok(_) => {
                    state.cycle += 1;
                    state.last_failure = None;
                }
                Err(RefreshError::Failed(reason)) => {
                    state.cycle += 1;
                    state.last_failure = Some(reason.clone());
                }
                Err(RefreshError::Abandoned) => {}
            }
            std::mem::take(&mut state.waiters)
        };
        let count = waiters.len();
        for tx in waiters {
            // A waiter whose caller went away has nothing left to resume.
            let _ = tx.send(outcome.clone());
        }
        count
    }
}

/// Proof of leadership over the current refresh cycle.
///
/// Dropping an unsettled lease (e.g. the leader's future was cancelled)
/// releases every waiter with [`RefreshError::Abandoned`] so none of them hangs.
pub struct RefreshLease<'a> {
    coordinator: &'a RefreshCoordinator,
    settled: bool,
}

impl RefreshLease<'_> {
    /// Publish the outcome to all waiters and end the refresh cycle.
    ///
    /// Returns how many waiters were released.
    pub fn settle(mut self, outcome: &RefreshOutcome) -> usize {
        self.settled = true;
        self.coordinator.release(outcome)
    }
}

impl Drop for RefreshLease<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.coordinator.release(&Err(RefreshError::Abandoned));
        }
    }
}

/// A caller parked on someone else's refresh.
pub struct Waiter {
    rx: oneshot::Receiver<RefreshOutcome>,
}

impl Waiter {
    pub async fn wait(self) -> RefreshOutcome {
        self.rx.await.unwrap_or(Err(RefreshError::Abandoned))
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
