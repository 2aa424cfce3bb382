//! Single-shot timers on the scheduler's virtual clock
//!
//! Each timer is stamped with the epoch of the session that armed it.
//! A timer whose epoch no longer matches is stale and must be dropped
//! instead of fired.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Delay before the first visitor of a session
    StartDelay,
    /// How long resolution feedback stays up
    FeedbackDisplay,
    /// Idle gate fallback: present a visitor if nothing else does
    AutoAdvance,
    /// Delay before the next visitor after resuming
    ResumeDelay,
}

impl TimerKind {
    /// Timers whose firing presents a visitor
    pub fn presents_visitor(&self) -> bool {
        !matches!(self, TimerKind::FeedbackDisplay)
    }
}

impl core::fmt::Display for TimerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TimerKind::StartDelay => "start-delay",
            TimerKind::FeedbackDisplay => "feedback-display",
            TimerKind::AutoAdvance => "auto-advance",
            TimerKind::ResumeDelay => "resume-delay",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub kind: TimerKind,
    /// Clock time at which the timer fires
    pub due: Duration,
    pub epoch: u64,
    /// Arming order, breaks ties between timers due at the same instant
    seq: u64,
}

/// Pending timers, fired earliest-first
#[derive(Debug, Default)]
pub struct TimerSet {
    pending: Vec<PendingTimer>,
    next_seq: u64,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, kind: TimerKind, due: Duration, epoch: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            kind,
            due,
            epoch,
            seq,
        });
    }

    /// Cancel every pending timer of `kind`; returns how many were removed
    pub fn cancel(&mut self, kind: TimerKind) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    /// Earliest due time across all pending timers
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Remove and return the earliest timer due at or before `now`
    pub fn pop_due(&mut self, now: Duration) -> Option<PendingTimer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index))
    }

    pub fn kinds(&self) -> Vec<TimerKind> {
        let mut timers = self.pending.clone();
        timers.sort_by_key(|t| (t.due, t.seq));
        timers.into_iter().map(|t| t.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
