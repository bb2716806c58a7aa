// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize debouncing without timers.
//!
//! ## Overview
//!
//! [`Debouncer`] coalesces bursts of stimuli (window resizes) into one call.
//! It owns no clock and spawns nothing: the host passes the current time to
//! [`schedule`](Debouncer::schedule) and [`poll`](Debouncer::poll), and uses
//! [`deadline`](Debouncer::deadline) to decide when to poll next.
//!
//! ## Edges
//!
//! - [`Edge::Trailing`] (default): run once, `window` after the last stimulus.
//! - [`Edge::Leading`]: run on the first stimulus of a burst; stimuli inside
//!   the window only extend the burst.
//!
//! ```
//! use core::time::Duration;
//! use breakpoint_core::debounce::Debouncer;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debouncer::new(ms(100));
//! d.schedule(ms(0));
//! d.schedule(ms(50));
//! assert!(!d.poll(ms(120)));
//! assert!(d.poll(ms(150)));
//! assert!(!d.is_pending());
//! ```

use core::ops::Add;
use core::time::Duration;

/// Default quiescence window: 100 ms.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// A point in time as seen by the host.
///
/// Implemented for anything that is ordered and can be advanced by a
/// [`Duration`], e.g. `std::time::Instant` or a `Duration` since some epoch.
pub trait Timestamp: Copy + Ord + Add<Duration, Output = Self> {}

impl<T: Copy + Ord + Add<Duration, Output = T>> Timestamp for T {}

/// Which edge of a burst triggers the call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Call once the burst has been quiet for the whole window.
    #[default]
    Trailing,
    /// Call on the first stimulus of a burst.
    Leading,
}

/// Trailing- or leading-edge debouncer over caller-supplied time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    window: Duration,
    edge: Edge,
    deadline: Option<T>,
}

impl<T: Timestamp> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl<T: Timestamp> Debouncer<T> {
    /// Trailing-edge debouncer with the given quiescence window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            edge: Edge::Trailing,
            deadline: None,
        }
    }

    /// Debouncer with an explicit edge.
    pub fn with_edge(window: Duration, edge: Edge) -> Self {
        Self {
            window,
            edge,
            deadline: None,
        }
    }

    /// Quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Triggering edge.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Whether a deadline is armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Armed deadline, if any.
    pub fn deadline(&self) -> Option<T> {
        self.deadline
    }

    /// Record a stimulus at `now`, (re)arming the deadline to `now + window`.
    ///
    /// Returns `true` when the caller should run immediately:
    /// - [`Edge::Leading`]: no burst was in progress. A deadline that has
    ///   already elapsed counts as no burst, polled or not.
    /// - [`Edge::Trailing`]: the previous burst's deadline elapsed before
    ///   `now` without being polled. That overdue call runs now, and `now`
    ///   starts a new burst.
    pub fn schedule(&mut self, now: T) -> bool {
        let overdue = self.deadline.is_some_and(|deadline| now >= deadline);
        let idle = self.deadline.is_none() || overdue;
        self.deadline = Some(now + self.window);
        match self.edge {
            Edge::Leading => idle,
            Edge::Trailing => overdue,
        }
    }

    /// Drop an armed deadline. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Consume the deadline if it has elapsed at `now`.
    ///
    /// Returns `true` when the caller should run now ([`Edge::Trailing`] only).
    /// A consumed deadline cannot be cancelled afterwards.
    pub fn poll(&mut self, now: T) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.edge == Edge::Trailing
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn burst_fires_once_after_quiet_window() {
        let mut d = Debouncer::new(ms(100));
        assert!(!d.schedule(ms(0)));
        assert!(!d.schedule(ms(50)));
        assert!(!d.schedule(ms(120)));
        assert!(!d.poll(ms(150)));
        assert!(!d.poll(ms(219)));
        assert!(d.poll(ms(220)));
        assert!(!d.poll(ms(300)));
    }

    #[test]
    fn poll_without_schedule_is_quiet() {
        let mut d: Debouncer<Duration> = Debouncer::default();
        assert_eq!(d.window(), DEFAULT_WINDOW);
        assert!(!d.poll(ms(1_000)));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn cancel_drops_pending_call() {
        let mut d = Debouncer::new(ms(100));
        d.schedule(ms(10));
        assert_eq!(d.deadline(), Some(ms(110)));
        assert!(d.cancel());
        assert!(!d.cancel());
        assert!(!d.poll(ms(500)));
    }

    // Once a deadline fires, a later cancel has nothing to cancel.
    #[test]
    fn fired_deadline_is_consumed() {
        let mut d = Debouncer::new(ms(100));
        d.schedule(ms(0));
        assert!(d.poll(ms(100)));
        assert!(!d.cancel());
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let mut d = Debouncer::new(ms(100));
        let mut fired = 0;
        for (stimulus, check) in [(0, 100), (300, 400)] {
            d.schedule(ms(stimulus));
            if d.poll(ms(check)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 2);
    }

    #[test]
    fn leading_edge_runs_first_stimulus_only() {
        let mut d = Debouncer::with_edge(ms(100), Edge::Leading);
        assert_eq!(d.edge(), Edge::Leading);
        assert!(d.schedule(ms(0)));
        assert!(!d.schedule(ms(40)));
        assert!(!d.schedule(ms(80)));
        // The burst ends without a trailing call.
        assert!(!d.poll(ms(180)));
        assert!(!d.is_pending());
        // A new burst runs immediately again.
        assert!(d.schedule(ms(400)));
    }

    // A host that never polled between bursts still sees the second one.
    #[test]
    fn leading_edge_elapsed_deadline_starts_new_burst() {
        let mut d = Debouncer::with_edge(ms(100), Edge::Leading);
        assert!(d.schedule(ms(0)));
        assert!(d.schedule(ms(400)));
        assert_eq!(d.deadline(), Some(ms(500)));
        assert!(!d.schedule(ms(450)));
        // Exactly at the deadline the old burst is over.
        assert!(d.schedule(ms(550)));
    }

    #[test]
    fn trailing_edge_overdue_call_runs_on_next_stimulus() {
        let mut d = Debouncer::new(ms(100));
        assert!(!d.schedule(ms(0)));
        assert!(d.schedule(ms(400)));
        assert_eq!(d.deadline(), Some(ms(500)));
        // The new burst still gets its own trailing call.
        assert!(!d.poll(ms(499)));
        assert!(d.poll(ms(500)));
    }

    #[test]
    fn leading_edge_burst_extends_with_stimuli() {
        let mut d = Debouncer::with_edge(ms(100), Edge::Leading);
        assert!(d.schedule(ms(0)));
        assert!(!d.schedule(ms(90)));
        assert!(!d.poll(ms(150)));
        assert!(d.is_pending());
        assert!(!d.schedule(ms(160)));
    }
}
