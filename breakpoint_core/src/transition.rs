// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition detection: which notifications a classification produces.
//!
//! ## Rules
//!
//! - The first classification of an instance produces a single `initial`
//!   notification for the classified breakpoint, whatever it is.
//! - Afterwards, a change produces `exit` for the previous breakpoint and then
//!   `enter` for the next one. Exit always precedes enter.
//! - No change produces nothing.
//!
//! ```
//! use breakpoint_core::transition::{Transition, transition};
//!
//! assert_eq!(transition("xs", "sm", true), Transition::Initial("sm"));
//! assert_eq!(transition("xs", "sm", false), Transition::Changed { exit: "xs", enter: "sm" });
//! assert_eq!(transition("sm", "sm", false), Transition::Unchanged);
//! ```

use crate::types::{EmitStyle, Notification, NotificationSink, Phase};

/// Outcome of comparing the previous and next breakpoint.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition<'a> {
    /// No classification has completed before; announce the first breakpoint.
    Initial(&'a str),
    /// The breakpoint changed.
    Changed {
        /// Breakpoint being left.
        exit: &'a str,
        /// Breakpoint being entered.
        enter: &'a str,
    },
    /// Same breakpoint as before.
    Unchanged,
}

impl<'a> Transition<'a> {
    /// Whether this transition emits anything.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Breakpoint the instance is in after this transition, if it moved or
    /// settled for the first time.
    pub fn target(&self) -> Option<&'a str> {
        match *self {
            Self::Initial(next) => Some(next),
            Self::Changed { enter, .. } => Some(enter),
            Self::Unchanged => None,
        }
    }

    /// Send this transition's notifications to `sink`, returning how many were sent.
    pub fn emit_to<S: NotificationSink + ?Sized>(&self, style: EmitStyle, sink: &mut S) -> usize {
        let settled = match *self {
            Self::Unchanged => return 0,
            Self::Initial(next) => {
                sink.notify(Notification::new(next, Phase::Initial));
                next
            }
            Self::Changed { exit, enter } => {
                sink.notify(Notification::new(exit, Phase::Exit));
                sink.notify(Notification::new(enter, Phase::Enter));
                enter
            }
        };
        let phased = if matches!(self, Self::Initial(_)) { 1 } else { 2 };
        match style {
            EmitStyle::Phased => phased,
            EmitStyle::PhasedWithBare => {
                sink.notify(Notification::bare(settled));
                phased + 1
            }
        }
    }
}

/// Compare `previous` with `next`.
///
/// `is_initial` is true until the first classification of an instance
/// completes; while it is set the result is always [`Transition::Initial`].
pub fn transition<'a>(previous: &'a str, next: &'a str, is_initial: bool) -> Transition<'a> {
    if is_initial {
        Transition::Initial(next)
    } else if previous != next {
        Transition::Changed {
            exit: previous,
            enter: next,
        }
    } else {
        Transition::Unchanged
    }
}

/// Emit the notifications for moving from `previous` to `next`.
///
/// Returns the new value of the instance's initial flag, which is always
/// `false`: after any call the instance has classified at least once.
pub fn emit<S: NotificationSink + ?Sized>(
    previous: &str,
    next: &str,
    is_initial: bool,
    style: EmitStyle,
    sink: &mut S,
) -> bool {
    transition(previous, next, is_initial).emit_to(style, sink);
    false
}
