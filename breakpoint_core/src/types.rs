// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: notification phases, notifications, emission styles, and the
//! two collaborator traits the state machine talks to.
//!
//! ## Overview
//!
//! The state machine never measures layout or delivers events itself.
//! A [`WidthSampler`] supplies widths and a [`NotificationSink`] receives the
//! [`Notification`]s produced by [`transition`](crate::transition).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::breakpoints::Width;

/// Phase of a breakpoint notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// First classification of an instance. Emitted exactly once.
    Initial,
    /// The page entered a breakpoint.
    Enter,
    /// The page left a breakpoint. Always precedes the matching `Enter`.
    Exit,
}

impl Phase {
    /// Lowercase event-name suffix: `initial`, `enter` or `exit`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which notifications accompany a transition.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EmitStyle {
    /// Only phased notifications: `bp:<name>:initial`, `bp:<name>:exit`, `bp:<name>:enter`.
    #[default]
    Phased,
    /// Phased notifications, plus a bare `bp:<name>` after every `initial` and `enter`.
    PhasedWithBare,
}

/// A single breakpoint notification.
///
/// Displays as the event name delivered to listeners, e.g. `bp:md:enter`,
/// or `bp:md` for a bare notification.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Notification {
    /// Breakpoint the notification refers to.
    pub breakpoint: String,
    /// Phase, or `None` for a bare notification.
    pub phase: Option<Phase>,
}

impl Notification {
    /// A phased notification.
    pub fn new(breakpoint: impl Into<String>, phase: Phase) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            phase: Some(phase),
        }
    }

    /// A bare notification (no phase suffix).
    pub fn bare(breakpoint: impl Into<String>) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            phase: None,
        }
    }

    /// Shorthand for `Notification::new(name, Phase::Initial)`.
    pub fn initial(breakpoint: impl Into<String>) -> Self {
        Self::new(breakpoint, Phase::Initial)
    }

    /// Shorthand for `Notification::new(name, Phase::Enter)`.
    pub fn enter(breakpoint: impl Into<String>) -> Self {
        Self::new(breakpoint, Phase::Enter)
    }

    /// Shorthand for `Notification::new(name, Phase::Exit)`.
    pub fn exit(breakpoint: impl Into<String>) -> Self {
        Self::new(breakpoint, Phase::Exit)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Some(phase) => write!(f, "bp:{}:{}", self.breakpoint, phase),
            None => write!(f, "bp:{}", self.breakpoint),
        }
    }
}

/// Source of reference-element widths.
///
/// Implement this over your layout system. Return `None` when the reference
/// element does not exist; [`ClassifierState::evaluate`](crate::state::ClassifierState::evaluate)
/// reports that as a configuration error and emits nothing.
pub trait WidthSampler {
    /// Current width of the reference element.
    fn measure(&self) -> Option<Width>;
}

/// A fixed width, mostly useful in tests and when the caller already measured.
impl WidthSampler for Width {
    fn measure(&self) -> Option<Width> {
        Some(*self)
    }
}

/// Always-absent or fixed widths.
impl WidthSampler for Option<Width> {
    fn measure(&self) -> Option<Width> {
        *self
    }
}

/// Receiver of emitted notifications.
///
/// Called once per notification, in emission order. Delivery is
/// fire-and-forget; the sink cannot veto or reorder.
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}
