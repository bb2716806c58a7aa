// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Every error in this crate is permanent: it describes a configuration that
//! can never classify correctly until it is replaced. There is nothing to
//! retry.

use alloc::string::String;

/// A breakpoint configuration or reference element problem.
///
/// Returned by [`Breakpoints::insert`](crate::breakpoints::Breakpoints::insert),
/// [`ClassifierConfig::validate`](crate::state::ClassifierConfig::validate) and
/// [`ClassifierState::evaluate`](crate::state::ClassifierState::evaluate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The breakpoints were supplied as something other than a name → width map.
    #[error("breakpoints have not been properly configured: expected a map, found {found}")]
    NotAMapping {
        /// Short description of what was supplied instead.
        found: String,
    },
    /// A breakpoint was given an empty name.
    #[error("breakpoint names must not be empty")]
    EmptyName,
    /// A breakpoint was given a trigger width of zero.
    #[error("breakpoint '{name}' must have a positive trigger width")]
    ZeroTriggerWidth {
        /// The offending breakpoint.
        name: String,
    },
    /// The default breakpoint name is empty.
    #[error("default breakpoint name must not be empty")]
    EmptyDefault,
    /// The default breakpoint name is also a configured breakpoint.
    #[error("default breakpoint '{name}' is also a configured breakpoint")]
    DefaultCollides {
        /// The colliding name.
        name: String,
    },
    /// The reference element could not be measured.
    #[error("model element not found")]
    ReferenceMissing,
}
