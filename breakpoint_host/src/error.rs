// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Usage errors raised by the host surface.

use breakpoint_core::ConfigError;

/// Misuse of an instance, or a rejected configuration change.
///
/// Unlike attach-time configuration problems, which leave the element inert,
/// these are returned straight to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// The method does not exist, or the element has no instance to call it on.
    #[error("method {method} does not exist on breakpoint events")]
    MethodNotFound {
        /// Requested method name.
        method: String,
    },
    /// The element has no attached instance.
    #[error("element is not attached")]
    NotAttached,
    /// Unknown option key.
    #[error("unknown option '{key}'")]
    UnknownOption {
        /// Requested key.
        key: String,
    },
    /// Unknown state variable.
    #[error("unknown variable '{key}'")]
    UnknownVariable {
        /// Requested key.
        key: String,
    },
    /// A value of the wrong shape for its key.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Key being set.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The change would leave the instance misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
