// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint Host: attach breakpoint classifiers to host elements.
//!
//! ## Overview
//!
//! [`breakpoint_core`] decides which notifications a width produces. This crate
//! wires that into a host: it keeps one instance per element in a
//! [`Registry`](crate::registry::Registry), samples widths through a
//! [`Layout`](crate::layout::Layout), triggers events on an
//! [`EventBus`](crate::layout::EventBus), debounces resizes, and exposes the
//! option/variable accessors a scripting boundary expects.
//!
//! ## Workflow
//!
//! 1) Attach: [`Registry::attach`](crate::registry::Registry::attach) (typed
//!    [`Options`](crate::options::Options)) or
//!    [`Registry::init`](crate::registry::Registry::init) (JSON). The element is
//!    evaluated once and triggers `bp:<name>:initial`.
//! 2) Resize: forward each window resize to
//!    [`Registry::resize`](crate::registry::Registry::resize) and call
//!    [`Registry::tick`](crate::registry::Registry::tick) once
//!    [`Registry::next_deadline`](crate::registry::Registry::next_deadline) has passed.
//! 3) Refresh: [`Registry::refresh`](crate::registry::Registry::refresh) re-checks on demand.
//! 4) Detach: [`Registry::detach`](crate::registry::Registry::detach).
//!
//! ## Errors
//!
//! Configuration problems found while attaching are logged with `tracing` and
//! leave the element unattached. Calls on unattached elements and unknown
//! methods, keys or values return [`UsageError`](crate::error::UsageError).
//!
//! ## Logging
//!
//! With the `debug` option set, each triggered event is logged at `DEBUG`
//! level. Install any `tracing` subscriber to see it.

pub mod dispatch;
pub mod error;
pub mod layout;
pub mod options;
pub mod registry;

pub use error::UsageError;
