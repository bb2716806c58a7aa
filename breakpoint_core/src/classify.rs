// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width → breakpoint classification.
//!
//! ## Exact matching
//!
//! The measured width comes from a reference element whose width is pinned by
//! CSS media queries to exactly one configured trigger width per breakpoint.
//! Classification therefore tests for equality, not for ranges: a width that
//! equals no trigger width means the page is in the default (smallest)
//! breakpoint.
//!
//! ```
//! use breakpoint_core::breakpoints::Breakpoints;
//! use breakpoint_core::classify::classify;
//!
//! let bps = Breakpoints::bootstrap();
//! assert_eq!(classify(750, &bps, "xs"), "sm");
//! assert_eq!(classify(800, &bps, "xs"), "xs");
//! ```

use crate::breakpoints::{Breakpoints, Width};

/// Name of the breakpoint `width` falls into.
///
/// Returns the first entry (in configured order) whose trigger width equals
/// `width`, or `default_name` when none does.
pub fn classify<'a>(width: Width, breakpoints: &'a Breakpoints, default_name: &'a str) -> &'a str {
    breakpoints.find_exact(width).unwrap_or(default_name)
}
