// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint Core: a deterministic, `no_std` breakpoint classifier.
//!
//! ## Overview
//!
//! Responsive layouts usually define their breakpoints in CSS media queries.
//! Duplicating those values in application code lets the two drift apart.
//! Instead, pin the width of a reference element per breakpoint in CSS, measure
//! that element, and let this crate turn the measurement into named
//! breakpoint notifications.
//!
//! This crate does not measure layout and does not deliver events. It maps a
//! width to a breakpoint name and decides which notifications a change
//! produces, in which order.
//!
//! ## Pieces
//!
//! - [`Breakpoints`](crate::breakpoints::Breakpoints): ordered name → trigger width table.
//! - [`classify`](crate::classify::classify): exact-match classification with a default fallback.
//! - [`transition`](crate::transition::transition): `initial`, `exit`+`enter`, or nothing.
//! - [`ClassifierState`](crate::state::ClassifierState): per-instance state and the
//!   measure → classify → emit → record step.
//! - [`Debouncer`](crate::debounce::Debouncer): coalesces resize bursts over
//!   caller-supplied time.
//!
//! ## Notifications
//!
//! Notification names are `bp:<name>:<phase>` with phase `initial`, `enter` or `exit`.
//! The first evaluation of an instance emits exactly one `initial`. Later
//! changes emit `exit` for the old breakpoint strictly before `enter` for the new one.
//! With [`EmitStyle::PhasedWithBare`](crate::types::EmitStyle::PhasedWithBare) a bare
//! `bp:<name>` follows every `initial` and `enter`.
//!
//! ## Example
//!
//! ```
//! use breakpoint_core::state::{ClassifierConfig, ClassifierState};
//! use breakpoint_core::types::Notification;
//!
//! let config = ClassifierConfig::default(); // sm=750, md=970, lg=1170, default xs
//! config.validate().unwrap();
//! let mut state = ClassifierState::new(&config);
//!
//! let mut names = Vec::new();
//! for width in [500_u32, 750, 970, 500] {
//!     let mut step: Vec<Notification> = Vec::new();
//!     state.evaluate(&config, &width, &mut step).unwrap();
//!     names.extend(step.iter().map(ToString::to_string));
//! }
//! assert_eq!(
//!     names,
//!     [
//!         "bp:xs:initial",
//!         "bp:xs:exit", "bp:sm:enter",
//!         "bp:sm:exit", "bp:md:enter",
//!         "bp:md:exit", "bp:xs:enter",
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod breakpoints;
pub mod classify;
pub mod debounce;
pub mod error;
pub mod state;
pub mod transition;
pub mod types;

pub use error::ConfigError;
