// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-based method calls for scripting boundaries.
//!
//! A thin adapter over the typed [`Registry`] API: options arrive as JSON and
//! methods are picked by name. Calling any method on an element without an
//! instance, or calling an unknown method, fails with
//! [`UsageError::MethodNotFound`].
//!
//! | method | args | returns |
//! |---|---|---|
//! | `option` | `key` / `key, value` | value / nothing |
//! | `variable` | `key` / `key, value` | value / nothing |
//! | `destroy` | | nothing |
//! | `checkBreakpoint`, `refresh` | | nothing |

use breakpoint_core::debounce::Timestamp;
use serde_json::Value;

use crate::error::UsageError;
use crate::layout::{EventBus, Layout};
use crate::options::{Options, kind_of};
use crate::registry::Registry;

/// Method names accepted by [`Registry::call`].
pub const METHODS: &[&str] = &["option", "variable", "destroy", "checkBreakpoint", "refresh"];

impl<H: Copy + Eq + core::fmt::Debug, T: Timestamp> Registry<H, T> {
    /// Attach `element` from JSON options (`null` for defaults).
    ///
    /// Configuration problems are logged and returned; the element stays
    /// unattached. Returns `Ok(false)` if `element` was already attached.
    pub fn init<L, B>(
        &mut self,
        element: H,
        options: Value,
        layout: &L,
        bus: &mut B,
    ) -> Result<bool, UsageError>
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        if self.is_attached(element) {
            return Ok(false);
        }
        let options = match Options::from_value(options) {
            Ok(options) => options,
            Err(err) => {
                tracing::warn!(?element, %err, "Breakpoints have not been properly configured");
                return Err(err);
            }
        };
        Ok(self.attach(element, options, layout, bus)?)
    }

    /// Call a method by name on `element`'s instance.
    ///
    /// Getters return `Some(value)`; everything else returns `None`.
    pub fn call<L, B>(
        &mut self,
        element: H,
        method: &str,
        args: &[Value],
        layout: &L,
        bus: &mut B,
    ) -> Result<Option<Value>, UsageError>
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        if !self.is_attached(element) || !METHODS.contains(&method) {
            return Err(UsageError::MethodNotFound {
                method: method.into(),
            });
        }
        match method {
            "option" => match args {
                [key] => self.option(element, key_arg(method, key)?).map(Some),
                [key, value] => {
                    let key = key_arg(method, key)?;
                    self.set_option(element, key, value.clone()).map(|()| None)
                }
                _ => Err(arity(method, args.len())),
            },
            "variable" => match args {
                [key] => self.variable(element, key_arg(method, key)?).map(Some),
                [key, value] => {
                    let key = key_arg(method, key)?;
                    self.set_variable(element, key, value.clone()).map(|()| None)
                }
                _ => Err(arity(method, args.len())),
            },
            "destroy" => {
                self.detach(element);
                Ok(None)
            }
            // "checkBreakpoint" | "refresh"
            _ => self.refresh(element, layout, bus).map(|_| None),
        }
    }
}

fn key_arg<'a>(method: &str, key: &'a Value) -> Result<&'a str, UsageError> {
    key.as_str().ok_or_else(|| UsageError::InvalidValue {
        key: method.into(),
        reason: format!("expected a string key, found {}", kind_of(key)),
    })
}

fn arity(method: &str, got: usize) -> UsageError {
    UsageError::InvalidValue {
        key: method.into(),
        reason: format!("expected 1 or 2 arguments, got {got}"),
    }
}
