// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance options and their key/value accessors.
//!
//! ## Keys
//!
//! | key | type | default |
//! |---|---|---|
//! | `defaultBreakpoint` | string | `"xs"` |
//! | `breakpoints` | map of name → width | `{"sm": 750, "md": 970, "lg": 1170}` |
//! | `modelSelector` | string | `".container"` |
//! | `eventTarget` | string | `"window"` |
//! | `debug` | bool | `false` |
//! | `debounceMs` | integer | `100` |
//! | `leadingEdge` | bool | `false` |
//! | `bareEvents` | bool | `false` |
//!
//! Missing keys take their defaults, so a partial JSON object is enough:
//!
//! ```
//! use breakpoint_host::options::Options;
//!
//! let opts = Options::from_json(r#"{"defaultBreakpoint": "phone", "breakpoints": {"tablet": 720}}"#).unwrap();
//! assert_eq!(opts.default_breakpoint, "phone");
//! assert_eq!(opts.model_selector, ".container");
//! assert_eq!(opts.breakpoints.get("tablet"), Some(720));
//! ```

use core::time::Duration;

use breakpoint_core::ConfigError;
use breakpoint_core::breakpoints::Breakpoints;
use breakpoint_core::debounce::{Debouncer, Edge, Timestamp};
use breakpoint_core::state::ClassifierConfig;
use breakpoint_core::types::EmitStyle;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UsageError;

/// Every option key, in documentation order.
pub const OPTION_KEYS: &[&str] = &[
    "defaultBreakpoint",
    "breakpoints",
    "modelSelector",
    "eventTarget",
    "debug",
    "debounceMs",
    "leadingEdge",
    "bareEvents",
];

/// Settings for one attached instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Breakpoint used when the reference width matches no trigger width.
    pub default_breakpoint: String,
    /// Named trigger widths, in tie-break order.
    pub breakpoints: Breakpoints,
    /// Selector of the reference element; the first match is measured.
    pub model_selector: String,
    /// Target notifications are triggered on.
    pub event_target: String,
    /// Log every triggered notification.
    pub debug: bool,
    /// Resize quiescence window in milliseconds.
    pub debounce_ms: u64,
    /// Evaluate on the first resize of a burst instead of after it.
    pub leading_edge: bool,
    /// Also trigger a bare `bp:<name>` after `initial` and `enter`.
    pub bare_events: bool,
}

impl Default for Options {
    /// Defaults matching the Bootstrap 3 grid.
    fn default() -> Self {
        Self {
            default_breakpoint: "xs".into(),
            breakpoints: Breakpoints::bootstrap(),
            model_selector: ".container".into(),
            event_target: "window".into(),
            debug: false,
            debounce_ms: 100,
            leading_edge: false,
            bare_events: false,
        }
    }
}

impl Options {
    /// Parse options from a JSON object string. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, UsageError> {
        let value: Value = serde_json::from_str(json).map_err(|e| UsageError::InvalidValue {
            key: "options".into(),
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Build options from a JSON value. `null` means all defaults.
    ///
    /// A `breakpoints` entry that is not a map is reported as
    /// [`ConfigError::NotAMapping`].
    pub fn from_value(value: Value) -> Result<Self, UsageError> {
        match &value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => {
                if let Some(bps) = map.get("breakpoints") {
                    ensure_mapping(bps)?;
                }
            }
            other => {
                return Err(UsageError::InvalidValue {
                    key: "options".into(),
                    reason: format!("expected an object, found {}", kind_of(other)),
                });
            }
        }
        serde_json::from_value(value).map_err(|e| UsageError::InvalidValue {
            key: "options".into(),
            reason: e.to_string(),
        })
    }

    /// Classification settings derived from these options.
    pub fn classifier_config(&self) -> ClassifierConfig {
        let style = if self.bare_events {
            EmitStyle::PhasedWithBare
        } else {
            EmitStyle::Phased
        };
        ClassifierConfig::new(self.breakpoints.clone(), self.default_breakpoint.clone())
            .with_style(style)
    }

    /// Check that the options can drive a classifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier_config().validate()
    }

    /// Resize quiescence window.
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// A fresh resize debouncer for these options.
    pub fn debouncer<T: Timestamp>(&self) -> Debouncer<T> {
        let edge = if self.leading_edge {
            Edge::Leading
        } else {
            Edge::Trailing
        };
        Debouncer::with_edge(self.debounce_window(), edge)
    }

    /// Read one option by key.
    pub fn get(&self, key: &str) -> Result<Value, UsageError> {
        let value = match key {
            "defaultBreakpoint" => Value::from(self.default_breakpoint.clone()),
            "breakpoints" => to_value(key, &self.breakpoints)?,
            "modelSelector" => Value::from(self.model_selector.clone()),
            "eventTarget" => Value::from(self.event_target.clone()),
            "debug" => Value::from(self.debug),
            "debounceMs" => Value::from(self.debounce_ms),
            "leadingEdge" => Value::from(self.leading_edge),
            "bareEvents" => Value::from(self.bare_events),
            _ => return Err(UsageError::UnknownOption { key: key.into() }),
        };
        Ok(value)
    }

    /// Write one option by key.
    ///
    /// The options are left unchanged if the value has the wrong shape or the
    /// result would not validate.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), UsageError> {
        let mut next = self.clone();
        match key {
            "defaultBreakpoint" => next.default_breakpoint = from_value(key, value)?,
            "breakpoints" => {
                ensure_mapping(&value)?;
                next.breakpoints = from_value(key, value)?;
            }
            "modelSelector" => next.model_selector = from_value(key, value)?,
            "eventTarget" => next.event_target = from_value(key, value)?,
            "debug" => next.debug = from_value(key, value)?,
            "debounceMs" => next.debounce_ms = from_value(key, value)?,
            "leadingEdge" => next.leading_edge = from_value(key, value)?,
            "bareEvents" => next.bare_events = from_value(key, value)?,
            _ => return Err(UsageError::UnknownOption { key: key.into() }),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn ensure_mapping(value: &Value) -> Result<(), ConfigError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ConfigError::NotAMapping {
            found: kind_of(value).into(),
        })
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn from_value<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, UsageError> {
    serde_json::from_value(value).map_err(|e| UsageError::InvalidValue {
        key: key.into(),
        reason: e.to_string(),
    })
}

fn to_value<T: Serialize>(key: &str, value: &T) -> Result<Value, UsageError> {
    serde_json::to_value(value).map_err(|e| UsageError::InvalidValue {
        key: key.into(),
        reason: e.to_string(),
    })
}
