// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance classifier state and the evaluate step.
//!
//! ## Usage
//!
//! 1) Build a [`ClassifierConfig`] and [`validate`](ClassifierConfig::validate) it.
//! 2) Create one [`ClassifierState`] per observed element.
//! 3) Call [`ClassifierState::evaluate`] on load and after every (debounced) resize.
//!
//! ```
//! use breakpoint_core::state::{ClassifierConfig, ClassifierState};
//! use breakpoint_core::types::Notification;
//!
//! let config = ClassifierConfig::default();
//! let mut state = ClassifierState::new(&config);
//! let mut seen: Vec<Notification> = Vec::new();
//!
//! state.evaluate(&config, &500_u32, &mut seen).unwrap();
//! state.evaluate(&config, &750_u32, &mut seen).unwrap();
//! assert_eq!(
//!     seen,
//!     [
//!         Notification::initial("xs"),
//!         Notification::exit("xs"),
//!         Notification::enter("sm"),
//!     ]
//! );
//! assert_eq!(state.current_breakpoint(), "sm");
//! ```

use alloc::string::String;

use crate::breakpoints::{Breakpoints, Width};
use crate::classify::classify;
use crate::error::ConfigError;
use crate::transition::transition;
use crate::types::{EmitStyle, NotificationSink, WidthSampler};

/// Immutable classification settings for one instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Named trigger widths, in tie-break order.
    pub breakpoints: Breakpoints,
    /// Breakpoint used when no trigger width matches.
    pub default_breakpoint: String,
    /// Whether bare notifications accompany phased ones.
    pub style: EmitStyle,
}

impl Default for ClassifierConfig {
    /// Bootstrap 3 breakpoints with `"xs"` as the default.
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::bootstrap(),
            default_breakpoint: "xs".into(),
            style: EmitStyle::Phased,
        }
    }
}

impl ClassifierConfig {
    /// Create a config with the phased emission style.
    pub fn new(breakpoints: Breakpoints, default_breakpoint: impl Into<String>) -> Self {
        Self {
            breakpoints,
            default_breakpoint: default_breakpoint.into(),
            style: EmitStyle::Phased,
        }
    }

    /// Replace the emission style.
    pub fn with_style(mut self, style: EmitStyle) -> Self {
        self.style = style;
        self
    }

    /// Check the settings can classify unambiguously.
    ///
    /// The default name must be non-empty and must not also be a configured
    /// breakpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_breakpoint.is_empty() {
            return Err(ConfigError::EmptyDefault);
        }
        if self.breakpoints.contains(&self.default_breakpoint) {
            return Err(ConfigError::DefaultCollides {
                name: self.default_breakpoint.clone(),
            });
        }
        Ok(())
    }

    /// Classify `width` against these settings.
    pub fn classify(&self, width: Width) -> &str {
        classify(width, &self.breakpoints, &self.default_breakpoint)
    }
}

/// Result of one successful evaluation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Evaluation {
    /// Width that was classified.
    pub width: Width,
    /// Number of notifications sent to the sink.
    pub emitted: usize,
}

/// Mutable per-instance state.
///
/// Only [`evaluate`](Self::evaluate) and [`observe`](Self::observe) change it
/// (the setters exist for host-side variable access). Callers on
/// multi-threaded hosts must serialize those calls per instance; the state
/// is read and then written non-atomically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierState {
    current: String,
    initial: bool,
    last_width: Width,
}

impl ClassifierState {
    /// Fresh state: in the default breakpoint, no classification yet.
    pub fn new(config: &ClassifierConfig) -> Self {
        Self::with_default(config.default_breakpoint.clone())
    }

    /// Fresh state starting in `default_breakpoint`.
    pub fn with_default(default_breakpoint: impl Into<String>) -> Self {
        Self {
            current: default_breakpoint.into(),
            initial: true,
            last_width: 0,
        }
    }

    /// Breakpoint the instance last settled into.
    pub fn current_breakpoint(&self) -> &str {
        &self.current
    }

    /// Whether no classification has completed yet.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Width seen by the most recent evaluation (0 before the first). Diagnostic only.
    pub fn last_measured_width(&self) -> Width {
        self.last_width
    }

    /// Overwrite the recorded breakpoint.
    pub fn set_current_breakpoint(&mut self, name: impl Into<String>) {
        self.current = name.into();
    }

    /// Overwrite the initial flag.
    ///
    /// Setting it back to `true` makes the next evaluation emit `initial` again.
    pub fn set_initial(&mut self, initial: bool) {
        self.initial = initial;
    }

    /// Overwrite the recorded width.
    pub fn set_last_measured_width(&mut self, width: Width) {
        self.last_width = width;
    }

    /// Measure, classify, emit, and record.
    ///
    /// If `sampler` cannot produce a width, returns
    /// [`ConfigError::ReferenceMissing`] without emitting or changing state.
    pub fn evaluate<W, S>(
        &mut self,
        config: &ClassifierConfig,
        sampler: &W,
        sink: &mut S,
    ) -> Result<Evaluation, ConfigError>
    where
        W: WidthSampler + ?Sized,
        S: NotificationSink + ?Sized,
    {
        let width = sampler.measure().ok_or(ConfigError::ReferenceMissing)?;
        let emitted = self.observe(width, config, sink);
        Ok(Evaluation { width, emitted })
    }

    /// Classify an already measured width, emit, and record.
    ///
    /// Returns the number of notifications emitted.
    pub fn observe<S: NotificationSink + ?Sized>(
        &mut self,
        width: Width,
        config: &ClassifierConfig,
        sink: &mut S,
    ) -> usize {
        let next = config.classify(width);
        let emitted = transition(&self.current, next, self.initial).emit_to(config.style, sink);
        if self.current != next {
            self.current.clear();
            self.current.push_str(next);
        }
        self.initial = false;
        self.last_width = width;
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Notification;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Run a width sequence on a fresh instance, collecting notifications per step.
    fn drive(config: &ClassifierConfig, widths: &[Width]) -> Vec<Vec<Notification>> {
        let mut state = ClassifierState::new(config);
        widths
            .iter()
            .map(|w| {
                let mut step = Vec::new();
                state.evaluate(config, w, &mut step).unwrap();
                step
            })
            .collect()
    }

    #[test]
    fn bootstrap_walk_through_breakpoints() {
        let steps = drive(&ClassifierConfig::default(), &[500, 750, 970, 500]);
        assert_eq!(
            steps,
            vec![
                vec![Notification::initial("xs")],
                vec![Notification::exit("xs"), Notification::enter("sm")],
                vec![Notification::exit("sm"), Notification::enter("md")],
                vec![Notification::exit("md"), Notification::enter("xs")],
            ]
        );
    }

    #[test]
    fn repeated_width_emits_once() {
        let steps = drive(&ClassifierConfig::default(), &[750, 750, 750]);
        assert_eq!(
            steps,
            vec![vec![Notification::initial("sm")], vec![], vec![]]
        );
    }

    #[test]
    fn exactly_one_initial_over_any_sequence() {
        let config = ClassifierConfig::default();
        let widths = [1170, 0, 970, 970, 751, 750, 1170, 300, 300, 970];
        let steps = drive(&config, &widths);
        let initials: Vec<_> = steps
            .iter()
            .flatten()
            .filter(|n| n.phase == Some(crate::types::Phase::Initial))
            .collect();
        assert_eq!(initials, vec![&Notification::initial("lg")]);
        assert_eq!(steps[0], vec![Notification::initial("lg")]);
    }

    // Every non-initial step is either empty or exactly [exit(prev), enter(next)].
    #[test]
    fn changes_are_exit_then_enter() {
        let config = ClassifierConfig::default();
        let widths = [970, 750, 750, 1170, 10, 970, 1170];
        let mut state = ClassifierState::new(&config);
        for &w in &widths {
            let before = String::from(state.current_breakpoint());
            let was_initial = state.is_initial();
            let mut step = Vec::new();
            state.observe(w, &config, &mut step);
            let after = state.current_breakpoint();
            if was_initial {
                assert_eq!(step, vec![Notification::initial(after)]);
            } else if before == after {
                assert!(step.is_empty());
            } else {
                assert_eq!(
                    step,
                    vec![Notification::exit(before.as_str()), Notification::enter(after)]
                );
            }
        }
    }

    #[test]
    fn missing_reference_changes_nothing() {
        let config = ClassifierConfig::default();
        let mut state = ClassifierState::new(&config);
        let mut sink = Vec::new();
        let err = state.evaluate(&config, &None::<Width>, &mut sink).unwrap_err();
        assert_eq!(err, ConfigError::ReferenceMissing);
        assert!(sink.is_empty());
        assert!(state.is_initial());
        assert_eq!(state.current_breakpoint(), "xs");

        // The first successful evaluation is still the initial one.
        state.evaluate(&config, &Some(970_u32), &mut sink).unwrap();
        assert_eq!(sink, vec![Notification::initial("md")]);
    }

    #[test]
    fn evaluation_reports_width_and_count() {
        let config = ClassifierConfig::default();
        let mut state = ClassifierState::new(&config);
        let mut sink = Vec::new();
        let first = state.evaluate(&config, &1170_u32, &mut sink).unwrap();
        assert_eq!(first, Evaluation { width: 1170, emitted: 1 });
        let second = state.evaluate(&config, &970_u32, &mut sink).unwrap();
        assert_eq!(second, Evaluation { width: 970, emitted: 2 });
        assert_eq!(state.last_measured_width(), 970);
    }

    #[test]
    fn bare_style_through_evaluate() {
        let config = ClassifierConfig::default().with_style(EmitStyle::PhasedWithBare);
        let steps = drive(&config, &[750, 970]);
        assert_eq!(
            steps,
            vec![
                vec![Notification::initial("sm"), Notification::bare("sm")],
                vec![
                    Notification::exit("sm"),
                    Notification::enter("md"),
                    Notification::bare("md"),
                ],
            ]
        );
    }

    #[test]
    fn resetting_initial_flag_reannounces() {
        let config = ClassifierConfig::default();
        let mut state = ClassifierState::new(&config);
        let mut sink = Vec::new();
        state.observe(750, &config, &mut sink);
        state.set_initial(true);
        state.observe(750, &config, &mut sink);
        assert_eq!(
            sink,
            vec![Notification::initial("sm"), Notification::initial("sm")]
        );
    }

    #[test]
    fn validate_rejects_bad_defaults() {
        let mut config = ClassifierConfig::default();
        assert_eq!(config.validate(), Ok(()));

        config.default_breakpoint = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyDefault));

        config.default_breakpoint = "md".into();
        assert_eq!(
            config.validate(),
            Err(ConfigError::DefaultCollides { name: "md".into() })
        );
    }
}
