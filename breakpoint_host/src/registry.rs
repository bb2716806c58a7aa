// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of attached instances, keyed by host element handle.
//!
//! ## Overview
//!
//! Each attached element owns one [`Instance`]: its [`Options`], the derived
//! classifier settings, a [`ClassifierState`], and a resize [`Debouncer`].
//! The registry is the only owner; detaching drops all of it.
//!
//! ## Resize binding
//!
//! The host forwards window resizes with [`Registry::resize`] and drives time
//! with [`Registry::tick`], using [`Registry::next_deadline`] to know when the
//! next trailing-edge evaluation is due. Instances are visited in attach order,
//! so events from one resize reach the bus in the order elements were attached.
//!
//! ```
//! use std::time::Duration;
//! use breakpoint_host::layout::Layout;
//! use breakpoint_host::options::Options;
//! use breakpoint_host::registry::Registry;
//! use kurbo::Rect;
//!
//! struct Page { width: f64 }
//! impl Layout for Page {
//!     fn outer_bounds(&self, _selector: &str) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, self.width, 100.0))
//!     }
//! }
//!
//! let ms = Duration::from_millis;
//! let mut page = Page { width: 750.0 };
//! let mut events: Vec<(String, String)> = Vec::new();
//! let mut registry: Registry<u32, Duration> = Registry::new();
//!
//! registry.attach(1, Options::default(), &page, &mut events).unwrap();
//! page.width = 970.0;
//! registry.resize(ms(0), &page, &mut events);
//! registry.tick(ms(100), &page, &mut events);
//!
//! let names: Vec<_> = events.iter().map(|(_, e)| e.as_str()).collect();
//! assert_eq!(names, ["bp:sm:initial", "bp:sm:exit", "bp:md:enter"]);
//! ```

use std::time::Instant;

use breakpoint_core::ConfigError;
use breakpoint_core::debounce::{Debouncer, Timestamp};
use breakpoint_core::state::{ClassifierConfig, ClassifierState, Evaluation};
use serde_json::Value;

use crate::error::UsageError;
use crate::layout::{EventBus, Layout, ModelSampler, TargetSink};
use crate::options::{Options, from_value};

/// Every state variable key.
pub const VARIABLE_KEYS: &[&str] = &["currentView", "initial", "modelWidth"];

/// One attached element's options and state.
#[derive(Clone, Debug)]
pub struct Instance<T> {
    options: Options,
    config: ClassifierConfig,
    state: ClassifierState,
    resize: Debouncer<T>,
}

impl<T: Timestamp> Instance<T> {
    fn new(options: Options) -> Self {
        let config = options.classifier_config();
        let state = ClassifierState::new(&config);
        let resize = options.debouncer();
        Self {
            options,
            config,
            state,
            resize,
        }
    }

    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Classifier state.
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// Resize debouncer.
    pub fn resize_debouncer(&self) -> &Debouncer<T> {
        &self.resize
    }

    fn evaluate<L, B>(&mut self, layout: &L, bus: &mut B) -> Result<Evaluation, ConfigError>
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        let sampler = ModelSampler::new(layout, &self.options.model_selector);
        let mut sink = TargetSink::new(bus, &self.options.event_target, self.options.debug);
        self.state.evaluate(&self.config, &sampler, &mut sink)
    }

    fn replace_options(&mut self, options: Options) {
        self.config = options.classifier_config();
        if options.debounce_ms != self.options.debounce_ms
            || options.leading_edge != self.options.leading_edge
        {
            // A pending resize is dropped with the old debouncer.
            self.resize = options.debouncer();
        }
        self.options = options;
    }
}

/// Owner of every attached instance.
#[derive(Clone, Debug)]
pub struct Registry<H, T = Instant> {
    instances: Vec<(H, Instance<T>)>,
}

impl<H, T> Default for Registry<H, T> {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
        }
    }
}

impl<H: Copy + Eq + core::fmt::Debug, T: Timestamp> Registry<H, T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached elements.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Whether `element` has an instance.
    pub fn is_attached(&self, element: H) -> bool {
        self.position(element).is_some()
    }

    /// Instance attached to `element`.
    pub fn instance(&self, element: H) -> Option<&Instance<T>> {
        self.position(element).map(|i| &self.instances[i].1)
    }

    /// Attached element handles, in attach order.
    pub fn elements(&self) -> impl Iterator<Item = H> + '_ {
        self.instances.iter().map(|(h, _)| *h)
    }

    /// Attach an instance to `element` and evaluate it once.
    ///
    /// Returns `Ok(false)` without doing anything if `element` is already
    /// attached. Invalid options or a missing reference element are logged
    /// and returned; the element then stays unattached.
    pub fn attach<L, B>(
        &mut self,
        element: H,
        options: Options,
        layout: &L,
        bus: &mut B,
    ) -> Result<bool, ConfigError>
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        if self.is_attached(element) {
            return Ok(false);
        }
        if let Err(err) = options.validate() {
            tracing::warn!(?element, %err, "Breakpoints have not been properly configured");
            return Err(err);
        }
        if layout.outer_bounds(&options.model_selector).is_none() {
            tracing::warn!(
                ?element,
                selector = %options.model_selector,
                "Model element not found on page"
            );
            return Err(ConfigError::ReferenceMissing);
        }
        let mut instance = Instance::new(options);
        instance.evaluate(layout, bus)?;
        tracing::trace!(
            ?element,
            breakpoint = instance.state.current_breakpoint(),
            "Attached breakpoint instance"
        );
        self.instances.push((element, instance));
        Ok(true)
    }

    /// Detach `element`, dropping its state and any pending resize.
    ///
    /// Returns whether it was attached.
    pub fn detach(&mut self, element: H) -> bool {
        match self.position(element) {
            Some(i) => {
                self.instances.remove(i);
                tracing::trace!(?element, "Detached breakpoint instance");
                true
            }
            None => false,
        }
    }

    /// Forward a resize stimulus at `now` to every instance.
    ///
    /// Leading-edge instances idle before this call evaluate immediately;
    /// trailing-edge ones evaluate from a later [`tick`](Self::tick). A
    /// trailing deadline that elapsed without a `tick` is evaluated here
    /// before the new burst starts. Returns the number of immediate evaluations.
    pub fn resize<L, B>(&mut self, now: T, layout: &L, bus: &mut B) -> usize
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        let mut ran = 0;
        for (element, instance) in &mut self.instances {
            if instance.resize.schedule(now) {
                ran += usize::from(run(*element, instance, layout, bus));
            }
        }
        ran
    }

    /// Evaluate every instance whose debounced resize is due at `now`.
    ///
    /// Returns the number of evaluations.
    pub fn tick<L, B>(&mut self, now: T, layout: &L, bus: &mut B) -> usize
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        let mut ran = 0;
        for (element, instance) in &mut self.instances {
            if instance.resize.poll(now) {
                ran += usize::from(run(*element, instance, layout, bus));
            }
        }
        ran
    }

    /// Earliest armed resize deadline across all instances.
    pub fn next_deadline(&self) -> Option<T> {
        self.instances
            .iter()
            .filter_map(|(_, i)| i.resize.deadline())
            .min()
    }

    /// Evaluate `element` now, outside the resize binding.
    pub fn refresh<L, B>(&mut self, element: H, layout: &L, bus: &mut B) -> Result<Evaluation, UsageError>
    where
        L: Layout + ?Sized,
        B: EventBus + ?Sized,
    {
        let instance = self.instance_mut(element)?;
        Ok(instance.evaluate(layout, bus)?)
    }

    /// Read an option of `element`.
    pub fn option(&self, element: H, key: &str) -> Result<Value, UsageError> {
        self.instance(element)
            .ok_or(UsageError::NotAttached)?
            .options
            .get(key)
    }

    /// Write an option of `element`.
    ///
    /// Takes effect from the next evaluation; nothing is re-evaluated here.
    /// Changing the debounce window or edge drops a pending resize.
    pub fn set_option(&mut self, element: H, key: &str, value: Value) -> Result<(), UsageError> {
        let instance = self.instance_mut(element)?;
        let mut options = instance.options.clone();
        options.set(key, value)?;
        instance.replace_options(options);
        Ok(())
    }

    /// Read a state variable of `element`: `currentView`, `initial` or `modelWidth`.
    pub fn variable(&self, element: H, key: &str) -> Result<Value, UsageError> {
        let state = &self.instance(element).ok_or(UsageError::NotAttached)?.state;
        match key {
            "currentView" => Ok(Value::from(state.current_breakpoint())),
            "initial" => Ok(Value::from(state.is_initial())),
            "modelWidth" => Ok(Value::from(state.last_measured_width())),
            _ => Err(UsageError::UnknownVariable { key: key.into() }),
        }
    }

    /// Overwrite a state variable of `element`.
    pub fn set_variable(&mut self, element: H, key: &str, value: Value) -> Result<(), UsageError> {
        let state = &mut self.instance_mut(element)?.state;
        match key {
            "currentView" => {
                let name: String = from_value(key, value)?;
                state.set_current_breakpoint(name);
            }
            "initial" => state.set_initial(from_value(key, value)?),
            "modelWidth" => state.set_last_measured_width(from_value(key, value)?),
            _ => return Err(UsageError::UnknownVariable { key: key.into() }),
        }
        Ok(())
    }

    fn position(&self, element: H) -> Option<usize> {
        self.instances.iter().position(|(h, _)| *h == element)
    }

    fn instance_mut(&mut self, element: H) -> Result<&mut Instance<T>, UsageError> {
        let i = self.position(element).ok_or(UsageError::NotAttached)?;
        Ok(&mut self.instances[i].1)
    }
}

fn run<H, T, L, B>(element: H, instance: &mut Instance<T>, layout: &L, bus: &mut B) -> bool
where
    H: core::fmt::Debug,
    T: Timestamp,
    L: Layout + ?Sized,
    B: EventBus + ?Sized,
{
    match instance.evaluate(layout, bus) {
        Ok(eval) => {
            tracing::trace!(?element, width = eval.width, emitted = eval.emitted, "Evaluated breakpoint");
            true
        }
        Err(err) => {
            tracing::warn!(?element, %err, "Breakpoint evaluation skipped");
            false
        }
    }
}
