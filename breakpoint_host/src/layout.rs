// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborators: where widths come from and where events go.
//!
//! ## Notes
//!
//! [`Layout`] is queried by selector and returns world-space bounds; the
//! sampled width is the bounds' width rounded to the nearest whole pixel, the
//! way `outerWidth`-style measurements report it.
//! [`EventBus`] receives fully formatted event names such as `bp:md:enter`.

use breakpoint_core::breakpoints::Width;
use breakpoint_core::types::{Notification, NotificationSink, WidthSampler};
use kurbo::Rect;

/// Source of element geometry.
pub trait Layout {
    /// Border-box bounds of the first element matching `selector`, or `None`
    /// if nothing matches.
    fn outer_bounds(&self, selector: &str) -> Option<Rect>;
}

/// Destination for triggered events.
pub trait EventBus {
    /// Trigger `event` on `target`.
    fn trigger(&mut self, target: &str, event: &str);
}

/// Samples the width of the first element matching a selector.
#[derive(Debug)]
pub struct ModelSampler<'a, L: ?Sized> {
    layout: &'a L,
    selector: &'a str,
}

impl<'a, L: Layout + ?Sized> ModelSampler<'a, L> {
    /// Sample `selector` from `layout`.
    pub fn new(layout: &'a L, selector: &'a str) -> Self {
        Self { layout, selector }
    }
}

impl<L: Layout + ?Sized> WidthSampler for ModelSampler<'_, L> {
    fn measure(&self) -> Option<Width> {
        self.layout
            .outer_bounds(self.selector)
            .map(|r| pixel_width(r.width()))
    }
}

/// Round a layout width to whole pixels, clamped to the `Width` range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Clamped to the Width range before the cast."
)]
pub fn pixel_width(width: f64) -> Width {
    if width.is_nan() || width <= 0.0 {
        return 0;
    }
    let rounded = width.round();
    if rounded >= f64::from(Width::MAX) {
        return Width::MAX;
    }
    rounded as Width
}

/// Forwards notifications to an [`EventBus`] target, logging them in debug mode.
#[derive(Debug)]
pub struct TargetSink<'a, B: ?Sized> {
    bus: &'a mut B,
    target: &'a str,
    debug: bool,
    triggered: usize,
}

impl<'a, B: EventBus + ?Sized> TargetSink<'a, B> {
    /// Trigger on `target` of `bus`; when `debug` is set, log every event.
    pub fn new(bus: &'a mut B, target: &'a str, debug: bool) -> Self {
        Self {
            bus,
            target,
            debug,
            triggered: 0,
        }
    }

    /// Number of events triggered so far.
    pub fn triggered(&self) -> usize {
        self.triggered
    }
}

impl<B: EventBus + ?Sized> NotificationSink for TargetSink<'_, B> {
    fn notify(&mut self, notification: Notification) {
        let event = notification.to_string();
        self.bus.trigger(self.target, &event);
        self.triggered += 1;
        if self.debug {
            tracing::debug!(event_target = self.target, %event, "Triggered breakpoint event");
        }
    }
}

/// Collects `(target, event)` pairs in order.
impl EventBus for Vec<(String, String)> {
    fn trigger(&mut self, target: &str, event: &str) {
        self.push((target.into(), event.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    struct Page(HashMap<&'static str, Rect>);

    impl Layout for Page {
        fn outer_bounds(&self, selector: &str) -> Option<Rect> {
            self.0.get(selector).copied()
        }
    }

    #[test]
    fn sampler_rounds_to_pixels() {
        let page = Page(HashMap::from([
            (".container", Rect::new(15.0, 0.0, 765.0, 40.0)),
            (".narrow", Rect::new(0.0, 0.0, 969.6, 10.0)),
        ]));
        assert_eq!(ModelSampler::new(&page, ".container").measure(), Some(750));
        assert_eq!(ModelSampler::new(&page, ".narrow").measure(), Some(970));
        assert_eq!(ModelSampler::new(&page, ".missing").measure(), None);
    }

    #[test]
    fn pixel_width_clamps() {
        assert_eq!(pixel_width(-3.0), 0);
        assert_eq!(pixel_width(f64::NAN), 0);
        assert_eq!(pixel_width(0.4), 0);
        assert_eq!(pixel_width(749.5), 750);
        assert_eq!(pixel_width(1e12), Width::MAX);
    }

    /// Shared buffer a `fmt` subscriber writes into.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn notify_logged(debug: bool) -> (Vec<(String, String)>, usize, String) {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let mut bus: Vec<(String, String)> = Vec::new();
        let triggered = tracing::subscriber::with_default(subscriber, || {
            let mut sink = TargetSink::new(&mut bus, "window", debug);
            sink.notify(Notification::exit("sm"));
            sink.notify(Notification::enter("md"));
            sink.triggered()
        });
        (bus, triggered, logs.text())
    }

    #[test]
    fn target_sink_formats_and_counts() {
        let (bus, triggered, _) = notify_logged(false);
        assert_eq!(triggered, 2);
        assert_eq!(
            bus,
            vec![
                ("window".to_string(), "bp:sm:exit".to_string()),
                ("window".to_string(), "bp:md:enter".to_string()),
            ]
        );
    }

    #[test]
    fn debug_mode_logs_each_event() {
        let (bus, _, logs) = notify_logged(true);
        assert_eq!(bus.len(), 2);
        assert_eq!(logs.matches("Triggered breakpoint event").count(), 2);
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("event_target=\"window\""));
        assert!(logs.contains("event=bp:sm:exit"));
        assert!(logs.contains("event=bp:md:enter"));
    }

    #[test]
    fn quiet_mode_logs_nothing() {
        let (bus, _, logs) = notify_logged(false);
        assert_eq!(bus.len(), 2);
        assert!(logs.is_empty());
    }
}
