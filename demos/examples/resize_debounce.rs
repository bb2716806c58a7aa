// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced resizes on a simulated page.
//!
//! A burst of resize events reaches the registry; only the width at the end
//! of the burst is classified. The `debug` option logs every triggered event.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p breakpoint_demos --example resize_debounce`

use std::time::Duration;

use breakpoint_host::layout::Layout;
use breakpoint_host::options::Options;
use breakpoint_host::registry::Registry;
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

/// A page whose `.container` width follows media queries.
struct Page {
    viewport: f64,
}

impl Page {
    /// Bootstrap 3 container width for the current viewport.
    fn container_width(&self) -> f64 {
        match self.viewport {
            v if v >= 1200.0 => 1170.0,
            v if v >= 992.0 => 970.0,
            v if v >= 768.0 => 750.0,
            v => v,
        }
    }
}

impl Layout for Page {
    fn outer_bounds(&self, selector: &str) -> Option<Rect> {
        (selector == ".container").then(|| Rect::new(0.0, 0.0, self.container_width(), 600.0))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let ms = Duration::from_millis;
    let mut page = Page { viewport: 1280.0 };
    let mut events: Vec<(String, String)> = Vec::new();
    let mut registry: Registry<&str, Duration> = Registry::new();

    let options = Options {
        debug: true,
        ..Options::default()
    };
    registry
        .attach("window", options, &page, &mut events)
        .expect("page has a container");

    // Drag the window from 1280 px down to 700 px in 20 ms steps.
    let mut now = ms(0);
    for viewport in (700..=1280).rev().step_by(40) {
        page.viewport = f64::from(viewport);
        registry.resize(now, &page, &mut events);
        registry.tick(now, &page, &mut events);
        now += ms(20);
    }
    // Let the burst settle.
    while let Some(deadline) = registry.next_deadline() {
        registry.tick(deadline, &page, &mut events);
    }

    println!("== Events ==");
    for (target, event) in &events {
        println!("  {target}: {event}");
    }
    let names: Vec<_> = events.iter().map(|(_, e)| e.as_str()).collect();
    assert_eq!(names, ["bp:lg:initial", "bp:lg:exit", "bp:xs:enter"]);
}
