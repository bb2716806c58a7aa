// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-based calls with JSON options.
//!
//! Mirrors how a scripting layer would drive instances: options as JSON,
//! methods by name, errors for misuse.
//!
//! Run:
//! - `cargo run -p breakpoint_demos --example scripting_dispatch`

use std::time::Instant;

use breakpoint_host::UsageError;
use breakpoint_host::layout::Layout;
use breakpoint_host::registry::Registry;
use kurbo::Rect;
use serde_json::json;

struct Probe(f64);

impl Layout for Probe {
    fn outer_bounds(&self, selector: &str) -> Option<Rect> {
        (selector == "#bp-probe").then_some(Rect::new(0.0, 0.0, self.0, 1.0))
    }
}

fn main() -> Result<(), UsageError> {
    let mut probe = Probe(2.0);
    let mut events: Vec<(String, String)> = Vec::new();
    let mut registry: Registry<u64, Instant> = Registry::new();

    let options = json!({
        "defaultBreakpoint": "phone",
        "breakpoints": { "tablet": 2, "desktop": 3 },
        "modelSelector": "#bp-probe",
        "eventTarget": "document",
        "bareEvents": true
    });
    registry.init(42, options, &probe, &mut events)?;

    let view = registry.call(42, "variable", &[json!("currentView")], &probe, &mut events)?;
    println!("currentView = {view:?}");

    probe.0 = 3.0;
    registry.call(42, "checkBreakpoint", &[], &probe, &mut events)?;
    registry.call(42, "option", &[json!("eventTarget"), json!("window")], &probe, &mut events)?;
    probe.0 = 1.0;
    registry.call(42, "refresh", &[], &probe, &mut events)?;

    println!("== Events ==");
    for (target, event) in &events {
        println!("  {target}: {event}");
    }

    registry.call(42, "destroy", &[], &probe, &mut events)?;
    match registry.call(42, "refresh", &[], &probe, &mut events) {
        Err(err) => println!("after destroy: {err}"),
        Ok(_) => unreachable!("destroyed instances have no methods"),
    }

    assert_eq!(
        events,
        [
            ("document", "bp:tablet:initial"),
            ("document", "bp:tablet"),
            ("document", "bp:tablet:exit"),
            ("document", "bp:desktop:enter"),
            ("document", "bp:desktop"),
            ("window", "bp:desktop:exit"),
            ("window", "bp:phone:enter"),
            ("window", "bp:phone"),
        ]
        .map(|(t, e)| (t.to_string(), e.to_string()))
    );
    Ok(())
}
