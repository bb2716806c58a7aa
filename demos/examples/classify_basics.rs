// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifier basics.
//!
//! Feeds width sequences through a fresh classifier and prints the
//! notifications each step produces.
//!
//! Run:
//! - `cargo run -p breakpoint_demos --example classify_basics`

use breakpoint_core::state::{ClassifierConfig, ClassifierState};
use breakpoint_core::types::Notification;

fn walk(config: &ClassifierConfig, widths: &[u32]) -> Vec<Vec<String>> {
    let mut state = ClassifierState::new(config);
    let mut steps = Vec::new();
    for width in widths {
        let mut step: Vec<Notification> = Vec::new();
        state
            .evaluate(config, width, &mut step)
            .expect("a fixed width always measures");
        let names: Vec<String> = step.iter().map(ToString::to_string).collect();
        println!(
            "  {width:>5} px -> {:<3} {names:?}",
            state.current_breakpoint()
        );
        steps.push(names);
    }
    steps
}

fn main() {
    let config = ClassifierConfig::default();
    config.validate().expect("bootstrap defaults are valid");

    println!("== Walk through breakpoints ==");
    let steps = walk(&config, &[500, 750, 970, 500]);
    assert_eq!(
        steps,
        vec![
            vec!["bp:xs:initial"],
            vec!["bp:xs:exit", "bp:sm:enter"],
            vec!["bp:sm:exit", "bp:md:enter"],
            vec!["bp:md:exit", "bp:xs:enter"],
        ]
    );

    println!("== Same width repeated ==");
    let steps = walk(&config, &[750, 750, 750]);
    assert_eq!(steps, vec![vec!["bp:sm:initial"], vec![], vec![]]);

    // Widths between trigger widths are not ranges: 800 px is the default.
    println!("== Near misses ==");
    let steps = walk(&config, &[751, 800, 1169]);
    assert_eq!(steps, vec![vec!["bp:xs:initial"], vec![], vec![]]);
}
