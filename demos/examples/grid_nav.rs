// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation over a 3x3 grid of buttons.
//!
//! This example shows the full consumer loop:
//! - `waymark_linkmap` builds the directional link map from a geometry
//!   snapshot (here, a plain `HashMap` standing in for a layout engine),
//! - `waymark_nav` turns DOM-style arrow key codes into focus moves through
//!   a timestamped cache,
//! - `reveal` computes the scroll needed to keep the focused button visible
//!   in a small viewport.
//!
//! Run:
//! - `cargo run -p waymark_demos --example grid_nav`

use std::collections::HashMap;

use kurbo::{Rect, Size};
use waymark_linkmap::{GeometrySource, LinkMap};
use waymark_nav::{ElementTraits, KeyMap, NavDriver, NavResponse, reveal};

/// Stand-in for a layout engine: button id → current page rectangle.
struct Layout {
    rects: HashMap<u32, Rect>,
}

impl GeometrySource<u32> for Layout {
    fn rect_of(&self, key: &u32) -> Option<Rect> {
        self.rects.get(key).copied()
    }
}

fn main() {
    // A 3x3 grid of 60x60 buttons on a 400x400 page, ids 1..=9 reading
    // left-to-right, top-to-bottom, with origins 140 units apart.
    let mut rects = HashMap::new();
    for row in 0..3_u32 {
        for col in 0..3_u32 {
            let id = row * 3 + col + 1;
            let x = 40.0 + f64::from(col) * 140.0;
            let y = 40.0 + f64::from(row) * 140.0;
            rects.insert(id, Rect::new(x, y, x + 60.0, y + 60.0));
        }
    }
    let layout = Layout { rects };
    let extent = Size::new(400.0, 400.0);
    let candidates = 1..=9_u32;

    let mut driver: NavDriver<u32, u32> = NavDriver::new(KeyMap::dom_arrows());
    let mut focused = 1_u32;

    // The viewport shows roughly the top-left quadrant of the page.
    let mut viewport = Rect::new(0.0, 0.0, 260.0, 260.0);

    // A remote-control session: right, right, down, down, left, up.
    let presses: [(u64, u32, &str); 6] = [
        (0, 39, "right"),
        (150, 39, "right"),
        (300, 40, "down"),
        (450, 40, "down"),
        (7_000, 37, "left"), // > 5 s later: the map is rebuilt here
        (7_150, 38, "up"),
    ];

    for (now_ms, key_code, label) in presses {
        let response = driver
            .handle_key(&key_code, &focused, ElementTraits::empty(), now_ms, || {
                LinkMap::build(candidates.clone(), &layout, extent)
            })
            .expect("geometry table is complete");

        match response {
            NavResponse::Moved(target) => {
                print!("{label:>5}: focus {focused} -> {target}");
                focused = target;
                let target_rect = layout.rects[&focused];
                if let Some(delta) = reveal(viewport, target_rect) {
                    viewport = viewport + delta;
                    print!(" (scroll by {:.0},{:.0})", delta.x, delta.y);
                }
                println!();
            }
            NavResponse::NoTarget => println!("{label:>5}: focus {focused} -> edge, staying put"),
            NavResponse::PassThrough => println!("{label:>5}: not handled"),
        }
    }

    // Arrow keys never fire while a text field has focus.
    let response = driver
        .handle_key(&40, &focused, ElementTraits::TEXT_ENTRY, 7_300, || {
            LinkMap::build(candidates.clone(), &layout, extent)
        })
        .expect("geometry table is complete");
    assert_eq!(response, NavResponse::PassThrough);
    println!("down in a text field: passed through");
}
