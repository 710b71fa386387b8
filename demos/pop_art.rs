//! A pop-art grid of colorful squares with circles inside them.
//!
//! Run with: `cargo run --example pop_art`
#![allow(clippy::expect_used)]

use tagtree::{attrs, save, Tree};

/// Bright pop-art colors.
const COLORS: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffcc00", "#ff00ff", "#00ffff",
];

fn pick_color() -> &'static str {
    COLORS[fastrand::usize(..COLORS.len())]
}

fn main() {
    let mut canvas = Tree::new("svg", attrs![width: "400px", height: "400px"]);
    let root = canvas.root();

    let rows = 5;
    let cols = 5;
    let cell_size = 80;

    for i in 0..rows {
        for j in 0..cols {
            let x = j * cell_size;
            let y = i * cell_size;

            // Square background.
            canvas.append_element(
                root,
                "rect",
                attrs![
                    x: x, y: y, width: cell_size, height: cell_size,
                    fill: pick_color(), stroke: "black", stroke_width: 2,
                ],
            );

            // Circle in the center of the square.
            canvas.append_element(
                root,
                "circle",
                attrs![
                    cx: x + cell_size / 2, cy: y + cell_size / 2, r: cell_size / 4,
                    fill: pick_color(), stroke: "black", stroke_width: 2,
                ],
            );
        }
    }

    save(&canvas, "SVG_pop_art_demo.svg").expect("failed to save SVG");
}
