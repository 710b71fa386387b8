//! A trivial scatter plot with axes, ticks, and labels.
//!
//! Not a plotting library — just a demonstration of how one could be
//! assembled from the construction API.
//!
//! Run with: `cargo run --example scatter_plot`
#![allow(clippy::expect_used)]

use tagtree::{attrs, save, Tree};

const SVG_WIDTH: f64 = 500.0;
const SVG_HEIGHT: f64 = 500.0;
/// Space for labels and axes.
const MARGIN: f64 = 50.0;

const DATA_X_MIN: f64 = 0.0;
const DATA_X_MAX: f64 = 100.0;
const DATA_Y_MIN: f64 = 0.0;
const DATA_Y_MAX: f64 = 100.0;

/// Maps data coordinates to SVG pixel space, rounded to 1/100th of a pixel.
/// The y axis is inverted: SVG y grows downward.
fn data_to_svg(x: f64, y: f64) -> (f64, f64) {
    let x_svg = MARGIN + ((x - DATA_X_MIN) / (DATA_X_MAX - DATA_X_MIN)) * (SVG_WIDTH - 2.0 * MARGIN);
    let y_svg = SVG_HEIGHT
        - MARGIN
        - ((y - DATA_Y_MIN) / (DATA_Y_MAX - DATA_Y_MIN)) * (SVG_HEIGHT - 2.0 * MARGIN);
    ((x_svg * 100.0).round() / 100.0, (y_svg * 100.0).round() / 100.0)
}

fn main() {
    // Random (x, y) data points.
    let num_points = 50;
    let points: Vec<(f64, f64)> = (0..num_points)
        .map(|_| (fastrand::f64() * 100.0, fastrand::f64() * 100.0))
        .collect();

    let mut canvas = Tree::new(
        "svg",
        attrs![width: format!("{SVG_WIDTH}px"), height: format!("{SVG_HEIGHT}px")],
    );
    let root = canvas.root();

    // Axis lines.
    canvas.append_element(
        root,
        "line",
        attrs![
            x1: MARGIN, y1: SVG_HEIGHT - MARGIN,
            x2: SVG_WIDTH - MARGIN, y2: SVG_HEIGHT - MARGIN,
            stroke: "black", stroke_width: 2,
        ],
    );
    canvas.append_element(
        root,
        "line",
        attrs![
            x1: MARGIN, y1: MARGIN,
            x2: MARGIN, y2: SVG_HEIGHT - MARGIN,
            stroke: "black", stroke_width: 2,
        ],
    );

    // Axis labels.
    let x_label = canvas.append_element(
        root,
        "text",
        attrs![x: SVG_WIDTH / 2.0, y: SVG_HEIGHT - 10.0, text_anchor: "middle"],
    );
    canvas.append_text(x_label, "X Axis");
    let y_label = canvas.append_element(
        root,
        "text",
        attrs![
            x: 10, y: SVG_HEIGHT / 2.0, text_anchor: "middle",
            transform: format!("rotate(-90,10,{})", SVG_HEIGHT / 2.0),
        ],
    );
    canvas.append_text(y_label, "Y Axis");

    // Tick marks and tick labels.
    let num_ticks = 5;
    for i in 0..=num_ticks {
        let frac = f64::from(i) / f64::from(num_ticks);

        let tick_x = MARGIN + frac * (SVG_WIDTH - 2.0 * MARGIN);
        let value_x = DATA_X_MIN + frac * (DATA_X_MAX - DATA_X_MIN);
        canvas.append_element(
            root,
            "line",
            attrs![
                x1: tick_x, y1: SVG_HEIGHT - MARGIN,
                x2: tick_x, y2: SVG_HEIGHT - MARGIN + 5.0,
                stroke: "black",
            ],
        );
        let label = canvas.append_element(
            root,
            "text",
            attrs![x: tick_x, y: SVG_HEIGHT - MARGIN + 20.0, text_anchor: "middle"],
        );
        canvas.append_text(label, format!("{value_x:.1}"));

        let tick_y = SVG_HEIGHT - MARGIN - frac * (SVG_HEIGHT - 2.0 * MARGIN);
        let value_y = DATA_Y_MIN + frac * (DATA_Y_MAX - DATA_Y_MIN);
        canvas.append_element(
            root,
            "line",
            attrs![x1: MARGIN - 5.0, y1: tick_y, x2: MARGIN, y2: tick_y, stroke: "black"],
        );
        let label = canvas.append_element(
            root,
            "text",
            attrs![x: MARGIN - 10.0, y: tick_y + 5.0, text_anchor: "end"],
        );
        canvas.append_text(label, format!("{value_y:.1}"));
    }

    // The points themselves.
    for (x, y) in points {
        let (x_svg, y_svg) = data_to_svg(x, y);
        canvas.append_element(
            root,
            "circle",
            attrs![cx: x_svg, cy: y_svg, r: 5, fill: "blue", stroke: "black", stroke_width: 1],
        );
    }

    save(&canvas, "SVG_scatter_plot_with_axes.svg").expect("failed to save SVG");
}
