//! SVG demo with CSS, gradients, transforms, and an animated shape.
//!
//! Run with: `cargo run --example advanced`
#![allow(clippy::expect_used)]

use tagtree::{attrs, save, Tree};

fn main() {
    let mut canvas = Tree::new("svg", attrs![width: "400px", height: "400px"]);
    let root = canvas.root();

    // Stylesheet with an animation keyframe.
    let css = "
text {
  font-family: sans-serif;
  font-size: 12px;
  fill: black;
}
@keyframes move {
  0% { transform: translateX(0px); }
  50% { transform: translateX(50px); }
  100% { transform: translateX(0px); }
}
.animated {
  animation: move 2s infinite;
}
";
    let style = canvas.append_element(root, "style", attrs![]);
    canvas.append_text(style, css);

    // A gradient definition, used by the rectangle below.
    let defs = canvas.append_element(root, "defs", attrs![]);
    let gradient = canvas.append_element(
        defs,
        "linearGradient",
        attrs![id: "grad1", x1: "0%", y1: "0%", x2: "100%", y2: "0%"],
    );
    canvas.append_element(
        gradient,
        "stop",
        attrs![offset: "0%", style: "stop-color:blue;stop-opacity:1"],
    );
    canvas.append_element(
        gradient,
        "stop",
        attrs![offset: "100%", style: "stop-color:purple;stop-opacity:1"],
    );
    canvas.append_element(
        root,
        "rect",
        attrs![x: 50, y: 50, width: 300, height: 100, fill: "url(#grad1)"],
    );

    // A transformed group with a rotated rectangle.
    let group = canvas.append_element(root, "g", attrs![transform: "rotate(30,200,200)"]);
    canvas.append_element(
        group,
        "rect",
        attrs![x: 150, y: 150, width: 100, height: 50, fill: "red", stroke: "black", stroke_width: 2],
    );

    // A curved path.
    canvas.append_element(
        root,
        "path",
        attrs![d: "M 50 250 Q 200 100 350 250", stroke: "green", fill: "none", stroke_width: 3],
    );

    // An animated circle picking up the stylesheet class.
    canvas.append_element(
        root,
        "circle",
        attrs![cx: 200, cy: 300, r: 20, fill: "orange", class: "animated"],
    );

    let caption = canvas.append_element(root, "text", attrs![x: 50, y: 350]);
    canvas.append_text(
        caption,
        "SVG Demo with Transformations, Animations, and Gradients",
    );

    save(&canvas, "SVG_advanced_demo.svg").expect("failed to save SVG");
}
