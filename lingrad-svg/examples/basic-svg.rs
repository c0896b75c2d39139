// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic example of rendering a gradient sample to a SVG

use std::io;

use lingrad::{samples, RenderContext};

fn main() {
    let test_picture_number = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(0);
    let sample = samples::get(test_picture_number).unwrap();
    let mut rc = lingrad_svg::RenderContext::new(Some(sample.size()));
    sample.draw(&mut rc).unwrap();
    rc.finish().unwrap();
    rc.write(io::stdout()).unwrap();
}
