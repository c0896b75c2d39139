// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lingrad::kurbo::Size;
use lingrad::{
    samples, BorderRadii, Color, Error, ExtendMode, GradientSurface, RenderContext as _,
};
use lingrad_svg::RenderContext;

fn render(surface: &GradientSurface) -> String {
    let mut rc = RenderContext::new(Some(surface.clip_path().size()));
    surface.paint(&mut rc).unwrap();
    rc.finish().unwrap();
    rc.display().to_string()
}

#[test]
fn writes_gradient_and_clip() {
    let mut surface = GradientSurface::new();
    surface.set_size(Size::new(200.0, 100.0));
    surface.set_colors(vec![Color::rgb8(255, 0, 0), Color::rgb8(0, 0, 255)]);
    surface.set_locations(Some(vec![0.25, 0.75]));
    surface.set_border_radii(BorderRadii::uniform(10.0));

    let svg = render(&surface);
    assert!(svg.contains("<clipPath"));
    assert!(svg.contains("<linearGradient"));
    assert!(svg.contains(r#"gradientUnits="userSpaceOnUse""#));
    assert!(svg.contains(r#"spreadMethod="pad""#));
    assert!(svg.contains(r#"y2="100""#));
    assert!(svg.contains(r#"offset="0.25""#));
    assert!(svg.contains(r##"stop-color="#ff0000""##));
    assert!(svg.contains(r##"stop-color="#0000ff""##));
    assert!(svg.contains(r#"clip-path="url(#a)""#));
    assert!(svg.contains(r#"fill="url(#b)""#));
}

#[test]
fn even_offsets_without_locations() {
    let mut surface = GradientSurface::new();
    surface.set_size(Size::new(10.0, 10.0));
    surface.set_colors(vec![Color::WHITE, Color::BLACK, Color::WHITE]);

    let svg = render(&surface);
    assert!(svg.contains(r#"offset="0""#));
    assert!(svg.contains(r#"offset="0.5""#));
    assert!(svg.contains(r#"offset="1""#));
}

#[test]
fn spread_method_follows_extend_mode() {
    let mut surface = GradientSurface::new();
    surface.set_size(Size::new(10.0, 10.0));
    surface.set_colors(vec![Color::WHITE, Color::BLACK]);
    surface.set_extend_mode(ExtendMode::Reflect);
    assert!(render(&surface).contains(r#"spreadMethod="reflect""#));

    surface.set_extend_mode(ExtendMode::Repeat);
    assert!(render(&surface).contains(r#"spreadMethod="repeat""#));
}

#[test]
fn empty_without_plan() {
    let mut surface = GradientSurface::new();
    surface.set_size(Size::new(10.0, 10.0));
    let svg = render(&surface);
    assert!(!svg.contains("<linearGradient"));
    assert!(!svg.contains("<clipPath"));
}

#[test]
fn unbalanced_restore() {
    let mut rc = RenderContext::new(None);
    assert!(matches!(rc.restore(), Err(Error::StackUnbalance)));
}

#[test]
fn samples_render() {
    for number in 0..samples::SAMPLE_COUNT {
        let sample = samples::get(number).unwrap();
        let mut rc = RenderContext::new(Some(sample.size()));
        sample.draw(&mut rc).unwrap();
        assert!(rc.display().to_string().contains("<linearGradient"));
    }
}
